use crate::shared::icons::icon;
use contracts::domain::a001_activity::aggregate::{ActivityCategory, ActivityId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Picture URL, or `None` when the entry carries no image.
fn image_src(image: &str) -> Option<&str> {
    let image = image.trim();
    (!image.is_empty()).then_some(image)
}

/// Card for a single activity. Values are shown exactly as received.
#[component]
pub fn ActivityCard(
    id: ActivityId,
    name: String,
    category: ActivityCategory,
    /// Rendered verbatim, even outside 0..=5
    rating: f64,
    country: String,
    /// Asset URL of the picture
    image: String,
) -> impl IntoView {
    let dom_id = format!("activity-{}", id.as_string());
    let badge_class = format!("activity-card__badge activity-card__badge--{}", category.as_str());
    let picture = match image_src(&image) {
        Some(src) => view! {
            <img class="activity-card__image" src=src.to_string() alt=name.clone() />
        }
        .into_any(),
        None => view! {
            <div class="activity-card__image activity-card__image--placeholder">
                {icon("map-pin")}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="activity-card" id=dom_id data-activity-id=id.as_string()>
            {picture}
            <div class="activity-card__body">
                <div class="activity-card__title">
                    <span class="activity-card__name">{name}</span>
                    <span class=badge_class>{category.to_string()}</span>
                </div>
                <div class="activity-card__meta">
                    <span class="activity-card__rating">
                        {icon("star")}
                        {rating.to_string()}
                    </span>
                    <span class="activity-card__country">
                        {icon("map-pin")}
                        {country}
                    </span>
                </div>
            </div>
        </div>
    }
}
