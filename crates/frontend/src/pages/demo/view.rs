use crate::domain::a001_activity::ui::ActivityCard;
use crate::domain::a002_trip::ui::DeleteButton;
use crate::layout::{Footer, Header};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RequireLogin, ViewState};
use contracts::domain::a001_activity::aggregate::ActivityEntry;
use contracts::domain::a002_trip::aggregate::TripId;
use leptos::prelude::*;
use leptos_router::components::A;

use super::view_model::{
    compose_content, compose_page, demo_activities, CardSlot, ContentSection, PageBlock,
    SpacerSize, DEMO_TRIP_ID,
};

fn spacer_class(size: SpacerSize) -> &'static str {
    match size {
        SpacerSize::Xl => "space space--xl",
    }
}

fn render_card(slot: CardSlot) -> impl IntoView {
    let CardSlot { span, entry } = slot;

    view! {
        <div class=format!("grid__col grid__col--{}", span)>
            <ActivityCard
                id=entry.id
                name=entry.name
                category=entry.category
                rating=entry.rating
                country=entry.country
                image=entry.image
            />
        </div>
    }
}

fn render_content(section: ContentSection) -> impl IntoView {
    view! {
        <div class="container container--lg">
            <div class="center">
                <span class="text text--xl">{section.title}</span>
            </div>
            <div class="center">
                <A href=section.home_link.href>{section.home_link.label}</A>
            </div>
            <div class="grid">
                {section.cards.into_iter().map(render_card).collect_view()}
            </div>
        </div>
    }
}

/// Content or login prompt, switched in place when the token changes.
fn render_branch(view_state: Memo<ViewState>, entries: StoredValue<Vec<ActivityEntry>>) -> AnyView {
    view! {
        <Show
            when=move || view_state.get().is_authenticated()
            fallback=|| view! { <RequireLogin /> }
        >
            {move || entries.with_value(|e| render_content(compose_content(e)))}
        </Show>
    }
    .into_any()
}

fn render_block(
    block: PageBlock,
    view_state: Memo<ViewState>,
    entries: StoredValue<Vec<ActivityEntry>>,
) -> AnyView {
    match block {
        PageBlock::Header { show_search_bar } => view! {
            <div class="container container--xl">
                <Header show_search_bar=show_search_bar />
            </div>
        }
        .into_any(),
        PageBlock::Content(_) | PageBlock::RequireLogin => render_branch(view_state, entries),
        PageBlock::DeleteButton { trip_id } => view! { <DeleteButton trip_id=trip_id /> }.into_any(),
        PageBlock::Spacer(size) => view! { <div class=spacer_class(size)></div> }.into_any(),
        PageBlock::Footer => view! { <Footer /> }.into_any(),
    }
}

/// Auth-gated page with a grid of activity cards and a delete control for `trip_id`.
///
/// Block order comes from [`compose_page`]. Header, delete control, spacers and
/// footer are built once; only the branch block follows the token.
#[component]
pub fn ActivityPage(entries: Vec<ActivityEntry>, trip_id: TripId) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let entries = StoredValue::new(entries);
    let view_state = Memo::new(move |_| auth_state.with(|s| ViewState::from_token(s.token())));

    Effect::new(move |_| {
        log::debug!("trip {} page: {:?}", trip_id, view_state.get());
    });

    let layout = entries.with_value(|e| compose_page(view_state.get_untracked(), e, trip_id));
    let blocks = layout
        .blocks
        .into_iter()
        .map(|block| render_block(block, view_state, entries))
        .collect_view();

    view! {
        <div class="page page--activities">
            {blocks}
        </div>
    }
}

#[component]
pub fn DemoPage() -> impl IntoView {
    view! { <ActivityPage entries=demo_activities() trip_id=DEMO_TRIP_ID /> }
}
