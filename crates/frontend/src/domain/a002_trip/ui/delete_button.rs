use crate::domain::a002_trip::api::delete_trip;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::a002_trip::aggregate::TripId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum DeleteStatus {
    Idle,
    Deleting,
    Deleted,
    Failed(String),
}

impl DeleteStatus {
    /// No further request may start: one is running or the trip is gone.
    fn is_locked(&self) -> bool {
        matches!(self, DeleteStatus::Deleting | DeleteStatus::Deleted)
    }

    fn message(&self) -> Option<String> {
        match self {
            DeleteStatus::Idle | DeleteStatus::Deleting => None,
            DeleteStatus::Deleted => Some("Trip deleted.".to_string()),
            DeleteStatus::Failed(e) => Some(format!("Failed to delete trip: {}", e)),
        }
    }
}

fn confirm_delete(trip_id: TripId) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Delete trip #{}?", trip_id))
                .ok()
        })
        .unwrap_or(false)
}

/// Deletes the given trip after a browser confirmation
#[component]
pub fn DeleteButton(trip_id: TripId) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let status = RwSignal::new(DeleteStatus::Idle);

    let handle_delete = move |_: leptos::ev::MouseEvent| {
        if status.with_untracked(DeleteStatus::is_locked) || !confirm_delete(trip_id) {
            return;
        }

        let token = auth_state.with_untracked(|s| s.access_token.clone());
        status.set(DeleteStatus::Deleting);

        spawn_local(async move {
            match delete_trip(trip_id, token).await {
                Ok(()) => {
                    log::info!("trip {} deleted", trip_id);
                    status.set(DeleteStatus::Deleted);
                }
                Err(e) => {
                    log::error!("failed to delete trip {}: {}", trip_id, e);
                    status.set(DeleteStatus::Failed(e));
                }
            }
        });
    };

    view! {
        <div class="delete-trip" data-trip-id=trip_id.to_string()>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_delete
                disabled=Signal::derive(move || status.with(DeleteStatus::is_locked))
                loading=Signal::derive(move || status.get() == DeleteStatus::Deleting)
            >
                {icon("delete")}
                {move || if status.get() == DeleteStatus::Deleting { "Deleting..." } else { "Delete trip" }}
            </Button>
            {move || status.get().message().map(|m| view! {
                <span class="delete-trip__status">{m}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_after_request_starts() {
        assert!(!DeleteStatus::Idle.is_locked());
        assert!(DeleteStatus::Deleting.is_locked());
        assert!(DeleteStatus::Deleted.is_locked());
        assert!(!DeleteStatus::Failed("HTTP 500".to_string()).is_locked());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(DeleteStatus::Idle.message(), None);
        assert_eq!(DeleteStatus::Deleting.message(), None);
        assert_eq!(DeleteStatus::Deleted.message().as_deref(), Some("Trip deleted."));
        assert_eq!(
            DeleteStatus::Failed("HTTP 404".to_string()).message().as_deref(),
            Some("Failed to delete trip: HTTP 404")
        );
    }
}
