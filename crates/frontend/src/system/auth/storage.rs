//! Browser persistence of the trip planner session token.

use web_sys::{window, Storage};

const SESSION_TOKEN_KEY: &str = "trip_planner.access_token";

fn local_storage() -> Result<Storage, String> {
    window()
        .ok_or_else(|| "no window".to_string())?
        .local_storage()
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Logs a failed storage write. Returns whether the write went through.
fn settle(action: &str, result: Result<(), String>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("session token not {}: {}", action, e);
            false
        }
    }
}

pub fn save_access_token(token: &str) -> bool {
    settle(
        "persisted",
        local_storage().and_then(|s| {
            s.set_item(SESSION_TOKEN_KEY, token)
                .map_err(|e| format!("{e:?}"))
        }),
    )
}

/// Stored token, as written. An unreadable storage reads as no session.
pub fn load_access_token() -> Option<String> {
    local_storage().ok()?.get_item(SESSION_TOKEN_KEY).ok()?
}

pub fn clear_access_token() -> bool {
    settle(
        "cleared",
        local_storage().and_then(|s| {
            s.remove_item(SESSION_TOKEN_KEY)
                .map_err(|e| format!("{e:?}"))
        }),
    )
}
