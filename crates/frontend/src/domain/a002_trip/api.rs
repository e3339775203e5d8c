use contracts::domain::a002_trip::aggregate::TripId;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub fn trip_path(trip_id: TripId) -> String {
    format!("/api/trip/{}", trip_id.as_string())
}

/// `Authorization` value for a session token; blank tokens send nothing.
fn bearer(access_token: Option<&str>) -> Option<String> {
    access_token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// DELETE a trip. The bearer token is attached when a session exists.
pub async fn delete_trip(trip_id: TripId, access_token: Option<String>) -> Result<(), String> {
    let mut request =
        Request::delete(&api_url(&trip_path(trip_id))).header("Accept", "application/json");
    if let Some(auth) = bearer(access_token.as_deref()) {
        request = request.header("Authorization", &auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
