//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the trip planner API listens on, next to the static frontend host
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin(&protocol, &hostname)
}

fn origin(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/trip/1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_uses_api_port() {
        assert_eq!(origin("https:", "trips.example.com"), "https://trips.example.com:3000");
        assert_eq!(origin("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}
