//! API utilities for storefront-backend communication
//!
//! Provides the catalog API base URL and the client-side tuning constants.

/// Quiescence window of the product filter, in milliseconds
pub const FILTER_DEBOUNCE_MS: u32 = 300;

/// Get the base URL for catalog API requests
///
/// `STOREFRONT_API_BASE` set at build time wins. Otherwise the URL is
/// constructed from the current window location, using port 3000 for the
/// backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("STOREFRONT_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
