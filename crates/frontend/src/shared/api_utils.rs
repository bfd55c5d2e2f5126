//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use crate::system::auth::Session;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses the configured base URL, or the current window location with the
/// configured backend port.
pub fn api_base() -> String {
    crate::shared::config::current().api_base()
}

/// Derive the backend URL from the current window location
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn window_api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/rest/v1/services");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode one path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn authorize(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.bearer() {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

/// GET a JSON resource
pub async fn get_json<T>(path: &str, session: &Session) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = authorize(Request::get(&api_url(path)), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and read a JSON response
pub async fn post_json<B, T>(path: &str, body: &B, session: &Session) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorize(Request::post(&api_url(path)), session)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
