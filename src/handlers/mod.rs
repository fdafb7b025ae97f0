pub mod calm;
pub mod chat;
pub mod home;
pub mod practice;
pub mod progress;
pub mod settings;

use axum::http::{header, HeaderMap};

use crate::names;

/// Where a toggle should send the user back to. Falls back to the home
/// screen when the browser did not send a referrer.
pub(crate) fn back_url(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(names::HOME_URL)
        .to_string()
}
