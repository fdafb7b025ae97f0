use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;

use crate::{names, rejections::AppError, utils};

/// Extracts the locale from the `lang` cookie, falling back to the browser's
/// `Accept-Language` header, then to Romanian (the app's default).
pub struct Locale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = jar
            .get(names::LOCALE_COOKIE_NAME)
            .and_then(|c| match_supported_locale(c.value()))
            .or_else(|| {
                parts
                    .headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(locale_from_accept_language)
            })
            .unwrap_or(names::DEFAULT_LOCALE);
        Ok(Locale(locale.to_string()))
    }
}

/// Match a language tag against supported locales.
fn match_supported_locale(lang: &str) -> Option<&'static str> {
    match lang {
        "ro" => return Some("ro"),
        "en" => return Some("en"),
        _ => {}
    }
    if lang.starts_with("ro-") {
        return Some("ro");
    }
    if lang.starts_with("en-") {
        return Some("en");
    }
    None
}

/// Parse an `Accept-Language` header and return the best matching supported locale.
fn locale_from_accept_language(header: &str) -> Option<&'static str> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if let Some((lang, params)) = entry.split_once(';') {
                let q = params
                    .split(';')
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|v| v.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (lang.trim(), q)
            } else {
                (entry, 1.0)
            }
        })
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
        .iter()
        .find_map(|(lang, _)| match_supported_locale(lang))
}

/// Extracts the dark-theme flag from the `dark_theme` cookie; light by default.
pub struct Theme(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for Theme {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let dark = jar
            .get(names::THEME_COOKIE_NAME)
            .is_some_and(|c| c.value() == "true");
        Ok(Theme(dark))
    }
}

/// Guard extractor for the logged-in screens. Login is deliberately
/// trivial: the session cookie simply carries the chosen username, and its
/// presence is the whole authorization story. Carries the display name.
pub struct AuthGuard(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let username = jar
            .get(names::USER_SESSION_COOKIE_NAME)
            .and_then(|c| utils::decode_component(c.value()))
            .filter(|name| !name.is_empty());

        match username {
            Some(name) => Ok(AuthGuard(name)),
            None => Err(AppError::Unauthorized),
        }
    }
}
