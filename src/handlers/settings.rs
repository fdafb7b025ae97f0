use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;

use super::back_url;
use crate::{
    extractors::{AuthGuard, Locale, Theme},
    names, utils, views,
    views::settings as settings_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(settings))
        .route("/help", get(help))
        .route("/about", get(about))
        .route("/set-locale", post(set_locale))
        .route("/toggle-theme", post(toggle_theme))
}

async fn settings(
    AuthGuard(username): AuthGuard,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };
    views::page(
        &t!("settings.title", locale = &locale),
        settings_views::settings(&locale),
        &chrome,
    )
}

async fn help(
    AuthGuard(username): AuthGuard,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };
    views::page(
        &t!("help.title", locale = &locale),
        settings_views::help(&locale),
        &chrome,
    )
}

async fn about(
    AuthGuard(username): AuthGuard,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };
    views::page(
        &t!("about.title", locale = &locale),
        settings_views::about(&locale),
        &chrome,
    )
}

/// Flip between the two supported languages and persist the choice.
async fn set_locale(
    State(state): State<AppState>,
    Locale(locale): Locale,
    headers: HeaderMap,
) -> impl IntoResponse {
    let next = if locale == "ro" { "en" } else { "ro" };
    tracing::debug!("switching locale from {locale} to {next}");

    let cookie = utils::pref_cookie(names::LOCALE_COOKIE_NAME, next, state.secure_cookies);
    let mut response_headers = HeaderMap::new();
    response_headers.insert(SET_COOKIE, cookie.parse().unwrap());

    (response_headers, Redirect::to(&back_url(&headers)))
}

/// Flip the dark flag and persist it.
async fn toggle_theme(
    State(state): State<AppState>,
    Theme(dark): Theme,
    headers: HeaderMap,
) -> impl IntoResponse {
    let next = (!dark).to_string();

    let cookie = utils::pref_cookie(names::THEME_COOKIE_NAME, &next, state.secure_cookies);
    let mut response_headers = HeaderMap::new();
    response_headers.insert(SET_COOKIE, cookie.parse().unwrap());

    (response_headers, Redirect::to(&back_url(&headers)))
}
