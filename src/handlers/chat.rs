use axum::{routing::get, Router};
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::{AuthGuard, Locale, Theme},
    views,
    views::chat as chat_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", get(chat))
}

async fn chat(
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
        &t!("nav.chat", locale = &locale),
        chat_views::chat(),
        &chrome,
    )
}
