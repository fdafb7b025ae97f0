use axum::{routing::get, Router};
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::{AuthGuard, Locale, Theme},
    views,
    views::progress as progress_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/progress", get(progress))
}

async fn progress(
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
        &t!("nav.progress", locale = &locale),
        progress_views::progress(&locale),
        &chrome,
    )
}
