use axum::{routing::get, Router};
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::{AuthGuard, Locale, Theme},
    views,
    views::calm as calm_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/calm", get(calm))
}

async fn calm(
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
        &t!("nav.calm", locale = &locale),
        calm_views::calm(),
        &chrome,
    )
}
