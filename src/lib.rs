rust_i18n::i18n!("locales", fallback = "ro");

pub mod extractors;
pub mod handlers;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod statics;
pub mod utils;
pub mod views;

use axum::Router;

use quiz::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(secure_cookies: bool) -> Self {
        Self {
            sessions: SessionStore::new(),
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::home::routes())
        .merge(handlers::practice::routes())
        .merge(handlers::calm::routes())
        .merge(handlers::chat::routes())
        .merge(handlers::progress::routes())
        .merge(handlers::settings::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
