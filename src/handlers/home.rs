use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::{AuthGuard, Locale, Theme},
    names, utils, views,
    views::home as home_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page).post(login_post))
        .route("/signup", get(signup_page))
        .route("/logout", post(logout_post))
}

const TIPS: [&str; 10] = [
    "Start with 10 minutes. Starting is the hardest part.",
    "Use 25 minutes focus + 5 minutes break.",
    "Do one small task at a time: one lesson, one topic.",
    "Close notes and explain it in your own words.",
    "Mistakes are data: review and write the correct method.",
    "Sleep helps memory. Don't sacrifice it before a test.",
    "Silence notifications for 20–30 minutes while studying.",
    "Practice beats rereading: solve, then check solutions.",
    "If stuck, take a short walk and come back.",
    "Consistency wins: a little daily beats cramming.",
];

/// One tip per calendar day, rotating through the list.
fn daily_tip() -> &'static str {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0) as usize;
    TIPS[days % TIPS.len()]
}

async fn home(
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
        &t!("nav.home", locale = &locale),
        home_views::home(
            home_views::HomeData {
                username: &username,
                daily_tip: daily_tip(),
            },
            &locale,
        ),
        &chrome,
    )
}

async fn login_page(Locale(locale): Locale, Theme(dark): Theme) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: None,
    };
    views::bare_page(
        &t!("login.login", locale = &locale),
        home_views::login(home_views::LoginState::NoError, &locale),
        &chrome,
    )
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Theme(dark): Theme,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let username = form.username.trim();

    // Credentials are deliberately not validated: any non-empty pair
    // logs in and the username becomes the display name.
    if username.is_empty() || form.password.is_empty() {
        let chrome = views::Chrome {
            locale: &locale,
            dark,
            user: None,
        };
        return views::bare_page(
            &t!("login.login", locale = &locale),
            home_views::login(home_views::LoginState::EmptyFields, &locale),
            &chrome,
        )
        .into_response();
    }

    tracing::info!("user '{username}' logged in");

    let cookie = utils::cookie(
        names::USER_SESSION_COOKIE_NAME,
        &utils::encode_component(username),
        state.secure_cookies,
    );
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().unwrap());

    (headers, Redirect::to(names::HOME_URL)).into_response()
}

async fn signup_page(Locale(locale): Locale, Theme(dark): Theme) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: None,
    };
    views::bare_page(
        &t!("login.signup", locale = &locale),
        home_views::signup(&locale),
        &chrome,
    )
}

async fn logout_post() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        utils::clear_cookie(names::USER_SESSION_COOKIE_NAME)
            .parse()
            .unwrap(),
    );
    (headers, Redirect::to(names::LOGIN_URL))
}
