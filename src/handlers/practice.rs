use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::{AuthGuard, Locale, Theme},
    names,
    quiz::{self, QuizSession},
    rejections::{AppError, ResultExt},
    utils, views,
    views::practice as practice_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/practice", get(subjects))
        .route("/practice/{subject}", get(topic_menu))
        .route("/practice/{subject}/{topic}", get(topic_page))
        .route("/practice/{subject}/{topic}/quiz", post(start_quiz))
        .route("/quiz", get(quiz_page))
        .route("/quiz/select/{option}", post(select_option))
        .route("/quiz/check", post(check))
        .route("/quiz/advance", post(advance))
        .route("/quiz/retry", post(retry))
        .route("/quiz/abandon", post(abandon))
}

async fn subjects(
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
        &t!("nav.practice", locale = &locale),
        practice_views::subjects(&locale),
        &chrome,
    )
}

async fn topic_menu(
    AuthGuard(username): AuthGuard,
    Path(subject): Path<String>,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };
    let topics = quiz::bank::topics(&subject);
    views::page(
        &subject,
        practice_views::topic_menu(&subject, &topics, &locale),
        &chrome,
    )
}

async fn topic_page(
    AuthGuard(username): AuthGuard,
    Path((subject, topic)): Path<(String, String)>,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Markup {
    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };
    views::page(
        &topic,
        practice_views::topic_page(&subject, &topic, &locale),
        &chrome,
    )
}

/// Resolve the bank once and open a fresh session. An unknown subject
/// still gets a session; with zero questions it is complete from the
/// start and renders as "no quiz available". Any session the old quiz
/// cookie still points at is dropped, since its cookie is about to be
/// overwritten.
async fn start_quiz(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
    Path((subject, topic)): Path<(String, String)>,
) -> impl IntoResponse {
    if let Some(stale) = jar.get(names::QUIZ_SESSION_COOKIE_NAME) {
        state.sessions.remove(stale.value());
    }

    let questions = quiz::resolve(&subject, &topic);
    tracing::info!(
        "starting quiz for '{subject}' / '{topic}' ({} questions)",
        questions.len()
    );

    let token = state
        .sessions
        .create(QuizSession::new(subject, topic, questions));

    let cookie = utils::cookie(names::QUIZ_SESSION_COOKIE_NAME, &token, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().unwrap());

    (headers, Redirect::to(names::QUIZ_URL))
}

fn quiz_token(jar: &CookieJar) -> Result<String, AppError> {
    jar.get(names::QUIZ_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .ok_or(AppError::BadRequest("no active quiz"))
}

async fn quiz_page(
    AuthGuard(username): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
    Locale(locale): Locale,
    Theme(dark): Theme,
) -> Result<Response, AppError> {
    let Some(session) = jar
        .get(names::QUIZ_SESSION_COOKIE_NAME)
        .and_then(|c| state.sessions.snapshot(c.value()))
    else {
        return Ok(Redirect::to(names::PRACTICE_URL).into_response());
    };

    let chrome = views::Chrome {
        locale: &locale,
        dark,
        user: Some(&username),
    };

    let (title, body) = if session.total() == 0 {
        (
            t!("quiz.title", locale = &locale),
            practice_views::no_quiz(&session, &locale),
        )
    } else if let Some(question) = session.current_question() {
        (
            t!("quiz.title", locale = &locale),
            practice_views::question(&session, question, &locale),
        )
    } else {
        let summary = quiz::summarize(&session).reject("could not summarize finished quiz")?;
        (
            t!("result.title", locale = &locale),
            practice_views::result(&session, summary, &locale),
        )
    };

    Ok(views::page(&title, body, &chrome).into_response())
}

async fn select_option(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
    Path(option): Path<usize>,
) -> Result<Redirect, AppError> {
    let token = quiz_token(&jar)?;
    state
        .sessions
        .with(&token, |session| session.select(option))
        .ok_or(AppError::BadRequest("no active quiz"))??;
    Ok(Redirect::to(names::QUIZ_URL))
}

async fn check(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Redirect, AppError> {
    let token = quiz_token(&jar)?;
    state
        .sessions
        .with(&token, |session| session.check())
        .ok_or(AppError::BadRequest("no active quiz"))??;
    Ok(Redirect::to(names::QUIZ_URL))
}

async fn advance(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Redirect, AppError> {
    let token = quiz_token(&jar)?;
    state
        .sessions
        .with(&token, |session| session.advance())
        .ok_or(AppError::BadRequest("no active quiz"))??;
    Ok(Redirect::to(names::QUIZ_URL))
}

async fn retry(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Redirect, AppError> {
    let token = quiz_token(&jar)?;
    state
        .sessions
        .with(&token, |session| session.retry())
        .ok_or(AppError::BadRequest("no active quiz"))?;
    Ok(Redirect::to(names::QUIZ_URL))
}

/// Leaving the quiz drops the in-memory session; a finished or abandoned
/// quiz leaves no trace.
async fn abandon(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let token = quiz_token(&jar)?;
    let target = match state.sessions.remove(&token) {
        Some(session) => names::practice_topic_url(session.subject(), session.topic()),
        None => names::PRACTICE_URL.to_string(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        utils::clear_cookie(names::QUIZ_SESSION_COOKIE_NAME)
            .parse()
            .unwrap(),
    );
    Ok((headers, Redirect::to(&target)))
}
