use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{html, Markup};

use crate::{names, quiz::SessionError};

#[derive(Debug)]
pub enum AppError {
    /// No user cookie; the screens behind the guard bounce to the login page.
    Unauthorized,
    /// A quiz intent arrived out of order or with a bad argument.
    BadRequest(&'static str),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => Redirect::to(names::LOGIN_URL).into_response(),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, error_page(message)).into_response()
            }
            AppError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, error_page(message)).into_response()
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidArgument => AppError::BadRequest("option index out of range"),
            SessionError::InvalidState => AppError::BadRequest("action not available right now"),
        }
    }
}

pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}

fn error_page(message: &str) -> Markup {
    html! {
        h1 { (message) }
        p { a href=(names::HOME_URL) { "Smart4Edu" } }
    }
}
