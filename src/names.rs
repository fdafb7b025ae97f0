use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const HOME_URL: &str = "/";
pub const LOGIN_URL: &str = "/login";
pub const SIGNUP_URL: &str = "/signup";
pub const LOGOUT_URL: &str = "/logout";

pub const PRACTICE_URL: &str = "/practice";
pub const CALM_URL: &str = "/calm";
pub const CHAT_URL: &str = "/chat";
pub const PROGRESS_URL: &str = "/progress";

pub const SETTINGS_URL: &str = "/settings";
pub const HELP_URL: &str = "/help";
pub const ABOUT_URL: &str = "/about";

pub const QUIZ_URL: &str = "/quiz";
pub const QUIZ_CHECK_URL: &str = "/quiz/check";
pub const QUIZ_ADVANCE_URL: &str = "/quiz/advance";
pub const QUIZ_RETRY_URL: &str = "/quiz/retry";
pub const QUIZ_ABANDON_URL: &str = "/quiz/abandon";

pub fn quiz_select_url(option: usize) -> String {
    format!("/quiz/select/{option}")
}

// Subject and topic names carry spaces and diacritics; they are encoded on
// the way into a path and decoded by the path extractor on the way out.
fn encode(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

pub fn practice_menu_url(subject: &str) -> String {
    format!("/practice/{}", encode(subject))
}

pub fn practice_topic_url(subject: &str, topic: &str) -> String {
    format!("/practice/{}/{}", encode(subject), encode(topic))
}

pub fn start_quiz_url(subject: &str, topic: &str) -> String {
    format!("/practice/{}/{}/quiz", encode(subject), encode(topic))
}

pub const USER_SESSION_COOKIE_NAME: &str = "user_session";
pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

// The only durable state in the whole application.
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const THEME_COOKIE_NAME: &str = "dark_theme";
pub const DEFAULT_LOCALE: &str = "ro";

pub const SET_LOCALE_URL: &str = "/set-locale";
pub const TOGGLE_THEME_URL: &str = "/toggle-theme";
