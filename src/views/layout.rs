use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

/// Everything the shared page frame needs to know about the request.
pub struct Chrome<'a> {
    pub locale: &'a str,
    pub dark: bool,
    pub user: Option<&'a str>,
}

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/icon.svg" type="image/svg+xml";
    }
}

fn theme_toggle(chrome: &Chrome) -> Markup {
    html! {
        form method="post" action=(names::TOGGLE_THEME_URL) {
            button type="submit" class="theme-toggle" title="Toggle theme" {
                @if chrome.dark { "☀" } @else { "🌙" }
            }
        }
    }
}

fn header(chrome: &Chrome) -> Markup {
    let locale = chrome.locale;
    html! {
        header {
            nav class="brand" {
                ul {
                    li {
                        a href=(names::HOME_URL) {
                            strong { "Smart4Edu" }
                        }
                    }
                }
                ul {
                    li class="secondary" {
                        @if let Some(name) = chrome.user {
                            (name)
                        } @else {
                            (t!("nav.guest", locale = locale))
                        }
                    }
                    li { (theme_toggle(chrome)) }
                }
            }
            nav class="tabs" {
                ul {
                    li { a href=(names::PRACTICE_URL) { (t!("nav.practice", locale = locale)) } }
                    li { a href=(names::CALM_URL) { (t!("nav.calm", locale = locale)) } }
                    li { a href=(names::HOME_URL) { (t!("nav.home", locale = locale)) } }
                    li { a href=(names::CHAT_URL) { (t!("nav.chat", locale = locale)) } }
                    li { a href=(names::PROGRESS_URL) { (t!("nav.progress", locale = locale)) } }
                }
            }
        }
    }
}

fn footer(chrome: &Chrome) -> Markup {
    let locale = chrome.locale;
    html! {
        footer {
            nav class="secondary" {
                ul {
                    li { a href=(names::SETTINGS_URL) { (t!("nav.settings", locale = locale)) } }
                    li { a href=(names::HELP_URL) { (t!("nav.help", locale = locale)) } }
                    li { a href=(names::ABOUT_URL) { (t!("nav.about", locale = locale)) } }
                    li {
                        form method="post" action=(names::LOGOUT_URL) {
                            button type="submit" class="link" { (t!("nav.logout", locale = locale)) }
                        }
                    }
                }
                ul {
                    li class="secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn document(title: &str, chrome: &Chrome, contents: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(chrome.locale) data-theme=(if chrome.dark { "dark" } else { "light" }) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (icon())

                title { (format!("{title} - Smart4Edu")) }
            }

            body class="container" {
                (contents)
            }
        }
    }
}

/// Full page with the logged-in chrome (tab bar, theme toggle, footer nav).
pub fn page(title: &str, body: Markup, chrome: &Chrome) -> Markup {
    document(
        title,
        chrome,
        html! {
            (header(chrome))
            main { (body) }
            (footer(chrome))
        },
    )
}

/// Chromeless page for the login and signup screens.
pub fn bare_page(title: &str, body: Markup, chrome: &Chrome) -> Markup {
    document(title, chrome, html! { main { (body) } })
}
