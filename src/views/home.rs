use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

pub enum LoginState {
    NoError,
    EmptyFields,
}

pub fn login(state: LoginState, locale: &str) -> Markup {
    html! {
        article class="login-card" {
            hgroup {
                h1 { (t!("login.welcome", locale = locale)) }
                p { (t!("login.subtitle", locale = locale)) }
            }

            form method="post" action=(names::LOGIN_URL) {
                label {
                    (t!("login.username", locale = locale))
                    input type="text" name="username"
                          placeholder=(t!("login.enter_username", locale = locale));
                }
                label {
                    (t!("login.password", locale = locale))
                    input type="password" name="password"
                          placeholder=(t!("login.enter_password", locale = locale));
                }

                @if let LoginState::EmptyFields = state {
                    p class="error" { (t!("login.empty_error", locale = locale)) }
                }

                button type="submit" class="accent" { (t!("login.login", locale = locale)) }
            }

            p class="muted" {
                a href=(names::SIGNUP_URL) { (t!("login.no_account", locale = locale)) }
            }
        }
    }
}

pub fn signup(locale: &str) -> Markup {
    html! {
        article {
            h2 { (t!("login.signup_soon", locale = locale)) }
            p {
                a href=(names::LOGIN_URL) { (t!("login.have_account", locale = locale)) }
            }
        }
    }
}

pub struct HomeData<'a> {
    pub username: &'a str,
    pub daily_tip: &'a str,
}

pub fn home(data: HomeData, locale: &str) -> Markup {
    html! {
        hgroup {
            h2 {
                @if data.username.is_empty() {
                    (t!("home.hello", locale = locale))
                } @else {
                    (t!("home.hello_name", locale = locale, name = data.username))
                }
            }
            p { (t!("home.subtitle", locale = locale)) }
        }

        article class="tip-card" {
            p class="tip-label" { (t!("home.daily_tip", locale = locale)) }
            p class="tip" { (data.daily_tip) }
        }

        (stat_card(
            &t!("home.streak", locale = locale),
            &t!("home.streak_value", locale = locale),
            &t!("home.streak_hint", locale = locale),
        ))
        (stat_card(
            &t!("home.last_score", locale = locale),
            "78/100",
            &t!("home.last_score_hint", locale = locale),
        ))

        article {
            p class="muted" { (t!("home.todays_focus", locale = locale)) }
            h3 { (t!("home.focus_task", locale = locale)) }
            a href=(names::PRACTICE_URL) role="button" {
                (t!("home.go_practice", locale = locale))
            }
        }
    }
}

fn stat_card(title: &str, value: &str, hint: &str) -> Markup {
    html! {
        article class="stat-card" {
            p class="muted" { (title) }
            p class="stat" { (value) }
            p class="muted" { (hint) }
        }
    }
}
