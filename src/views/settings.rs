use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

pub fn settings(locale: &str) -> Markup {
    html! {
        h2 { (t!("settings.title", locale = locale)) }

        article {
            strong { (t!("settings.language", locale = locale)) }
            div class="setting-row" {
                span { (t!("settings.language_name", locale = locale)) }
                form method="post" action=(names::SET_LOCALE_URL) {
                    button type="submit" { (t!("settings.switch", locale = locale)) }
                }
            }
        }

        article {
            p class="muted" { (t!("settings.theme_note", locale = locale)) }
        }
    }
}

pub fn help(locale: &str) -> Markup {
    html! {
        h2 { (t!("help.title", locale = locale)) }

        article {
            strong { (t!("help.intro", locale = locale)) }
            ul {
                li { (t!("help.tip_practice", locale = locale)) }
                li { (t!("help.tip_calm", locale = locale)) }
                li { (t!("help.tip_progress", locale = locale)) }
            }
        }
    }
}

pub fn about(locale: &str) -> Markup {
    html! {
        h2 { (t!("about.title", locale = locale)) }

        article {
            strong { "Smart4Edu" }
            p { (t!("about.blurb", locale = locale)) }
            p class="muted" { (t!("about.version", locale = locale, v = crate::utils::VERSION)) }
        }
    }
}
