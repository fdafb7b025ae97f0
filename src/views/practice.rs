use maud::{html, Markup};
use rust_i18n::t;

use super::components::{pill, progress_bar};
use crate::{
    names,
    quiz::{bank, QuestionRecord, QuizSession, ResultSummary},
};

pub fn subjects(locale: &str) -> Markup {
    html! {
        p class="muted" { (t!("practice.choose", locale = locale)) }

        (subject_tile(
            bank::SUBJECT_ROMANIAN,
            "Gramatică • Lectură • Exprimare",
            "tile-romanian",
            locale,
        ))
        (subject_tile(
            bank::SUBJECT_MATH,
            "Exerciții • Probleme",
            "tile-math",
            locale,
        ))
    }
}

fn subject_tile(subject: &str, subtitle: &str, class: &str, locale: &str) -> Markup {
    html! {
        a class={ "tile " (class) } href=(names::practice_menu_url(subject)) {
            h3 { (subject) }
            p { (subtitle) }
            span class="pill" { (t!("practice.open", locale = locale)) }
        }
    }
}

pub fn topic_menu(subject: &str, topics: &[&str], locale: &str) -> Markup {
    html! {
        hgroup {
            h2 { (subject) }
            p { (t!("practice.choose_topic", locale = locale)) }
        }

        @for topic in topics {
            a class="topic-card" href=(names::practice_topic_url(subject, topic)) {
                span { (topic) }
                span class="arrow" { "→" }
            }
        }
    }
}

pub fn topic_page(subject: &str, topic: &str, locale: &str) -> Markup {
    html! {
        hgroup {
            h2 { (topic) }
            p { (subject) }
        }

        article {
            h3 { (t!("practice.mini_test", locale = locale)) }
            p class="muted" { (t!("practice.mini_test_hint", locale = locale)) }
            form method="post" action=(names::start_quiz_url(subject, topic)) {
                button type="submit" { (t!("practice.start_quiz", locale = locale)) }
            }
        }
    }
}

fn quiz_heading(session: &QuizSession, title: &str) -> Markup {
    html! {
        hgroup {
            h2 { (title) }
            p { (session.subject()) " • " (session.topic()) }
        }
    }
}

fn option_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

pub fn question(session: &QuizSession, question: &QuestionRecord, locale: &str) -> Markup {
    let index = session.current_index();
    let total = session.total();
    let percent = ((index + 1) * 100 / total) as u32;

    html! {
        (quiz_heading(session, &t!("quiz.title", locale = locale)))

        div class="pill-row" {
            (pill(&format!("{} / {}", index + 1, total)))
            (pill(&t!("quiz.score", locale = locale, n = session.correct_count())))
        }
        (progress_bar(percent))

        article {
            strong { (t!("quiz.question_n", locale = locale, n = index + 1)) }
            p class="prompt" { (question.prompt) }
        }

        @for (i, option) in question.options.iter().enumerate() {
            (option_card(session, question, i, option))
        }

        @if session.locked() {
            @let correct = session.selected() == Some(question.correct_index);
            article class="feedback" {
                strong class=(if correct { "ok" } else { "bad" }) {
                    @if correct {
                        (t!("quiz.correct", locale = locale))
                    } @else {
                        (t!("quiz.incorrect", locale = locale))
                    }
                }
                p { (question.explanation) }
            }
        }

        div class="button-row" {
            form method="post" action=(names::QUIZ_ABANDON_URL) {
                button type="submit" class="secondary" { (t!("quiz.back", locale = locale)) }
            }
            @if session.locked() {
                form method="post" action=(names::QUIZ_ADVANCE_URL) {
                    button type="submit" { (t!("quiz.next", locale = locale)) }
                }
            } @else {
                form method="post" action=(names::QUIZ_CHECK_URL) {
                    button type="submit" disabled[session.selected().is_none()] {
                        (t!("quiz.check", locale = locale))
                    }
                }
            }
        }
    }
}

fn option_card(
    session: &QuizSession,
    question: &QuestionRecord,
    index: usize,
    option: &str,
) -> Markup {
    let selected = session.selected() == Some(index);

    let inner = html! {
        span class="option-label" { (option_label(index)) }
        span { (option) }
    };

    if session.locked() {
        let class = if index == question.correct_index {
            "option option-correct"
        } else if selected {
            "option option-wrong"
        } else {
            "option option-neutral"
        };
        return html! {
            div class=(class) { (inner) }
        };
    }

    let class = if selected { "option selected" } else { "option" };
    html! {
        form method="post" action=(names::quiz_select_url(index)) {
            button type="submit" class=(class) { (inner) }
        }
    }
}

pub fn result(session: &QuizSession, summary: ResultSummary, locale: &str) -> Markup {
    html! {
        (quiz_heading(session, &t!("result.title", locale = locale)))

        article {
            strong { (t!("result.score", locale = locale)) }
            p class="score-big" { (summary.correct) " / " (summary.total) }
            p { (t!("result.accuracy", locale = locale, p = summary.accuracy_percent)) }
        }

        div class="button-row" {
            form method="post" action=(names::QUIZ_ABANDON_URL) {
                button type="submit" class="secondary" { (t!("result.back", locale = locale)) }
            }
            form method="post" action=(names::QUIZ_RETRY_URL) {
                button type="submit" { (t!("result.retry", locale = locale)) }
            }
        }
    }
}

pub fn no_quiz(session: &QuizSession, locale: &str) -> Markup {
    html! {
        (quiz_heading(session, &t!("quiz.title", locale = locale)))

        article {
            p { (t!("quiz.no_quiz", locale = locale)) }
            form method="post" action=(names::QUIZ_ABANDON_URL) {
                button type="submit" class="secondary" { (t!("quiz.back", locale = locale)) }
            }
        }
    }
}
