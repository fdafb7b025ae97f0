use maud::{html, Markup};
use rust_i18n::t;

use super::components::progress_bar;

// Static showcase data; the dashboard is not yet wired to real results.
const WEEK_SLICES: [(&str, u32, &str); 3] = [
    ("Matematică", 55, "#7b6cf6"),
    ("Română", 35, "#b7aeff"),
    ("Recap", 10, "#e9b96e"),
];

const MATH_SKILLS: [(&str, u32); 4] = [
    ("Fracții", 72),
    ("Ecuații", 58),
    ("Geometrie", 61),
    ("Procente", 54),
];

const ROMANIAN_SKILLS: [(&str, u32); 4] = [
    ("Gramatică", 66),
    ("Punctuație", 57),
    ("Vocabular", 62),
    ("Text argumentativ", 49),
];

pub fn progress(locale: &str) -> Markup {
    html! {
        p class="section-label" { (t!("progress.latest", locale = locale)) }
        (result_block("Matematică", 82, locale))
        (result_block("Română", 74, locale))

        article {
            p class="section-label" { (t!("progress.this_week", locale = locale)) }
            div class="donut-row" {
                (donut_chart(&WEEK_SLICES))
                div class="legend" {
                    @for (label, percent, color) in WEEK_SLICES {
                        div class="legend-row" {
                            span class="legend-dot" style=(format!("background: {color};")) {}
                            span class="legend-label" { (label) }
                            span { (percent) "%" }
                        }
                    }
                }
            }
        }

        p class="section-label" { (t!("progress.skill_progress", locale = locale)) }
        (skill_block("Matematică", &MATH_SKILLS))
        (skill_block("Română", &ROMANIAN_SKILLS))
    }
}

fn result_block(title: &str, score: u32, locale: &str) -> Markup {
    html! {
        article {
            strong { (title) }
            p class="score-big" { (score) "/100" }
            p class="muted" { (t!("progress.based_last", locale = locale)) }
        }
    }
}

fn skill_block(title: &str, skills: &[(&str, u32)]) -> Markup {
    html! {
        article {
            strong { (title) }
            @for (name, percent) in skills {
                div class="skill-row" {
                    span class="skill-name" { (name) }
                    span { (percent) "%" }
                }
                (progress_bar(*percent))
            }
        }
    }
}

// Donut built from stroked circles; each slice is a dash of the right
// length on a circle whose circumference is normalized to 100.
fn donut_chart(slices: &[(&str, u32, &str)]) -> Markup {
    let mut offset: i64 = 25;
    let mut arcs = Vec::with_capacity(slices.len());
    for (_, percent, color) in slices {
        arcs.push((offset, *percent, *color));
        offset -= i64::from(*percent);
    }

    html! {
        svg class="donut" viewBox="0 0 36 36" width="140" height="140" {
            @for (offset, percent, color) in arcs {
                circle cx="18" cy="18" r="15.9155"
                       fill="none"
                       stroke=(color)
                       stroke-width="4"
                       stroke-dasharray=(format!("{percent} {}", 100 - percent))
                       stroke-dashoffset=(offset) {}
            }
        }
    }
}
