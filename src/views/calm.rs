use maud::{html, Markup};

// Tile copy stays in English; only the chrome is localized.
const TILES: [(&str, &str, &str); 4] = [
    (
        "Equal Breathing",
        "Balanced breathing for calm focus.",
        "tile-equal",
    ),
    (
        "Box Breathing",
        "Structured rhythm for stress.",
        "tile-box",
    ),
    (
        "4-7-8 Breathing",
        "Slow pace for relaxation.",
        "tile-478",
    ),
    (
        "Breath Holding",
        "Test your breath capacity.",
        "tile-hold",
    ),
];

pub fn calm() -> Markup {
    html! {
        div class="tile-grid" {
            @for (title, description, class) in TILES {
                div class={ "tile calm-tile " (class) } {
                    h3 { (title) }
                    p { (description) }
                }
            }
        }
    }
}
