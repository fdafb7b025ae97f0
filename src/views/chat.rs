use maud::{html, Markup};

// Canned transcript; the chat screen is a static preview.
const MESSAGES: [(bool, &str); 5] = [
    (
        false,
        "Salut! Cu ce te pot ajuta pentru Evaluarea Națională?",
    ),
    (true, "Nu înțeleg fracțiile. Poți explica?"),
    (
        false,
        "Sigur. O fracție arată o parte dintr-un întreg. Exemplu: 3/4 înseamnă 3 părți din 4.",
    ),
    (true, "Și cum compar 2/3 cu 3/5?"),
    (
        false,
        "Le aduci la același numitor sau folosești înmulțirea în cruce. Hai să facem împreună.",
    ),
];

const CHIPS: [&str; 3] = ["Explică pe scurt", "Dă un exemplu", "Mai multe exerciții"];

pub fn chat() -> Markup {
    html! {
        article class="transcript" {
            @for (is_user, text) in MESSAGES {
                div class=(if is_user { "bubble bubble-user" } else { "bubble bubble-assistant" }) {
                    (text)
                }
            }
        }

        div class="chip-row" {
            @for chip in CHIPS {
                span class="pill" { (chip) }
            }
        }
    }
}
