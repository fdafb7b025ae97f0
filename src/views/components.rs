use maud::{html, Markup};

pub fn pill(text: &str) -> Markup {
    html! {
        span class="pill" { (text) }
    }
}

pub fn progress_bar(percent: u32) -> Markup {
    let percent = percent.min(100);
    html! {
        div class="progress" {
            div class="progress-fill" style=(format!("width: {percent}%;")) {}
        }
    }
}
