use crate::i18n::{get_translation, Language};
use crate::templates::{desktop_layout, Section};
use maud::{html, Markup};

/// Full-page fallback for anything a handler did not render itself.
pub fn error_page(lang: Language, status: u16, message: &str) -> Markup {
    let t = |key| get_translation(lang, key);

    desktop_layout(
        t("error.title"),
        lang,
        Section::Other,
        html! {
            main class="container" style="max-width: 720px; margin: 4rem auto; padding: 1rem;" {
                h1 { "Error " (status) }
                p style="color: #444;" { (message) }
                p { a href="/" { "← " (t("notfound.home")) } }
            }
        },
    )
}
