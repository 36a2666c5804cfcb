use crate::api::models::HealthStatus;
use crate::i18n::{get_translation, Language};
use crate::templates::components::card;
use crate::templates::{desktop_layout, Section};
use maud::{html, Markup};

pub fn status_page(health: Result<&HealthStatus, &str>, api_url: &str, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    desktop_layout(
        t("health.title"),
        lang,
        Section::Other,
        html! {
            main class="max-w-xl mx-auto px-4 py-12" {
                (card(t("health.title"), html! {
                    p { code { (api_url) } }
                    @match health {
                        Ok(h) if h.ok => {
                            p class="health-ok" style="color: green;" { "✅ " (t("health.ok")) " (" (h.status) ")" }
                            p style="font-size: 0.9em; color: #666;" { (t("health.timestamp")) " " (h.timestamp) }
                        }
                        Ok(h) => {
                            p class="health-down" style="color: red;" { "❌ " (t("health.down")) " (" (h.status) ")" }
                        }
                        Err(message) => {
                            p class="health-down" style="color: red;" { "❌ " (t("health.down")) }
                            p style="font-size: 0.9em; color: #666;" { (message) }
                        }
                    }
                }))
            }
        },
    )
}
