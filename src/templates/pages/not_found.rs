use crate::i18n::{get_translation, Language};
use crate::templates::{desktop_layout, Section};
use maud::{html, Markup};

pub fn not_found_page(lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    desktop_layout(
        t("notfound.title"),
        lang,
        Section::Other,
        html! {
            main class="not-found min-h-screen flex items-center justify-center px-4" {
                div class="text-center" {
                    div class="text-6xl mb-4" { "🏠" }
                    h1 class="text-4xl font-bold text-gray-900 mb-4" { (t("notfound.title")) }
                    p class="text-lg text-gray-600 mb-8 max-w-md" { (t("notfound.body")) }
                    div class="space-y-3" {
                        div {
                            a href="/" class="bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold inline-block" {
                                (t("notfound.home"))
                            }
                        }
                        div {
                            a href="/listings" class="text-blue-600 font-medium" { (t("notfound.listings")) }
                        }
                    }
                }
            }
        },
    )
}
