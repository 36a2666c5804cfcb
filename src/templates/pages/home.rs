// templates/pages/home.rs

use crate::i18n::{get_translation, Language};
use crate::templates::{
    components::{card, registration_form},
    desktop_layout, Section,
};
use maud::{html, Markup};

const FEATURES: [(&str, &str); 6] = [
    ("🏘️", "features.properties"),
    ("👥", "features.tenants"),
    ("📄", "features.contracts"),
    ("💳", "features.payments"),
    ("📊", "features.owners"),
    ("🌐", "features.multilingual"),
];

const BENEFITS: [&str; 4] = [
    "benefits.simple",
    "benefits.organized",
    "benefits.secure",
    "benefits.accessible",
];

pub fn home_page(lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    // Section keys are built at runtime, so they need an owned lookup.
    let tk = |base: &str, leaf: &str| get_translation(lang, &format!("{base}.{leaf}")).to_string();

    desktop_layout(
        t("header.home"),
        lang,
        Section::Home,
        html! {
            section class="hero py-24 bg-white text-center" {
                h1 class="text-5xl font-extrabold text-gray-900 mb-6" { (t("hero.title")) }
                p class="text-xl text-gray-600 max-w-3xl mx-auto mb-8" { (t("hero.subtitle")) }
                div class="flex justify-center gap-4" {
                    a href="#register" class="bg-blue-600 text-white px-8 py-4 rounded-lg font-semibold" { (t("hero.cta.primary")) }
                    a href="/listings" class="bg-white border px-8 py-4 rounded-lg font-semibold" { (t("hero.cta.secondary")) }
                }
            }

            section id="features" class="py-24" {
                div class="max-w-7xl mx-auto px-4" {
                    h2 class="text-4xl font-extrabold text-center mb-4" { (t("features.title")) }
                    p class="text-xl text-gray-600 text-center mb-12" { (t("features.subtitle")) }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                        @for (icon, base) in FEATURES {
                            div class="feature bg-white rounded-xl p-6 shadow-sm" {
                                div class="text-4xl mb-4" { (icon) }
                                h3 class="text-xl font-bold mb-2" { (tk(base, "title")) }
                                p class="text-gray-600" { (tk(base, "description")) }
                            }
                        }
                    }
                }
            }

            section id="how-it-works" class="py-24 bg-white" {
                div class="max-w-7xl mx-auto px-4" {
                    h2 class="text-4xl font-extrabold text-center mb-4" { (t("howItWorks.title")) }
                    p class="text-xl text-gray-600 text-center mb-12" { (t("howItWorks.subtitle")) }
                    ol class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                        @for step in 1..=3 {
                            li class="text-center" {
                                div class="w-12 h-12 mx-auto rounded-full bg-blue-600 text-white flex items-center justify-center font-bold mb-4" { (step) }
                                h3 class="text-xl font-bold mb-2" { (tk(&format!("howItWorks.step{step}"), "title")) }
                                p class="text-gray-600" { (tk(&format!("howItWorks.step{step}"), "description")) }
                            }
                        }
                    }
                }
            }

            section id="mobile-app" class="py-24" {
                div class="max-w-7xl mx-auto px-4" {
                    h2 class="text-4xl font-extrabold text-center mb-4" { (t("mobileApp.title")) }
                    p class="text-xl text-gray-600 text-center mb-12" { (t("mobileApp.subtitle")) }
                    div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                        @for n in 1..=4 {
                            (card(
                                &tk(&format!("mobileApp.feature{n}"), "title"),
                                html! { p { (tk(&format!("mobileApp.feature{n}"), "description")) } },
                            ))
                        }
                    }
                }
            }

            section id="benefits" class="py-24 bg-white" {
                div class="max-w-7xl mx-auto px-4" {
                    h2 class="text-4xl font-extrabold text-center mb-12" { (t("benefits.title")) }
                    div class="grid grid-cols-1 md:grid-cols-4 gap-6" {
                        @for base in BENEFITS {
                            (card(&tk(base, "title"), html! { p { (tk(base, "description")) } }))
                        }
                    }
                }
            }

            section id="register" class="py-24 bg-white" {
                div class="max-w-4xl mx-auto px-4" {
                    h2 class="text-4xl font-extrabold text-center mb-4" { (t("register.title")) }
                    p class="text-xl text-gray-600 text-center mb-12" { (t("register.subtitle")) }
                    (registration_form(lang))
                }
            }

            section id="cta" class="py-24 bg-blue-600 text-white text-center" {
                h2 class="text-4xl font-extrabold mb-4" { (t("cta.title")) }
                p class="text-xl mb-8" { (t("cta.subtitle")) }
                a href="#register" class="bg-white text-blue-600 px-8 py-4 rounded-lg font-semibold" { (t("cta.button")) }
            }
        },
    )
}
