use crate::i18n::{get_translation, Language};
use maud::{html, Markup, DOCTYPE};

/// Which top-level section a page belongs to, for nav highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Listings,
    Admin,
    Other,
}

pub fn desktop_layout(title: &str, lang: Language, section: Section, content: Markup) -> Markup {
    let t = |key| get_translation(lang, key);

    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | EasyLease" }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="bg-gray-50" {
                header class="bg-white shadow-sm border-b" {
                    div class="max-w-7xl mx-auto px-4 flex justify-between items-center py-6" {
                        a href="/" class="text-2xl font-bold text-gray-900" { "🏠 EasyLease" }
                        nav class="flex space-x-8" {
                            (nav_link("/", t("header.home"), section == Section::Home))
                            (nav_link("/listings", t("header.listings"), section == Section::Listings))
                            (nav_link("/admin/leads", t("header.admin"), section == Section::Admin))
                        }
                        (language_switcher(lang))
                    }
                }
                (content)
                (footer(lang))
            }
        }
    }
}

fn nav_link(href: &str, label: &str, active: bool) -> Markup {
    html! {
        a href=(href)
          class={ "px-3 py-2 rounded-md text-sm font-medium "
                  (if active { "text-blue-600 font-semibold" } else { "text-gray-500 hover:text-gray-900" }) }
        { (label) }
    }
}

/// Links to the other language; the handler stores the choice and bounces back.
fn language_switcher(lang: Language) -> Markup {
    let other = lang.other();
    html! {
        a href=(format!("/language/{}", other.code()))
          class="flex items-center gap-2 px-4 py-2 rounded-lg bg-blue-600 text-white"
          aria-label=(get_translation(lang, "language.switch"))
        {
            span class="font-medium uppercase text-sm" { (other.code()) }
        }
    }
}

fn footer(lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        footer class="bg-gray-900 text-gray-300 mt-16" {
            div class="max-w-7xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-4 gap-8" {
                div {
                    p class="text-xl font-bold text-white" { "🏠 EasyLease" }
                    p class="mt-2 text-sm" { (t("footer.tagline")) }
                }
                div {
                    h4 class="font-semibold text-white mb-3" { (t("footer.product")) }
                    ul class="space-y-2 text-sm" {
                        li { a href="/#features" { (t("footer.features")) } }
                        li { a href="/#register" { (t("footer.pricing")) } }
                    }
                }
                div {
                    h4 class="font-semibold text-white mb-3" { (t("footer.company")) }
                    ul class="space-y-2 text-sm" {
                        li { a href="/#benefits" { (t("footer.about")) } }
                        li { a href="/" { (t("footer.blog")) } }
                    }
                }
                div {
                    h4 class="font-semibold text-white mb-3" { (t("footer.support")) }
                    ul class="space-y-2 text-sm" {
                        li { a href="/status" { (t("footer.help")) } }
                        li { a href="/#register" { (t("footer.contact")) } }
                    }
                }
            }
            p class="text-center text-xs pb-6" {
                "© " (year) " EasyLease. " (t("footer.rights"))
            }
        }
    }
}
