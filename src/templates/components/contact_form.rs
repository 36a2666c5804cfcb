use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::segment;
use maud::{html, Markup};

/// What the visitor typed, kept across a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub error: Option<String>,
}

impl ContactFormState {
    pub fn fresh(listing_title: &str, lang: Language) -> Self {
        Self {
            message: translate_with(lang, "contact.message.default", &[("title", listing_title)]),
            ..Self::default()
        }
    }
}

pub fn contact_form(
    slug: &str,
    listing_id: &str,
    listing_title: &str,
    state: &ContactFormState,
    lang: Language,
) -> Markup {
    let t = |key| get_translation(lang, key);
    let action = format!("/listings/{}/contact", segment(slug));

    html! {
        form method="post" action=(action)
             hx-post=(action) hx-target="#contact" hx-swap="innerHTML" hx-disabled-elt="find button"
             class="contact-form space-y-4"
        {
            h3 class="text-lg font-semibold text-gray-900 mb-4" { (t("contact.title")) }

            @if let Some(err) = &state.error {
                div class="bg-red-50 border border-red-200 rounded-md p-3" {
                    p class="text-red-800 text-sm" { (err) }
                }
            }

            input type="hidden" name="listing_id" value=(listing_id);
            input type="hidden" name="listing_title" value=(listing_title);

            div {
                label for="name" class="block text-sm font-medium text-gray-700 mb-1" { (t("contact.name")) }
                input type="text" id="name" name="name" required value=(state.name)
                      placeholder=(t("contact.name.placeholder"))
                      class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
            }
            div {
                label for="email" class="block text-sm font-medium text-gray-700 mb-1" { (t("contact.email")) }
                input type="email" id="email" name="email" required value=(state.email)
                      placeholder="tu@email.com"
                      class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
            }
            div {
                label for="phone" class="block text-sm font-medium text-gray-700 mb-1" { (t("contact.phone")) }
                input type="tel" id="phone" name="phone" value=(state.phone)
                      placeholder="+34 600 123 456"
                      class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
            }
            div {
                label for="message" class="block text-sm font-medium text-gray-700 mb-1" { (t("contact.message")) }
                textarea id="message" name="message" rows="4"
                         class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm resize-none" { (state.message) }
            }

            button type="submit" class="w-full bg-orange-600 text-white py-3 px-4 rounded-md font-medium" {
                span class="btn-text" { (t("contact.submit")) }
                span class="spinner" aria-hidden="true" {}
            }

            p class="text-xs text-gray-500 text-center" { (t("contact.consent")) }
        }
    }
}

pub fn contact_sent(slug: &str, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    html! {
        div class="contact-sent text-center p-6" {
            div class="text-green-600 text-6xl mb-4" { "✓" }
            h3 class="text-lg font-semibold text-gray-900 mb-2" { (t("contact.sent.title")) }
            p class="text-gray-600 mb-4" { (t("contact.sent.body")) }
            a href=(format!("/listings/{}#contact", segment(slug))) class="text-blue-600 text-sm font-medium" {
                (t("contact.again"))
            }
        }
    }
}
