use crate::i18n::{get_translation, Language};
use maud::{html, Markup};

/// Partner sign-up on the home page. Posts via htmx and swaps the result in
/// below the form.
pub fn registration_form(lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    html! {
        div class="registration-wrapper bg-gray-50 rounded-2xl p-8 shadow-xl" {
            form
                method="post"
                action="/register"
                hx-post="/register"
                hx-target="#register-result"
                hx-swap="innerHTML"
                hx-disabled-elt="find button"
                class="space-y-6"
            {
                fieldset {
                    legend class="block text-sm font-semibold text-gray-700 mb-3" { (t("register.role.label")) }
                    label class="mr-6" {
                        input type="radio" name="role" value="manager" checked;
                        " " (t("register.role.manager"))
                    }
                    label {
                        input type="radio" name="role" value="owner";
                        " " (t("register.role.owner"))
                    }
                }

                div class="grid grid-cols-1 sm:grid-cols-2 gap-4" {
                    div {
                        label for="reg-name" class="block text-sm font-semibold text-gray-700 mb-2" { (t("register.name")) }
                        input type="text" id="reg-name" name="name" required class="w-full px-4 py-3 rounded-lg border";
                    }
                    div {
                        label for="reg-email" class="block text-sm font-semibold text-gray-700 mb-2" { (t("register.email")) }
                        input type="email" id="reg-email" name="email" autocomplete="email" required class="w-full px-4 py-3 rounded-lg border";
                    }
                    div {
                        label for="reg-phone" class="block text-sm font-semibold text-gray-700 mb-2" { (t("register.phone")) }
                        input type="tel" id="reg-phone" name="phone" class="w-full px-4 py-3 rounded-lg border";
                    }
                    div {
                        label for="reg-company" class="block text-sm font-semibold text-gray-700 mb-2" { (t("register.companyName")) }
                        input type="text" id="reg-company" name="company_name" class="w-full px-4 py-3 rounded-lg border";
                    }
                }

                button type="submit" class="primary w-full bg-blue-600 text-white py-3 rounded-lg font-semibold" {
                    span class="btn-text" { (t("register.submit")) }
                    span class="spinner" aria-hidden="true" {}
                }
            }

            div id="register-result" {}
        }
    }
}

pub fn registration_result(lang: Language, error: Option<&str>) -> Markup {
    html! {
        @match error {
            None => div class="register-success mt-4 p-4 bg-green-50 text-green-800 rounded-lg" {
                (get_translation(lang, "register.success"))
            },
            Some(msg) => div role="alert" class="register-error mt-4 p-4 bg-red-50 text-red-800 rounded-lg" {
                (get_translation(lang, "register.error"))
                " " (msg)
            },
        }
    }
}
