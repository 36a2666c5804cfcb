use crate::api::models::{AvailableContract, Listing};
use crate::domain::gallery::Gallery;
use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::components::{
    contact_form, error_panel, image_gallery, money, ContactFormState,
};
use crate::templates::{desktop_layout, segment, Section};
use maud::{html, Markup};

pub struct ListingDetailVm<'a> {
    pub listing: &'a Listing,
    pub gallery: Gallery,
    pub contact: &'a ContactFormState,
}

pub fn listing_detail_page(vm: &ListingDetailVm<'_>, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let listing = vm.listing;
    let base_href = format!("/listings/{}", segment(&listing.slug));
    let weeks = listing.min_term_weeks.to_string();

    desktop_layout(
        &listing.title,
        lang,
        Section::Listings,
        html! {
            main class="max-w-7xl mx-auto px-4 py-8" {
                a href="/listings" class="text-gray-500 text-sm font-medium" { (t("detail.back")) }

                div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mt-4" {
                    div class="lg:col-span-2" {
                        div class="mb-8" {
                            (image_gallery(&listing.images, &listing.title, vm.gallery, &base_href, lang))
                        }

                        div class="mb-6" {
                            h1 class="text-3xl font-bold text-gray-900 mb-2" { (listing.title) }
                            p class="text-gray-600" { "📍 " (listing.address) }
                            @if let Some(suburb) = &listing.suburb {
                                span class="inline-block bg-blue-100 text-blue-800 text-sm px-3 py-1 rounded-full mt-2" { (suburb) }
                            }
                        }

                        div class="key-features bg-white rounded-lg p-6 shadow-sm border mb-8" {
                            h2 class="text-xl font-semibold text-gray-900 mb-4" { (t("detail.key_features")) }
                            div class="grid grid-cols-2 md:grid-cols-4 gap-4" {
                                (feature_tile(listing.room_type.icon(), t(listing.room_type.label_key())))
                                (feature_tile("💰", &format!("{}{}", money(listing.price_per_week), t("card.per_week"))))
                                @if listing.bills_included {
                                    (feature_tile("✅", t("detail.bills_included")))
                                } @else {
                                    (feature_tile("❌", t("detail.bills_excluded")))
                                }
                                (feature_tile("📅", &translate_with(lang, "card.min_term", &[("weeks", &weeks)])))
                            }
                        }

                        @if !listing.house_features.is_empty() {
                            div class="house-features bg-white rounded-lg p-6 shadow-sm border mb-8" {
                                h2 class="text-xl font-semibold text-gray-900 mb-4" { (t("detail.house_features")) }
                                ul class="grid grid-cols-1 md:grid-cols-2 gap-3" {
                                    @for feature in &listing.house_features {
                                        li { span class="text-green-500 mr-2" { "✓" } (feature) }
                                    }
                                }
                            }
                        }

                        @if !listing.rules.is_empty() {
                            div class="house-rules bg-white rounded-lg p-6 shadow-sm border mb-8" {
                                h2 class="text-xl font-semibold text-gray-900 mb-4" { (t("detail.rules")) }
                                ul class="space-y-2" {
                                    @for rule in &listing.rules {
                                        li { span class="text-blue-500 mr-2" { "•" } (rule) }
                                    }
                                }
                            }
                        }

                        @if !listing.preferred_tenants.is_empty() {
                            div class="preferred-tenants bg-white rounded-lg p-6 shadow-sm border mb-8" {
                                h2 class="text-xl font-semibold text-gray-900 mb-4" { (t("detail.preferred_tenants")) }
                                div class="flex flex-wrap gap-2" {
                                    @for tenant in &listing.preferred_tenants {
                                        span class="inline-block bg-blue-100 text-blue-800 text-sm px-3 py-1 rounded-full" { (tenant) }
                                    }
                                }
                            }
                        }

                        @if let Some(contract) = &listing.available_contract {
                            (contract_card(contract, lang))
                        }
                    }

                    aside class="lg:col-span-1" {
                        div class="bg-white rounded-lg p-6 shadow-sm border sticky top-4" {
                            div class="mb-6" {
                                div class="text-3xl font-bold text-gray-900 mb-2" {
                                    (money(listing.price_per_week))
                                    span class="text-lg font-normal text-gray-500" { (t("card.per_week")) }
                                }
                                @if listing.bond > 0.0 {
                                    p class="text-gray-600" { (t("card.bond")) " " (money(listing.bond)) }
                                }
                                @if let Some(from) = &listing.available_from {
                                    p class="text-sm text-gray-500 mt-2" {
                                        (t("detail.available_from")) " " (from.format(lang.date_format()))
                                    }
                                }
                            }

                            div id="contact" {
                                (contact_form(&listing.slug, &listing.id, &listing.title, vm.contact, lang))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn feature_tile(icon: &str, label: &str) -> Markup {
    html! {
        div class="text-center p-3 bg-gray-50 rounded-lg" {
            div class="text-2xl mb-1" { (icon) }
            p class="text-sm font-medium text-gray-900" { (label) }
        }
    }
}

fn contract_card(contract: &AvailableContract, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let fmt = lang.date_format();
    let period = match (&contract.start_date, &contract.end_date) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start.format(fmt), end.format(fmt))),
        (Some(start), None) => Some(format!("{} -", start.format(fmt))),
        _ => None,
    };

    html! {
        div class="contract bg-white rounded-lg p-6 shadow-sm border" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" { (t("detail.contract.title")) }
            dl class="grid grid-cols-2 gap-3 text-sm" {
                dt class="text-gray-500" { (t("detail.contract.weekly_rent")) }
                dd class="font-medium" { (money(contract.weekly_rent)) }
                dt class="text-gray-500" { (t("detail.contract.bond")) }
                dd class="font-medium" { (money(contract.bond)) }
                @if let Some(period) = period {
                    dt class="text-gray-500" { (t("detail.contract.period")) }
                    dd class="font-medium" { (period) }
                }
                @if let Some(freq) = &contract.payment_frequency {
                    dt class="text-gray-500" { (t("detail.contract.frequency")) }
                    dd class="font-medium" { (freq) }
                }
            }
        }
    }
}

/// Shown when the listing could not be loaded for a reason other than absence.
pub fn listing_error_page(message: &str, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    desktop_layout(
        t("detail.error"),
        lang,
        Section::Listings,
        html! {
            main class="min-h-screen flex flex-col items-center justify-center" {
                (error_panel(&format!("{} {}", t("detail.error"), message), None))
                a href="/listings" class="text-blue-600 text-sm" { (t("detail.back")) }
            }
        },
    )
}
