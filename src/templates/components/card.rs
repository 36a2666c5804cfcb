use crate::api::models::Listing;
use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::segment;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card bg-white rounded-lg p-6 shadow-sm border" {
            h3 class="text-lg font-semibold text-gray-900 mb-2" { (title) }
            div class="card-body text-gray-600" {
                (body)
            }
        }
    }
}

pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

pub fn listing_card(listing: &Listing, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let href = format!("/listings/{}", segment(&listing.slug));
    let weeks = listing.min_term_weeks.to_string();

    html! {
        div class="listing-card bg-white rounded-lg shadow-md overflow-hidden" {
            div class="bg-gray-200" {
                @if let Some(first) = listing.images.first() {
                    img src=(first) alt=(listing.title) class="w-full h-48 object-cover" loading="lazy";
                } @else {
                    div class="w-full h-48 flex items-center justify-center bg-gray-100 text-gray-400" {
                        p class="text-sm" { (t("card.no_image")) }
                    }
                }
            }

            div class="p-6" {
                div class="flex justify-between items-start mb-2" {
                    h3 class="text-lg font-semibold text-gray-900" { (listing.title) }
                    span class="text-xl ml-2" title=(t(listing.room_type.label_key())) { (listing.room_type.icon()) }
                }

                p class="text-gray-600 text-sm mb-2" { "📍 " (listing.address) }

                @if let Some(suburb) = &listing.suburb {
                    span class="inline-block bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full mb-3" { (suburb) }
                }

                div class="mb-4" {
                    p class="text-2xl font-bold text-gray-900" {
                        (money(listing.price_per_week))
                        span class="text-sm font-normal text-gray-500" { (t("card.per_week")) }
                    }
                    @if listing.bond > 0.0 {
                        p class="text-sm text-gray-500" { (t("card.bond")) " " (money(listing.bond)) }
                    }
                }

                div class="flex flex-wrap gap-2 mb-4" {
                    @if listing.bills_included {
                        span class="px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800" {
                            (t("card.bills_included"))
                        }
                    }
                    span class="px-2.5 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-800" {
                        (translate_with(lang, "card.min_term", &[("weeks", &weeks)]))
                    }
                }

                div class="flex justify-between items-center" {
                    a href=(href) class="bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium" { (t("card.details")) }
                    a href={ (href) "#contact" } class="text-blue-600 text-sm font-medium" { (t("card.contact")) }
                }
            }
        }
    }
}
