use crate::api::models::Listing;
use crate::domain::filters::ListingFilters;
use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::components::{empty_panel, error_panel, listing_card, search_filters};
use crate::templates::{desktop_layout, Section};
use maud::{html, Markup};

/// What the listings loader came back with.
pub enum ListingsOutcome {
    Loaded(Vec<Listing>),
    Failed(String),
}

pub struct ListingsVm<'a> {
    pub filters: &'a ListingFilters,
    pub outcome: ListingsOutcome,
    pub api_url: &'a str,
}

pub fn listings_page(vm: &ListingsVm<'_>, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    desktop_layout(
        t("listings.title"),
        lang,
        Section::Listings,
        html! {
            main class="max-w-7xl mx-auto px-4 py-8" {
                div class="mb-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (t("listings.title")) }
                    p class="mt-2 text-gray-600" { (t("listings.subtitle")) }
                }

                div class="mb-8" {
                    (search_filters(vm.filters, lang))
                }

                @match &vm.outcome {
                    ListingsOutcome::Failed(message) => {
                        (error_panel(
                            &format!("{} {}", t("listings.error"), message),
                            Some(translate_with(lang, "error.api_hint", &[("url", vm.api_url)]).as_str()),
                        ))
                    }
                    ListingsOutcome::Loaded(listings) => {
                        div class="flex justify-between items-center mb-6" {
                            p class="results-summary text-gray-600" { (results_summary(listings.len(), lang)) }
                        }

                        @if listings.is_empty() {
                            (empty_panel(
                                "🔍",
                                t("listings.empty.title"),
                                t("listings.empty.body"),
                                Some(("/listings", t("listings.empty.cta"))),
                            ))
                        } @else {
                            div class="listings-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                                @for listing in listings {
                                    (listing_card(listing, lang))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn results_summary(count: usize, lang: Language) -> String {
    match count {
        0 => get_translation(lang, "listings.none").to_string(),
        1 => get_translation(lang, "listings.found.one").to_string(),
        n => translate_with(lang, "listings.found.many", &[("count", &n.to_string())]),
    }
}
