use crate::api::models::{Listing, RoomType};
use crate::domain::listing_form::ListingForm;
use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::components::{alert, error_panel, money};
use crate::templates::pages::admin::{admin_nav, AdminTab};
use crate::templates::{desktop_layout, segment, Section};
use maud::{html, Markup};

pub fn admin_listings_page(
    outcome: Result<&[Listing], &str>,
    api_url: &str,
    lang: Language,
) -> Markup {
    let t = |key| get_translation(lang, key);
    const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
    const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

    desktop_layout(
        t("admin.listings.title"),
        lang,
        Section::Admin,
        html! {
            main class="max-w-7xl mx-auto px-4 py-8" {
                (admin_nav(AdminTab::Listings, lang))

                div class="flex justify-between items-center mb-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (t("admin.listings.title")) }
                    a href="/admin/listings/new" class="bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium" {
                        (t("admin.listings.new"))
                    }
                }

                @match outcome {
                    Err(message) => {
                        (error_panel(
                            &format!("{} {}", t("admin.listings.error"), message),
                            Some(translate_with(lang, "error.api_hint", &[("url", api_url)]).as_str()),
                        ))
                    }
                    Ok(listings) if listings.is_empty() => {
                        p class="text-gray-600" { (t("admin.listings.empty")) }
                    }
                    Ok(listings) => {
                        div class="card" style="overflow-x: auto;" {
                            table class="admin-listings" style="width: 100%; border-collapse: collapse;" {
                                thead {
                                    tr {
                                        th style=(TH) { (t("listing.field.title")) }
                                        th style=(TH) { (t("listing.field.suburb")) }
                                        th style=(TH) { (t("listing.field.room_type")) }
                                        th style=(TH) { (t("listing.field.price_per_week")) }
                                        th style=(TH) {}
                                    }
                                }
                                tbody {
                                    @for listing in listings {
                                        tr {
                                            td style=(TD) { a href=(format!("/listings/{}", segment(&listing.slug))) { (listing.title) } }
                                            td style=(TD) { (listing.suburb.as_deref().unwrap_or("-")) }
                                            td style=(TD) { (t(listing.room_type.label_key())) }
                                            td style=(TD) { (money(listing.price_per_week)) }
                                            td style=(TD) {
                                                div style="display: flex; gap: 8px;" {
                                                    a href=(format!("/admin/listings/{}/edit", segment(&listing.slug))) class="text-blue-600 text-sm" {
                                                        (t("admin.listings.edit"))
                                                    }
                                                    form action=(format!("/admin/listings/{}/delete", segment(&listing.id))) method="post"
                                                         onsubmit=(format!("return confirm('{}');", t("admin.listings.confirm_delete")))
                                                         style="margin: 0;"
                                                    {
                                                        button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer;" {
                                                            (t("admin.listings.delete"))
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// `listing_id` is set when editing an existing listing.
pub fn listing_form_page(
    form: &ListingForm,
    listing_id: Option<&str>,
    error: Option<&str>,
    lang: Language,
) -> Markup {
    let t = |key| get_translation(lang, key);
    let (heading, action) = match listing_id {
        Some(id) => (t("admin.listings.edit"), format!("/admin/listings/{}/update", segment(id))),
        None => (t("admin.listings.new"), "/admin/listings".to_string()),
    };
    let one_per_line = t("admin.listings.one_per_line");

    desktop_layout(
        heading,
        lang,
        Section::Admin,
        html! {
            main class="max-w-3xl mx-auto px-4 py-8" {
                (admin_nav(AdminTab::Listings, lang))
                h1 class="text-3xl font-bold text-gray-900 mb-6" { (heading) }

                @if let Some(err) = error {
                    (alert(err))
                }

                form method="post" action=(action) class="listing-form space-y-4" {
                    (text_input("title", t("listing.field.title"), &form.title, true))
                    (text_input("slug", t("listing.field.slug"), &form.slug, true))
                    (text_input("address", t("listing.field.address"), &form.address, true))
                    (text_input("suburb", t("listing.field.suburb"), &form.suburb, false))
                    (number_input("price_per_week", t("listing.field.price_per_week"), &form.price_per_week))
                    (number_input("bond", t("listing.field.bond"), &form.bond))
                    (number_input("min_term_weeks", t("listing.field.min_term_weeks"), &form.min_term_weeks))

                    div {
                        label for="room_type" class="block text-sm font-medium text-gray-700 mb-1" { (t("listing.field.room_type")) }
                        select id="room_type" name="room_type" class="w-full border rounded-md px-3 py-2 text-sm" {
                            @for room in RoomType::ALL {
                                option value=(room.as_str()) selected[form.room_type == room.as_str()] { (t(room.label_key())) }
                            }
                        }
                    }

                    div {
                        label for="locale" class="block text-sm font-medium text-gray-700 mb-1" { (t("listing.field.locale")) }
                        select id="locale" name="locale" class="w-full border rounded-md px-3 py-2 text-sm" {
                            @if form.locale.is_empty() {
                                option value="" selected { "-" }
                            }
                            option value="es" selected[form.locale == "es"] { "Español" }
                            option value="en" selected[form.locale == "en"] { "English" }
                        }
                    }

                    label class="flex items-center gap-2 text-sm" {
                        input type="checkbox" name="bills_included" value="on" checked[form.bills_included];
                        (t("listing.field.bills_included"))
                    }

                    (lines_input("images", t("listing.field.images"), &form.images, one_per_line))
                    (lines_input("house_features", t("listing.field.house_features"), &form.house_features, one_per_line))
                    (lines_input("rules", t("listing.field.rules"), &form.rules, one_per_line))
                    (lines_input("preferred_tenants", t("listing.field.preferred_tenants"), &form.preferred_tenants, one_per_line))

                    button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium" {
                        (t("admin.listings.save"))
                    }
                }
            }
        },
    )
}

fn text_input(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input type="text" id=(name) name=(name) value=(value) required[required]
                  class="w-full border rounded-md px-3 py-2 text-sm";
        }
    }
}

fn number_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input type="number" step="any" id=(name) name=(name) value=(value)
                  class="w-full border rounded-md px-3 py-2 text-sm";
        }
    }
}

fn lines_input(name: &str, label: &str, value: &str, hint: &str) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            textarea id=(name) name=(name) rows="3" placeholder=(hint)
                     class="w-full border rounded-md px-3 py-2 text-sm" { (value) }
        }
    }
}
