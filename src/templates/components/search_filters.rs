use crate::api::models::RoomType;
use crate::domain::filters::ListingFilters;
use crate::i18n::{get_translation, translate_with, Language};
use maud::{html, Markup};

pub fn search_filters(filters: &ListingFilters, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let active = filters.active_count().to_string();

    html! {
        div class="search-filters bg-white p-6 rounded-lg shadow-sm border" {
            h3 class="text-lg font-semibold text-gray-900 mb-4" { (t("filters.title")) }

            form method="post" action="/listings/filters" {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-4" {
                    div {
                        label for="suburb" class="block text-sm font-medium text-gray-700 mb-1" { (t("filters.suburb")) }
                        input type="text" id="suburb" name="suburb"
                              placeholder=(t("filters.suburb.placeholder"))
                              value=(filters.suburb)
                              class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
                    }

                    div {
                        label for="room_type" class="block text-sm font-medium text-gray-700 mb-1" { (t("filters.room_type")) }
                        select id="room_type" name="room_type" class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm" {
                            option value="" selected[filters.room_type.is_empty()] { (t("filters.room_type.any")) }
                            @for room in RoomType::ALL {
                                option value=(room.as_str()) selected[filters.room_type == room.as_str()] {
                                    (t(room.label_key()))
                                }
                            }
                        }
                    }

                    div {
                        label for="min_price" class="block text-sm font-medium text-gray-700 mb-1" { (t("filters.min_price")) }
                        input type="number" id="min_price" name="min_price" placeholder="$0"
                              value=(filters.min_price)
                              class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
                    }

                    div {
                        label for="max_price" class="block text-sm font-medium text-gray-700 mb-1" { (t("filters.max_price")) }
                        input type="number" id="max_price" name="max_price" placeholder="$1000"
                              value=(filters.max_price)
                              class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
                    }
                }

                div class="flex flex-wrap gap-3" {
                    button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium" {
                        (t("filters.apply"))
                    }

                    @if filters.has_active_filters() {
                        button type="submit" formaction="/listings/filters/clear" class="clear-filters bg-gray-100 text-gray-700 px-4 py-2 rounded-md text-sm font-medium" {
                            (t("filters.clear"))
                        }
                        span class="active-filters flex items-center text-sm text-gray-500" {
                            (translate_with(lang, "filters.active", &[("count", &active)]))
                        }
                    }
                }
            }
        }
    }
}
