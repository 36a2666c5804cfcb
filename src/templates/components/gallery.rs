use crate::domain::gallery::Gallery;
use crate::i18n::{get_translation, Language};
use maud::{html, Markup};

/// Carousel driven by `?image=N` links; no client script needed.
pub fn image_gallery(images: &[String], title: &str, gallery: Gallery, base_href: &str, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    html! {
        @if gallery.is_empty() {
            div class="w-full h-96 flex items-center justify-center bg-gray-100 rounded-lg" {
                p class="text-gray-400" { (t("detail.no_images")) }
            }
        } @else {
            div class="gallery relative rounded-lg overflow-hidden" {
                img src=(images[gallery.current()]) alt=(title) class="w-full h-96 object-cover";

                @if gallery.len() > 1 {
                    a href=(format!("{base_href}?image={}", gallery.previous()))
                      class="gallery-prev absolute left-2 top-1/2 bg-white rounded-full px-3 py-2"
                      aria-label=(t("gallery.previous")) { "‹" }
                    a href=(format!("{base_href}?image={}", gallery.next()))
                      class="gallery-next absolute right-2 top-1/2 bg-white rounded-full px-3 py-2"
                      aria-label=(t("gallery.next")) { "›" }
                    span class="absolute bottom-2 right-2 bg-black text-white text-xs px-2 py-1 rounded" {
                        (gallery.current() + 1) " / " (gallery.len())
                    }
                }
            }

            @if gallery.len() > 1 {
                div class="flex gap-2 mt-2 overflow-x-auto" {
                    @for (i, src) in images.iter().enumerate() {
                        a href=(format!("{base_href}?image={i}"))
                          class={ "thumb " (if i == gallery.current() { "ring-2 ring-blue-600" } else { "" }) } {
                            img src=(src) alt=(title) class="h-16 w-24 object-cover rounded";
                        }
                    }
                }
            }
        }
    }
}
