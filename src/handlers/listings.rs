// handlers/listings.rs
use crate::api::models::LeadDraft;
use crate::domain::filters::{FilterField, ListingFilters};
use crate::domain::gallery::Gallery;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{field, fragment_or_page, is_htmx, non_empty, query_map, read_form};
use crate::i18n::{get_translation, Language};
use crate::responses::{html_response, html_with_status, see_other};
use crate::state::AppState;
use crate::templates::components::{contact_form, contact_sent, ContactFormState};
use crate::templates::pages::{
    listing_detail_page, listing_error_page, listings_page, ListingDetailVm, ListingsOutcome,
    ListingsVm,
};
use crate::templates::Section;
use astra::Request;
use tracing::{info, warn};

/// `GET /listings`: the filters live in the query string.
pub fn index(req: &Request, state: &AppState, lang: Language) -> ResultResp {
    let filters = ListingFilters::from_query(req.uri().query());
    let limit = query_map(req).get("limit").and_then(|l| l.parse().ok());

    let outcome = match state.api.get_listings(&filters.to_api_query(limit)) {
        Ok(envelope) => ListingsOutcome::Loaded(envelope.data),
        Err(err) => ListingsOutcome::Failed(err.to_string()),
    };

    let vm = ListingsVm {
        filters: &filters,
        outcome,
        api_url: state.api_url(),
    };

    html_response(listings_page(&vm, lang))
}

/// `POST /listings/filters`: turn the submitted form into a shareable URL.
pub fn apply_filters(req: Request) -> ResultResp {
    let form = read_form(req)?;

    let mut filters = ListingFilters::default();
    for f in FilterField::ALL {
        filters.set(f, field(&form, f.key()));
    }

    see_other(&filters.apply_target())
}

pub fn clear_filters() -> ResultResp {
    let mut filters = ListingFilters::default();
    see_other(filters.clear())
}

/// `GET /listings/{slug}`.
pub fn detail(req: &Request, state: &AppState, slug: &str, lang: Language) -> ResultResp {
    let requested_image = query_map(req).get("image").and_then(|i| i.parse().ok());

    match state.api.get_listing_by_slug(slug) {
        Ok(envelope) => {
            let listing = envelope.data;
            let contact = ContactFormState::fresh(&listing.title, lang);
            let vm = ListingDetailVm {
                listing: &listing,
                gallery: Gallery::new(listing.images.len(), requested_image),
                contact: &contact,
            };
            html_response(listing_detail_page(&vm, lang))
        }
        Err(err) if err.is_not_found() => Err(ServerError::NotFound),
        Err(err) => html_with_status(502, listing_error_page(&err.to_string(), lang)),
    }
}

/// `POST /listings/{slug}/contact`: submit a lead for this listing.
pub fn contact(req: Request, state: &AppState, slug: &str, lang: Language) -> ResultResp {
    let htmx = is_htmx(&req);
    let form = read_form(req)?;
    let title = get_translation(lang, "contact.title");

    let listing_id = field(&form, "listing_id");
    let listing_title = field(&form, "listing_title");

    let mut entered = ContactFormState {
        name: field(&form, "name").to_string(),
        email: field(&form, "email").to_string(),
        phone: field(&form, "phone").to_string(),
        message: field(&form, "message").to_string(),
        error: None,
    };

    if entered.name.is_empty() || entered.email.is_empty() {
        warn!(%slug, "contact rejected: missing name or email");
        entered.error = Some(get_translation(lang, "contact.required").to_string());
        let fragment = contact_form(slug, listing_id, listing_title, &entered, lang);
        return html_response(fragment_or_page(htmx, title, lang, Section::Listings, fragment));
    }

    let draft = LeadDraft {
        name: Some(entered.name.clone()),
        email: Some(entered.email.clone()),
        phone: non_empty(&entered.phone),
        message: non_empty(&entered.message),
        listing_id: non_empty(listing_id),
    };

    let fragment = match state.api.create_lead(&draft) {
        Ok(created) => {
            info!(lead = %created.data.id, %slug, "lead created");
            contact_sent(slug, lang)
        }
        Err(err) => {
            entered.error = Some(format!("{}: {err}", get_translation(lang, "contact.error")));
            contact_form(slug, listing_id, listing_title, &entered, lang)
        }
    };

    html_response(fragment_or_page(htmx, title, lang, Section::Listings, fragment))
}
