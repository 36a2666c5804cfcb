// handlers/admin_listings.rs
use crate::api::models::ListingQuery;
use crate::domain::listing_form::ListingForm;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_form;
use crate::i18n::Language;
use crate::responses::{html_response, html_with_status, see_other};
use crate::state::AppState;
use crate::templates::pages::{admin_listings_page, listing_form_page};
use astra::Request;
use tracing::{info, warn};

const LIST_PATH: &str = "/admin/listings";

pub fn index(state: &AppState, lang: Language) -> ResultResp {
    let page = match state.api.get_listings(&ListingQuery::default()) {
        Ok(envelope) => admin_listings_page(Ok(envelope.data.as_slice()), state.api_url(), lang),
        Err(err) => admin_listings_page(Err(err.to_string().as_str()), state.api_url(), lang),
    };
    html_response(page)
}

pub fn new_form(lang: Language) -> ResultResp {
    let form = ListingForm {
        room_type: "single".to_string(),
        locale: lang.code().to_string(),
        ..ListingForm::default()
    };
    html_response(listing_form_page(&form, None, None, lang))
}

pub fn edit_form(state: &AppState, slug: &str, lang: Language) -> ResultResp {
    let listing = match state.api.get_listing_by_slug(slug) {
        Ok(envelope) => envelope.data,
        Err(err) if err.is_not_found() => return Err(ServerError::NotFound),
        Err(err) => return Err(err.into()),
    };

    let form = ListingForm::from_listing(&listing);
    html_response(listing_form_page(&form, Some(listing.id.as_str()), None, lang))
}

/// `POST /admin/listings` when `id` is `None`, otherwise `POST /admin/listings/{id}/update`.
pub fn save(req: Request, state: &AppState, id: Option<&str>, lang: Language) -> ResultResp {
    let form = ListingForm::from_fields(&read_form(req)?);

    let draft = match id {
        Some(_) => form.to_update_draft(),
        None => form.to_draft(),
    };
    let draft = match draft {
        Ok(draft) => draft,
        Err(message) => {
            warn!(?id, error = %message, "listing form rejected");
            return html_with_status(422, listing_form_page(&form, id, Some(message.as_str()), lang));
        }
    };

    let result = match id {
        Some(id) => state.api.update_listing(id, &draft),
        None => state.api.create_listing(&draft),
    };

    match result {
        Ok(saved) => {
            info!(listing = %saved.data.id, slug = %saved.data.slug, "listing saved");
            see_other(LIST_PATH)
        }
        Err(err) => html_with_status(502, listing_form_page(&form, id, Some(err.to_string().as_str()), lang)),
    }
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    state.api.delete_listing(id)?;
    info!(listing = id, "listing deleted");
    see_other(LIST_PATH)
}
