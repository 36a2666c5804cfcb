use crate::errors::ServerError;
use crate::handlers::{admin, admin_listings, decode_segment, home, listings, request_language};
use crate::responses::{error_to_response, see_other, ResultResp};
use crate::state::AppState;
use astra::{Request, Response};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let lang = request_language(&req);
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let decoded = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect::<Result<Vec<String>, ServerError>>()?;
    let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home::home(lang),
        ("POST", ["register"]) => home::register(req, state, lang),
        ("GET", ["language", code]) => home::switch_language(&req, code),
        ("GET", ["status"]) => home::status(state, lang),

        // Public catalog
        ("GET", ["listings"]) => listings::index(&req, state, lang),
        ("POST", ["listings", "filters"]) => listings::apply_filters(req),
        ("POST", ["listings", "filters", "clear"]) => listings::clear_filters(),
        ("GET", ["listings", slug]) => listings::detail(&req, state, slug, lang),
        ("POST", ["listings", slug, "contact"]) => listings::contact(req, state, slug, lang),

        // Admin
        ("GET", ["admin"]) => see_other("/admin/leads"),
        ("GET", ["admin", "leads"]) => admin::leads(&req, state, lang),
        ("POST", ["admin", "leads", id, "status"]) => admin::update_lead(req, state, id, lang),
        ("GET", ["admin", "partners"]) => admin::partners(&req, state, lang),
        ("POST", ["admin", "partners", id, "status"]) => {
            admin::update_partner(req, state, id, lang)
        }
        ("GET", ["admin", "listings"]) => admin_listings::index(state, lang),
        ("GET", ["admin", "listings", "new"]) => admin_listings::new_form(lang),
        ("POST", ["admin", "listings"]) => admin_listings::save(req, state, None, lang),
        ("GET", ["admin", "listings", slug, "edit"]) => admin_listings::edit_form(state, slug, lang),
        ("POST", ["admin", "listings", id, "update"]) => {
            admin_listings::save(req, state, Some(*id), lang)
        }
        ("POST", ["admin", "listings", id, "delete"]) => admin_listings::delete(state, id),

        _ => Err(ServerError::NotFound),
    }
}

/// Entry point for the server loop: every failure becomes an HTML page.
pub fn respond(req: Request, state: &AppState) -> Response {
    let lang = request_language(&req);
    handle(req, state).unwrap_or_else(|err| error_to_response(err, lang))
}
