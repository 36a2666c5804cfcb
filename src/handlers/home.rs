// handlers/home.rs
use crate::api::models::PartnerDraft;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{field, fragment_or_page, header, is_htmx, language_state, non_empty, read_form};
use crate::i18n::{get_translation, Language};
use crate::responses::{html_response, see_other_with_cookies};
use crate::state::AppState;
use crate::templates::components::registration_result;
use crate::templates::pages::{home_page, status_page};
use crate::templates::Section;
use astra::Request;
use tracing::{info, warn};

pub fn home(lang: Language) -> ResultResp {
    html_response(home_page(lang))
}

/// `POST /register`: partner sign-up from the home page.
pub fn register(req: Request, state: &AppState, lang: Language) -> ResultResp {
    let htmx = is_htmx(&req);
    let form = read_form(req)?;
    let title = get_translation(lang, "register.title");

    let name = field(&form, "name");
    let email = field(&form, "email");
    if name.is_empty() || email.is_empty() {
        warn!("registration rejected: missing name or email");
        let fragment = registration_result(lang, Some(get_translation(lang, "register.required")));
        return html_response(fragment_or_page(htmx, title, lang, Section::Home, fragment));
    }

    let draft = PartnerDraft {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: non_empty(field(&form, "phone")),
        company_name: non_empty(field(&form, "company_name")),
    };

    let fragment = match state.api.create_partner(&draft) {
        Ok(created) => {
            info!(partner = %created.data.id, role = field(&form, "role"), "partner registered");
            registration_result(lang, None)
        }
        Err(err) => registration_result(lang, Some(err.to_string().as_str())),
    };

    html_response(fragment_or_page(htmx, title, lang, Section::Home, fragment))
}

/// `GET /language/{code}`: persist the choice and go back where the visitor was.
pub fn switch_language(req: &Request, code: &str) -> ResultResp {
    let language: Language = code
        .parse()
        .map_err(|_| ServerError::NotFound)?;

    let mut state = language_state(req);
    state.set_language(language);

    let back = back_location(header(req, "Referer"));
    see_other_with_cookies(&back, state.store().set_cookie_headers())
}

/// Same-site path from a `Referer`, so the redirect never leaves this host.
fn back_location(referer: Option<&str>) -> String {
    let Some(referer) = referer else {
        return "/".to_string();
    };

    if referer.starts_with('/') && !referer.starts_with("//") {
        return referer.to_string();
    }

    match url::Url::parse(referer) {
        Ok(url) => match url.query() {
            Some(q) => format!("{}?{q}", url.path()),
            None => url.path().to_string(),
        },
        Err(_) => "/".to_string(),
    }
}

pub fn status(state: &AppState, lang: Language) -> ResultResp {
    let page = match state.api.health_check() {
        Ok(health) => status_page(Ok(&health), state.api_url(), lang),
        Err(err) => status_page(Err(err.to_string().as_str()), state.api_url(), lang),
    };
    html_response(page)
}
