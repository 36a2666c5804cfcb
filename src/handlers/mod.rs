// handlers/mod.rs
use crate::errors::ServerError;
use crate::i18n::{CookieStore, Language, LanguageState};
use crate::templates::{desktop_layout, Section};
use astra::Request;
use maud::{html, Markup};
use std::collections::HashMap;
use std::io::Read;

pub mod admin;
pub mod admin_listings;
pub mod home;
pub mod listings;

pub fn header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Language state for this request, read from the `Cookie` header.
pub fn language_state(req: &Request) -> LanguageState<CookieStore> {
    LanguageState::load(CookieStore::from_header(header(req, "Cookie")))
}

pub fn request_language(req: &Request) -> Language {
    language_state(req).language()
}

/// Percent-decode one path segment. The client re-encodes it when calling the API.
pub fn decode_segment(raw: &str) -> Result<String, ServerError> {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|_| ServerError::BadRequest(format!("malformed path segment: {raw}")))
}

/// True when the request came from htmx and expects a fragment.
pub fn is_htmx(req: &Request) -> bool {
    header(req, "HX-Request").is_some_and(|v| v == "true")
}

pub fn query_map(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

/// Decode an `application/x-www-form-urlencoded` body.
pub fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}

/// Form value with surrounding whitespace removed; missing means empty.
pub fn field<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(|v| v.trim()).unwrap_or("")
}

pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// htmx gets the bare fragment; a plain form post gets it inside the layout.
pub fn fragment_or_page(
    htmx: bool,
    title: &str,
    lang: Language,
    section: Section,
    fragment: Markup,
) -> Markup {
    if htmx {
        return fragment;
    }

    desktop_layout(
        title,
        lang,
        section,
        html! {
            main class="max-w-xl mx-auto px-4 py-12" {
                (fragment)
            }
        },
    )
}
