use crate::errors::ServerError;
use crate::i18n::Language;
use crate::templates::pages::{error_page, not_found_page};
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;
use tracing::warn;

/// Convert a ServerError into a proper HTML response page
pub fn error_to_response(err: ServerError, lang: Language) -> Response {
    let status = err.status_code();

    let page = match &err {
        ServerError::NotFound => not_found_page(lang),
        other => {
            warn!(status, error = %other, "request failed");
            error_page(lang, status, &other.to_string())
        }
    };

    render(status, page)
}

fn render(status: u16, page: Markup) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
