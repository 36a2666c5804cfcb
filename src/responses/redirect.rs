use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 303 so that a POSTed form lands on a plain GET.
pub fn see_other(location: &str) -> ResultResp {
    see_other_with_cookies(location, &[])
}

pub fn see_other_with_cookies(location: &str, set_cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);

    for cookie in set_cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
