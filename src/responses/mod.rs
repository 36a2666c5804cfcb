pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

pub use html::{html_response, html_retarget, html_with_status};
pub use redirect::{see_other, see_other_with_cookies};
