pub mod card;
pub mod contact_form;
pub mod error;
pub mod gallery;
pub mod registration_form;
pub mod search_filters;
pub mod status_list;

pub use card::{card, listing_card, money};
pub use contact_form::{contact_form, contact_sent, ContactFormState};
pub use error::{alert, empty_panel, error_panel};
pub use gallery::image_gallery;
pub use registration_form::{registration_form, registration_result};
pub use search_filters::search_filters;
pub use status_list::{
    lead_row, leads_list, partner_row, partners_list, status_badge, status_tabs, StatusTab,
};
