pub mod admin;
pub mod admin_listings;
pub mod error;
pub mod home;
pub mod listing_detail;
pub mod listings;
pub mod not_found;
pub mod status;

pub use admin::{leads_page, partners_page, AdminOutcome, LeadsVm, PartnersVm};
pub use admin_listings::{admin_listings_page, listing_form_page};
pub use error::error_page;
pub use home::home_page;
pub use listing_detail::{listing_detail_page, listing_error_page, ListingDetailVm};
pub use listings::{listings_page, ListingsOutcome, ListingsVm};
pub use not_found::not_found_page;
pub use status::status_page;
