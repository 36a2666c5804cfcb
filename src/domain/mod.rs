pub mod filters;
pub mod gallery;
pub mod listing_form;
pub mod status_board;
