mod admin_listings_tests;
mod admin_tests;
mod detail_tests;
mod home_tests;
mod listings_tests;
