mod api_tests;
mod router_tests;
mod transport_tests;
pub mod utils;
