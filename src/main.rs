use crate::api::HttpTransport;
use crate::config::Config;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod handlers;
mod i18n;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("easylease_web=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();

    // 1️⃣ Build the API client
    let transport = match HttpTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };
    let state = AppState::new(&config.api_url, Arc::new(transport));
    info!(api_url = state.api_url(), "using EasyLease API");

    // 2️⃣ Start the server
    info!(addr = %config.addr, workers = config.workers, "starting server");
    let server = Server::bind(&config.addr).max_workers(config.workers);

    // 3️⃣ Serve requests; each worker shares the read-only state
    let result = server.serve(move |req, _info| router::respond(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
