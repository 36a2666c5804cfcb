use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_API_URL: &str = "http://localhost:8008";

#[derive(Parser, Debug, Clone)]
#[command(name = "easylease-web", about = "EasyLease rental listings website")]
pub struct Config {
    /// Base URL of the EasyLease REST API
    #[arg(long, env = "NEXT_PUBLIC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Address to listen on
    #[arg(long, env = "EASYLEASE_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Worker threads serving requests
    #[arg(long, env = "EASYLEASE_WORKERS", default_value_t = 8)]
    pub workers: usize,
}
