use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

use crate::cli::Cli;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration: CLI flags plus environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub share: bool,
    pub rust_log: String,
    /// Request body limit for `POST /api/analyze`.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env(cli: &Cli) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: cli.port,
            share: cli.share,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_upload_limit(std::env::var("MAX_UPLOAD_BYTES").ok())?,
        })
    }

    /// Loopback only, unless sharing was requested.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.share {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        SocketAddr::new(ip, self.port)
    }
}

fn parse_upload_limit(raw: Option<String>) -> Result<usize> {
    match raw {
        None => Ok(DEFAULT_MAX_UPLOAD_BYTES),
        Some(v) => v
            .trim()
            .parse::<usize>()
            .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{v}'")),
    }
}
