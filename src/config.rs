//! Listener configuration from the environment.
//!
//! DESIGN
//! ======
//! `SITE_ADDR` wins outright. Otherwise `HOST`/`PORT` (defaults `0.0.0.0`
//! and `3000`) apply if either is set. With neither, the Leptos `site-addr`
//! from `[package.metadata.leptos]` is used so `cargo leptos watch` and a
//! bare binary agree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when a set variable does not parse.
    pub fn from_env(leptos_addr: SocketAddr) -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok(), leptos_addr)
    }

    fn from_lookup<F>(get: F, leptos_addr: SocketAddr) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = get("SITE_ADDR") {
            let addr = parse_env("SITE_ADDR", &raw)?;
            return Ok(Self { addr });
        }

        let host = get("HOST");
        let port = get("PORT");
        if host.is_none() && port.is_none() {
            return Ok(Self { addr: leptos_addr });
        }

        let host = host.map_or(Ok(DEFAULT_HOST), |raw| parse_env("HOST", &raw))?;
        let port = port.map_or(Ok(DEFAULT_PORT), |raw| parse_env("PORT", &raw))?;
        Ok(Self { addr: SocketAddr::new(host, port) })
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ServerError> {
    raw.trim()
        .parse()
        .map_err(|_| ServerError::InvalidEnv { key, value: raw.to_owned() })
}
