use std::collections::HashMap;

use super::*;

fn leptos_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ServerError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned(), leptos_addr())
}

#[test]
fn no_env_uses_leptos_site_addr() {
    assert_eq!(config_from(&[]).unwrap().addr, leptos_addr());
}

#[test]
fn site_addr_overrides_everything() {
    let config = config_from(&[("SITE_ADDR", "10.0.0.5:8080"), ("PORT", "9999")]).unwrap();
    assert_eq!(config.addr, "10.0.0.5:8080".parse().unwrap());
}

#[test]
fn port_alone_binds_all_interfaces() {
    let config = config_from(&[("PORT", "8081")]).unwrap();
    assert_eq!(config.addr, "0.0.0.0:8081".parse().unwrap());
}

#[test]
fn host_alone_uses_default_port() {
    let config = config_from(&[("HOST", "127.0.0.1")]).unwrap();
    assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
}

#[test]
fn values_are_trimmed() {
    let config = config_from(&[("PORT", " 4000 ")]).unwrap();
    assert_eq!(config.addr.port(), 4000);
}

#[test]
fn invalid_port_is_reported_with_key() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { key: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_site_addr_is_reported() {
    let err = config_from(&[("SITE_ADDR", "localhost")]).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { key: "SITE_ADDR", .. }));
}
