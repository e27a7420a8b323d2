use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_blank_host_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn invalid_port_message_names_value() {
    let err = ConfigError::InvalidPort { value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT value: \"abc\"");
}
