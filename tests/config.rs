use std::collections::HashMap;
use std::time::Duration;

use qqbot::config::{AppConfig, AppEnv};
use qqbot::error::AppError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.app_env, AppEnv::Development);
    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.http_port, 8088);
    assert_eq!(config.schedule_interval, Duration::from_secs(300));
    assert_eq!(config.server_name, "GTNH 2.7.2");
    assert_eq!(config.mc_server_url, "http://localhost:25555");
    assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:8088");
}

#[test]
fn environment_overrides_defaults() {
    let config = AppConfig::from_lookup(lookup(&[
        ("APP_ENV", "Production"),
        ("HTTP_HOST", "127.0.0.1"),
        ("HTTP_PORT", " 9000 "),
        ("SCHEDULE_INTERVAL_SECS", "60"),
        ("SERVER_NAME", "Survival"),
        ("MC_SERVER_URL", "http://mc.internal:25555"),
    ]))
    .unwrap();

    assert_eq!(config.app_env, AppEnv::Production);
    assert_eq!(config.http_port, 9000);
    assert_eq!(config.schedule_interval, Duration::from_secs(60));
    assert_eq!(config.server_name, "Survival");
    assert_eq!(config.mc_server_url, "http://mc.internal:25555");
    assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:9000");
}

#[test]
fn unknown_app_env_is_development() {
    let config = AppConfig::from_lookup(lookup(&[("APP_ENV", "staging")])).unwrap();
    assert_eq!(config.app_env, AppEnv::Development);
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("HTTP_PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidEnv { var: "HTTP_PORT", .. }));

    let err = AppConfig::from_lookup(lookup(&[("HTTP_PORT", "70000")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidEnv { var: "HTTP_PORT", .. }));
}

#[test]
fn zero_or_invalid_interval_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("SCHEDULE_INTERVAL_SECS", "0")])).unwrap_err();
    assert!(matches!(err, AppError::ZeroInterval("SCHEDULE_INTERVAL_SECS")));

    let err = AppConfig::from_lookup(lookup(&[("SCHEDULE_INTERVAL_SECS", "-5")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidEnv { var: "SCHEDULE_INTERVAL_SECS", .. }));
}

#[test]
fn bad_host_is_reported_on_listen_addr() {
    let config = AppConfig::from_lookup(lookup(&[("HTTP_HOST", "not a host")])).unwrap();
    assert!(matches!(config.listen_addr(), Err(AppError::InvalidAddress(_))));
}

#[test]
fn app_env_parse_is_case_insensitive() {
    for value in ["production", "PRODUCTION", "Production"] {
        assert_eq!(AppEnv::parse(value), AppEnv::Production, "value {value}");
    }
    for value in ["development", "dev", "", "prod"] {
        assert_eq!(AppEnv::parse(value), AppEnv::Development, "value {value}");
    }
}

#[test]
fn ipv6_host_is_accepted() {
    let config = AppConfig::from_lookup(lookup(&[("HTTP_HOST", "::")])).unwrap();
    assert_eq!(config.listen_addr().unwrap().to_string(), "[::]:8088");

    let config = AppConfig::from_lookup(lookup(&[
        ("HTTP_HOST", "[::1]"),
        ("HTTP_PORT", "9000"),
    ]))
    .unwrap();
    assert_eq!(config.listen_addr().unwrap().to_string(), "[::1]:9000");
}
