//! # Environment Configuration
//!
//! All settings come from environment variables (a `.env` file is loaded by
//! `main` first). Every variable has a default, so an empty environment
//! yields a working development configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `APP_ENV` | `development` |
//! | `HTTP_HOST` | `0.0.0.0` |
//! | `HTTP_PORT` | `8088` |
//! | `SCHEDULE_INTERVAL_SECS` | `300` |
//! | `SERVER_NAME` | `GTNH 2.7.2` |
//! | `MC_SERVER_URL` | `http://localhost:25555` |

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::utils::constant::*;

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// `production` (case-insensitive) selects [`AppEnv::Production`]; anything else is development.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_env: AppEnv,
    pub http_host: String,
    pub http_port: u16,
    /// Period of the scheduled trigger. Never zero.
    pub schedule_interval: Duration,
    /// Name prefixed to every bot reply
    pub server_name: String,
    /// Base URL of the Minecraft status API, without trailing `/status`
    pub mc_server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_env: AppEnv::Development,
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            schedule_interval: DEFAULT_SCHEDULE_INTERVAL,
            server_name: DEFAULT_SERVER_NAME.to_string(),
            mc_server_url: DEFAULT_MC_SERVER_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidEnv`] when a numeric variable does not parse and
    /// [`AppError::ZeroInterval`] when `SCHEDULE_INTERVAL_SECS` is `0`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(defaults.app_env);

        let http_port = match lookup("HTTP_PORT") {
            Some(v) => v.trim().parse().map_err(|_| AppError::InvalidEnv {
                var: "HTTP_PORT",
                value: v,
            })?,
            None => defaults.http_port,
        };

        let schedule_interval = match lookup("SCHEDULE_INTERVAL_SECS") {
            Some(v) => {
                let secs: u64 = v.trim().parse().map_err(|_| AppError::InvalidEnv {
                    var: "SCHEDULE_INTERVAL_SECS",
                    value: v,
                })?;
                if secs == 0 {
                    return Err(AppError::ZeroInterval("SCHEDULE_INTERVAL_SECS"));
                }
                Duration::from_secs(secs)
            }
            None => defaults.schedule_interval,
        };

        Ok(Self {
            app_env,
            http_host: lookup("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port,
            schedule_interval,
            server_name: lookup("SERVER_NAME").unwrap_or(defaults.server_name),
            mc_server_url: lookup("MC_SERVER_URL").unwrap_or(defaults.mc_server_url),
        })
    }

    /// Socket address the HTTP server binds to. `HTTP_HOST` may be IPv4 or IPv6,
    /// with or without brackets.
    pub fn listen_addr(&self) -> AppResult<SocketAddr> {
        let host = self.http_host.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        let ip: IpAddr = host
            .parse()
            .map_err(|_| AppError::InvalidAddress(self.http_host.clone()))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }
}
