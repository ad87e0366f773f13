//! # Application Constants
//!
//! Fixed response texts, defaults for the environment configuration and
//! timeouts used throughout the qqbot service.

use std::time::Duration;

/// Value of the `status` field in every HTTP response body
pub const STATUS_OK: &str = "ok";

/// Message returned by `/health`
pub const HEALTH_MESSAGE: &str = "Service is running";

/// Message returned for every path other than `/health`
pub const SERVICE_MESSAGE: &str = "QQ Bot service is running";

/// Path of the health check endpoint
pub const HEALTH_PATH: &str = "/health";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "qqbot=info,tower_http=info";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8088;

/// Default period of the scheduled trigger
pub const DEFAULT_SCHEDULE_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const DEFAULT_SERVER_NAME: &str = "GTNH 2.7.2";
pub const DEFAULT_MC_SERVER_URL: &str = "http://localhost:25555";

/// Upper bound on a single request to the Minecraft status API
pub const STATUS_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Time allowed for in-flight requests to finish after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(30);

// Bot commands, matched as substrings of the message content
pub const CMD_SERVER_STATUS: &str = "/服务器人数";
pub const CMD_DAILY_RANKING: &str = "/在线排行";

// Fallbacks for fields missing from the status API response
pub const UNKNOWN_UPTIME: &str = "未知";
pub const NO_DETAILS: &str = "无";
pub const NO_RANKING: &str = "暂无排行数据";
