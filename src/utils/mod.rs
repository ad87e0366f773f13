//! # Utility Modules
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Response texts, configuration defaults and timeouts
//! - **Shutdown** (`shutdown`) - Ctrl+C / SIGTERM future for graceful shutdown
//! - **Telemetry** (`telemetry`) - Tracing subscriber setup

pub mod constant;
pub mod shutdown;
pub mod telemetry;
