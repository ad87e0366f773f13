//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness probe at `/health`
//! - **Default Status** (`default_status`) - Fallback for every other path

mod default_status;
mod health_check;

pub use default_status::*;
pub use health_check::*;
