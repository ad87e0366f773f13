//! # HTTP Status Body
//!
//! The single payload shape served over HTTP.

use serde::Serialize;

use crate::utils::constant::{HEALTH_MESSAGE, SERVICE_MESSAGE, STATUS_OK};

/// JSON body `{"status": ..., "message": ...}`.
///
/// Field order is part of the wire format: `status` is always serialized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusBody {
    /// Body served by `/health`
    pub const HEALTH: StatusBody = StatusBody {
        status: STATUS_OK,
        message: HEALTH_MESSAGE,
    };

    /// Body served for every other path
    pub const SERVICE: StatusBody = StatusBody {
        status: STATUS_OK,
        message: SERVICE_MESSAGE,
    };
}
