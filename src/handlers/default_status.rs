use axum::{Json, http::Uri};
use tracing::{debug, instrument};

use crate::models::StatusBody;

/// Fallback for every path other than `/health`, regardless of method.
///
/// Always `200 OK` with `{"status":"ok","message":"QQ Bot service is running"}`.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn default_status(uri: Uri) -> Json<StatusBody> {
    debug!("Default status served");
    Json(StatusBody::SERVICE)
}
