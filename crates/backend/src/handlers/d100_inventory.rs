use axum::{http::StatusCode, Json};
use contracts::dashboards::d100_inventory::MetricsSnapshot;

use crate::dashboards::d100_inventory::service;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/d100/inventory_snapshot
pub async fn get_inventory_snapshot(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<MetricsSnapshot>, StatusCode> {
    let snapshot = service::get_snapshot().map_err(|e| {
        tracing::error!("Inventory snapshot unavailable: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::debug!("Serving inventory snapshot to '{}'", claims.username);

    Ok(Json(snapshot.clone()))
}
