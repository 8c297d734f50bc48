use contracts::dashboards::d100_inventory::MetricsSnapshot;

use crate::system::auth::api::fetch_with_auth;

const SNAPSHOT_PATH: &str = "/api/d100/inventory_snapshot";

/// Fetch the metrics snapshot for one dashboard activation
pub async fn get_inventory_snapshot(token: &str) -> Result<MetricsSnapshot, String> {
    fetch_with_auth(SNAPSHOT_PATH, token).await
}
