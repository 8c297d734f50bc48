use anyhow::{Context, Result};

use crate::dashboards::d100_inventory::service as inventory_service;
use crate::shared::config::Config;
use crate::system::{auth::jwt, users::service as user_service};

/// Install every process-wide service from configuration.
///
/// Fails when the configured snapshot is unreadable or violates its
/// invariants, so a broken dashboard never reaches the client.
pub fn initialize(config: &Config) -> Result<()> {
    jwt::initialize(&config.auth).context("Failed to initialize token signing")?;
    user_service::initialize(&config.users).context("Failed to build user store")?;
    inventory_service::initialize(&config.dashboard)
        .context("Failed to load inventory snapshot")?;

    if config
        .users
        .iter()
        .any(|u| u.username == "admin" && u.password == "admin")
    {
        tracing::warn!("═══════════════════════════════════════════════");
        tracing::warn!("  Default credentials admin / admin are active");
        tracing::warn!("  ⚠️  Override [[users]] in config.toml");
        tracing::warn!("═══════════════════════════════════════════════");
    }

    Ok(())
}
