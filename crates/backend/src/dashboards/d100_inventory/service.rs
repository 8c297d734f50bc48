use anyhow::{Context, Result};
use contracts::dashboards::d100_inventory::MetricsSnapshot;
use once_cell::sync::OnceCell;
use std::path::Path;

use super::seed::seed_snapshot;
use crate::shared::config::{resolve_path, DashboardConfig};

static SNAPSHOT: OnceCell<MetricsSnapshot> = OnceCell::new();

/// Load and validate the snapshot the dashboard serves for the lifetime of
/// the process.
pub fn initialize(config: &DashboardConfig) -> Result<()> {
    let snapshot = resolve_snapshot(config)?;

    SNAPSHOT
        .set(snapshot)
        .map_err(|_| anyhow::anyhow!("Inventory snapshot already initialized"))
}

/// The configured snapshot file, or the built-in figures. Either one must
/// pass validation.
fn resolve_snapshot(config: &DashboardConfig) -> Result<MetricsSnapshot> {
    match &config.snapshot_path {
        Some(path) => {
            let path = resolve_path(path);
            tracing::info!("Loading inventory snapshot from: {}", path.display());
            load_snapshot(&path)
        }
        None => {
            tracing::info!("Using built-in inventory snapshot");
            let snapshot = seed_snapshot();
            snapshot
                .validate()
                .context("Invalid built-in inventory snapshot")?;
            Ok(snapshot)
        }
    }
}

/// Read a snapshot file, rejecting it when any invariant is violated.
pub fn load_snapshot(path: &Path) -> Result<MetricsSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let snapshot: MetricsSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Cannot parse {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    Ok(snapshot)
}

pub fn get_snapshot() -> Result<&'static MetricsSnapshot> {
    SNAPSHOT
        .get()
        .ok_or_else(|| anyhow::anyhow!("Inventory snapshot is not initialized"))
}

#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = SNAPSHOT.get_or_init(seed_snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("d100-{}-{}.json", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_snapshot_file() {
        let json = serde_json::to_string(&seed_snapshot()).unwrap();
        let path = write_temp("valid", &json);

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, seed_snapshot());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_snapshot_rejects_misaligned_file() {
        let mut snapshot = seed_snapshot();
        snapshot.payments.payment_sent.pop();
        let path = write_temp("misaligned", &serde_json::to_string(&snapshot).unwrap());

        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("shape mismatch in payments"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_snapshot_rejects_unknown_status() {
        let json = serde_json::to_string(&seed_snapshot())
            .unwrap()
            .replacen("\"Returned\"", "\"Lost\"", 1);
        let path = write_temp("status", &json);

        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown invoice status"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_resolve_without_path_uses_validated_seed() {
        let snapshot = resolve_snapshot(&DashboardConfig::default()).unwrap();
        assert_eq!(snapshot, seed_snapshot());
    }

    #[test]
    fn test_resolve_rejects_invalid_configured_file() {
        let mut snapshot = seed_snapshot();
        let repeated = snapshot.recent_invoices[1].clone();
        snapshot.recent_invoices.push(repeated);
        let path = write_temp("duplicate", &serde_json::to_string(&snapshot).unwrap());

        let config = DashboardConfig {
            snapshot_path: Some(path.to_string_lossy().into_owned()),
        };
        let err = resolve_snapshot(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate invoice id: 'INV9783412'"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_snapshot(Path::new("/definitely/not/here.json")).is_err());
    }
}
