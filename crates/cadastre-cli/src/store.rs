//! Registry state file persistence.
//!
//! The whole registry lives in one JSON file, `registry.json`, inside the
//! state directory. Loading goes through [`Registry::restore`], so a state
//! file that was hand-edited into an inconsistent shape is rejected here
//! rather than surfacing later as a nonsense lookup result.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use cadastre_ledger::{Registry, RegistrySnapshot};

/// File name of the registry snapshot inside the state directory.
pub const STATE_FILE_NAME: &str = "registry.json";

/// Path of the registry snapshot inside `state_dir`.
pub fn state_file(state_dir: &Path) -> PathBuf {
    state_dir.join(STATE_FILE_NAME)
}

/// Load the registry from an existing state file.
///
/// Fails if the file does not exist, does not parse, or does not pass
/// restore validation.
pub fn load_registry(state_dir: &Path) -> Result<Registry> {
    let path = state_file(state_dir);
    if !path.exists() {
        bail!(
            "no registry state at {}; run `cadastre ledger init` first",
            path.display()
        );
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: RegistrySnapshot = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let registry = Registry::restore(&snapshot)
        .with_context(|| format!("registry state in {} failed validation", path.display()))?;

    tracing::debug!(path = %path.display(), parcels = registry.ledger().len(), "loaded registry");
    Ok(registry)
}

/// Load the registry, or start an empty one if no state file exists yet.
pub fn load_or_init_registry(state_dir: &Path) -> Result<Registry> {
    if state_file(state_dir).exists() {
        load_registry(state_dir)
    } else {
        tracing::debug!(dir = %state_dir.display(), "no state file, starting empty registry");
        Ok(Registry::new())
    }
}

/// Snapshot the registry and write it to the state file.
pub fn save_registry(state_dir: &Path, registry: &Registry) -> Result<()> {
    std::fs::create_dir_all(state_dir)
        .with_context(|| format!("failed to create state directory {}", state_dir.display()))?;

    let path = state_file(state_dir);
    let json = serde_json::to_string_pretty(&registry.snapshot())?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "saved registry");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastre_core::{AccountId, Jurisdiction, Timestamp};

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join("state");

        let mut registry = Registry::new();
        registry.add_admin(
            AccountId::new("admin-x").unwrap(),
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            Timestamp::parse("2026-02-01T00:00:00Z").unwrap(),
        );
        save_registry(&state_dir, &registry).unwrap();

        let loaded = load_registry(&state_dir).unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn load_missing_state_mentions_init() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_registry(dir.path()).unwrap_err();
        assert!(err.to_string().contains("cadastre ledger init"));
    }

    #[test]
    fn load_or_init_starts_empty_without_file() {
        let dir = tempfile::tempdir().unwrap();

        let registry = load_or_init_registry(dir.path()).unwrap();
        assert!(registry.directory().is_empty());
        assert!(registry.ledger().is_empty());
        // Nothing was written.
        assert!(!state_file(dir.path()).exists());
    }

    #[test]
    fn load_rejects_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(state_file(dir.path()), "not json").unwrap();

        let err = load_registry(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn load_rejects_inconsistent_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let snapshot = RegistrySnapshot {
            format_version: 99,
            admins: Vec::new(),
            parcels: Vec::new(),
            owners: Vec::new(),
        };
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        std::fs::write(state_file(dir.path()), json).unwrap();

        let err = load_registry(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed validation"));
    }
}
