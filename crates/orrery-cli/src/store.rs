//! File-backed preset store.
//!
//! The stand-in for the app's key-value backend: one JSON document per
//! preset, keyed by name, under a single directory. No indexing, no
//! versioning; the record format is owned by `orrery-spec`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use orrery_spec::{is_valid_preset_name, PlanetPreset};

/// Errors from preset store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no preset named '{0}' in the store")]
    NotFound(String),

    #[error("'{0}' is not a valid preset name")]
    InvalidName(String),
}

/// A directory of planet presets.
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
}

impl PresetStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file path a preset name maps to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_preset_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(format!("{}.json", name)))
    }

    /// Saves a preset under its own name, overwriting any existing record.
    pub fn save(&self, preset: &PlanetPreset) -> Result<PathBuf, StoreError> {
        let path = self.path_for(&preset.name)?;
        let json = preset.to_json_pretty()?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Loads the preset saved under `name`.
    pub fn load(&self, name: &str) -> Result<PlanetPreset, StoreError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(PlanetPreset::from_json(&json)?)
    }

    /// Deletes the preset saved under `name`.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Lists saved preset names, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_spec::{GasType, Surface};

    fn sample_preset(name: &str) -> PlanetPreset {
        PlanetPreset::builder(name, 0.42)
            .surface(Surface::Gaseous {
                gas_type: GasType::Ammonia,
            })
            .show_rings(true)
            .build()
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        let preset = sample_preset("Amber Giant");
        store.save(&preset).unwrap();

        let loaded = store.load("Amber Giant").unwrap();
        assert_eq!(loaded, preset);
        assert_eq!(loaded.seed.to_bits(), preset.seed.to_bits());
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.load("nothing-here"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.load("../../etc/passwd"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.path_for("a/b"),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn list_is_sorted_and_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save(&sample_preset("beta")).unwrap();
        store.save(&sample_preset("alpha")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn delete_removes_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save(&sample_preset("ephemeral")).unwrap();
        store.delete("ephemeral").unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(
            store.delete("ephemeral"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn overwrite_replaces_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        let mut preset = sample_preset("rewrite");
        store.save(&preset).unwrap();
        preset.seed = 0.99;
        store.save(&preset).unwrap();

        assert_eq!(store.load("rewrite").unwrap().seed, 0.99);
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
