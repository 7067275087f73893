//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary scheme
//! presets from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::SchemePreset;

/// Loads and provides access to salary scheme presets.
///
/// # Directory Structure
///
/// Each preset lives in its own file; files are read in name order and the
/// first one becomes the default scheme:
/// ```text
/// config/presets/
/// ├── basic_40.yaml
/// └── basic_50.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use ctc_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/presets").unwrap();
/// let preset = loader.get_scheme("basic_50").unwrap();
/// println!("{}: {}", preset.name, preset.description);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    presets: Vec<SchemePreset>,
}

impl ConfigLoader {
    /// Loads every `*.yaml` preset in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory does not exist or holds no preset files
    /// - Any file contains invalid YAML
    /// - Any preset is invalid or shares its name with another
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ctc_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/presets")?;
    /// # Ok::<(), ctc_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no preset files found)", dir_str),
            });
        }

        let mut presets = Vec::with_capacity(files.len());
        for file in &files {
            let preset = Self::load_yaml::<SchemePreset>(file)?;
            debug!(
                preset = %preset.name,
                basic_ratio = %preset.scheme.basic_ratio,
                include_edli_admin = preset.scheme.include_edli_admin,
                path = %file.display(),
                "Loaded scheme preset"
            );
            presets.push(preset);
        }

        Self::from_presets(presets)
    }

    /// Returns a loader holding the presets compiled into the engine.
    pub fn builtin() -> Self {
        Self {
            presets: SchemePreset::builtin(),
        }
    }

    /// Builds a loader from presets already in memory.
    ///
    /// The first preset becomes the default. Fails if the list is empty, a
    /// preset is invalid, or two presets share a name.
    pub fn from_presets(presets: Vec<SchemePreset>) -> EngineResult<Self> {
        if presets.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: "(no presets supplied)".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for preset in &presets {
            preset.validate()?;
            if !seen.insert(preset.name.as_str()) {
                return Err(EngineError::InvalidScheme {
                    name: preset.name.clone(),
                    message: "duplicate preset name".to_string(),
                });
            }
        }

        Ok(Self { presets })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns all loaded presets in load order.
    pub fn presets(&self) -> &[SchemePreset] {
        &self.presets
    }

    /// Returns the default preset.
    pub fn default_preset(&self) -> &SchemePreset {
        // from_presets and builtin never produce an empty list
        &self.presets[0]
    }

    /// Gets a preset by its name.
    ///
    /// # Example
    ///
    /// ```
    /// use ctc_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// let preset = loader.get_scheme("basic_40")?;
    /// assert!(preset.scheme.include_edli_admin);
    /// # Ok::<(), ctc_engine::error::EngineError>(())
    /// ```
    pub fn get_scheme(&self, name: &str) -> EngineResult<&SchemePreset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| EngineError::SchemeNotFound {
                name: name.to_string(),
            })
    }

    /// Resolves an optional preset name, falling back to the default.
    pub fn resolve(&self, name: Option<&str>) -> EngineResult<&SchemePreset> {
        match name {
            Some(name) => self.get_scheme(name),
            None => Ok(self.default_preset()),
        }
    }
}
