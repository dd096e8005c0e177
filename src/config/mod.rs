//! Display configuration: segment look and preview geometry.
//!
//! User-level config: `~/.converse/config.yaml`
//! Project-level config: `.converse/config.yaml` (wins over the user file)
//!
//! Resolution: explicit path → project config → user config → defaults.
//! Missing fields fall back to their defaults individually.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConverseError, ConverseResult};

/// How segments lay themselves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Rows reserved above the child view for the assistant label.
    pub label_height: u16,
    /// Text shown in the assistant label.
    pub assistant_name: String,
    /// Whether this display can render map widgets.
    pub maps_enabled: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            label_height: 1,
            assistant_name: "Assistant".into(),
            maps_enabled: true,
        }
    }
}

/// Size of the simulated display, in cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 36,
            height: 48,
        }
    }
}

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub segments: SegmentConfig,
}

/// Path to `~/.converse/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".converse"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".converse"))
    }
}

const PROJECT_CONFIG: &str = ".converse/config.yaml";

impl Config {
    /// Load from the project file, then the user file, then defaults.
    /// A file that exists but fails to parse is skipped with a warning.
    pub fn load() -> Self {
        let candidates = [
            Some(PathBuf::from(PROJECT_CONFIG)),
            dirs_path().map(|p| p.join("config.yaml")),
        ];
        for path in candidates.into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return config,
                Err(e) => warn!("ignoring {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    /// Load a specific config file. Errors are returned, not swallowed.
    pub fn load_from(path: &Path) -> ConverseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConverseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> ConverseResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConverseResult<()> {
        if self.display.width == 0 {
            return Err(ConverseError::InvalidConfig("display.width must be > 0".into()));
        }
        if self.segments.label_height >= self.display.height {
            return Err(ConverseError::InvalidConfig(format!(
                "segments.label_height ({}) must be smaller than display.height ({})",
                self.segments.label_height, self.display.height
            )));
        }
        Ok(())
    }

    /// Save to the user-level config file.
    pub fn save(&self) -> ConverseResult<PathBuf> {
        let Some(dir) = dirs_path() else {
            return Err(ConverseError::InvalidConfig(
                "cannot determine home directory".into(),
            ));
        };
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.yaml");
        std::fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }
}
