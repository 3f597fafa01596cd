//! Configuration schema for pkgsnap
//!
//! Configuration is stored at `~/.config/pkgsnap/config.toml`

use crate::report::Manager;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Per-manager enable flags
    pub managers: ManagersConfig,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for CSV files and the name cache
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./output"),
        }
    }
}

/// Which package managers to include in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagersConfig {
    /// Microsoft Store source (winget-backed)
    pub msstore: bool,

    /// Winget source
    pub winget: bool,

    /// Scoop
    pub scoop: bool,

    /// Chocolatey
    pub choco: bool,
}

impl Default for ManagersConfig {
    fn default() -> Self {
        Self {
            msstore: true,
            winget: true,
            scoop: true,
            choco: true,
        }
    }
}

impl ManagersConfig {
    /// Check whether a manager is enabled
    pub fn is_enabled(&self, manager: Manager) -> bool {
        match manager {
            Manager::Msstore => self.msstore,
            Manager::Winget => self.winget,
            Manager::Scoop => self.scoop,
            Manager::Choco => self.choco,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[managers]"));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("./output"));
        assert!(config.managers.winget);
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [managers]
            choco = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.managers.is_enabled(Manager::Choco));
        assert!(config.managers.is_enabled(Manager::Scoop)); // default preserved
        assert_eq!(config.output.dir, PathBuf::from("./output"));
    }
}
