//! Configuration loading and management.

use std::path::{Path, PathBuf};

use bk_core::{DateOrder, GroupingOptions, Pairing};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default pairing policy for `bk group`.
    #[serde(default)]
    pub pairing: Pairing,

    /// Default date ordering for `bk group`.
    #[serde(default)]
    pub date_order: DateOrder,

    /// Print JSON instead of human-readable output by default.
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (BK_*)
        figment = figment.merge(Env::prefixed("BK_"));

        figment.extract()
    }

    /// Grouping options implied by this configuration.
    pub const fn grouping_options(&self) -> GroupingOptions {
        GroupingOptions {
            date_order: self.date_order,
            pairing: self.pairing,
        }
    }
}

/// Returns the platform-specific config directory for bk.
///
/// On Linux: `~/.config/bk`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bk"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_bk() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "bk");
    }

    #[test]
    fn test_default_config_uses_reference_pairing() {
        let config = Config::default();
        assert_eq!(config.pairing, Pairing::FirstTwo);
        assert_eq!(config.date_order, DateOrder::FirstOccurrence);
        assert!(!config.json);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bk.toml");
        std::fs::write(&path, "pairing = \"adjacent\"\ndate_order = \"ascending\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();

        assert_eq!(config.pairing, Pairing::Adjacent);
        assert_eq!(config.date_order, DateOrder::Ascending);
    }

    #[test]
    fn test_invalid_config_value_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bk.toml");
        std::fs::write(&path, "pairing = \"sideways\"\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_grouping_options_follow_config() {
        let config = Config {
            pairing: Pairing::Adjacent,
            date_order: DateOrder::Ascending,
            json: false,
        };
        let options = config.grouping_options();
        assert_eq!(options.pairing, Pairing::Adjacent);
        assert_eq!(options.date_order, DateOrder::Ascending);
    }
}
