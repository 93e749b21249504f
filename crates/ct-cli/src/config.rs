//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use ct_core::Classifier;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Board export used when `--export` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,

    /// Count a card moved in from another board as created here.
    pub moved_to_board_creates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: None,
            moved_to_board_creates: Classifier::default().moved_to_board_creates,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, then optionally from a
    /// specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // CT_EXPORT_PATH, CT_MOVED_TO_BOARD_CREATES
        figment = figment.merge(Env::prefixed("CT_"));

        figment.extract()
    }

    pub const fn classifier(&self) -> Classifier {
        Classifier {
            moved_to_board_creates: self.moved_to_board_creates,
        }
    }
}

/// Returns the platform-specific config directory for cardtrail.
///
/// On Linux: `~/.config/cardtrail`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cardtrail"))
}
