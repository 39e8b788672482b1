//! Seed configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration controlling where the initial content comes from.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO_SEED")]
pub struct SeedSettings {
    /// JSON seed document to load instead of the built-in content.
    pub path: Option<PathBuf>,
}

impl SeedSettings {
    /// Configured seed document path, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }
}
