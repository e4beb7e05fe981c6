//! Serde-loadable configuration for the reveal sequence.

pub(crate) mod palette;
pub(crate) mod thresholds;

use std::path::Path;

use crate::foundation::error::{RevealError, RevealResult};

use self::palette::CaptionPalette;
use self::thresholds::ThresholdConfig;

/// Complete configuration: segment thresholds plus the caption gradient palette.
///
/// Every field is optional in JSON; omitted values take their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Progress segment thresholds and ranges.
    pub thresholds: ThresholdConfig,
    /// Caption gradient colors.
    pub palette: CaptionPalette,
}

impl RevealConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| RevealError::serde(format!("parse reveal config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            RevealError::Other(anyhow::Error::new(e).context(format!(
                "read reveal config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Validate every section.
    pub fn validate(&self) -> RevealResult<()> {
        self.thresholds.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/reveal.rs"]
mod tests;
