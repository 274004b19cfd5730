//! Optional defaults file.
//!
//! A YAML file can pre-set the knobs a user would otherwise repeat on
//! every invocation; command-line flags win over the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeDefaults {
    /// "nearest" or "bilinear".
    pub interp: String,

    /// Decimal places for numeric output.
    pub decimals: usize,

    /// Average valid bilinear corners instead of going missing.
    pub average_partial: bool,

    /// Coded-string priority table generation: "v1" or "v2".
    pub table_version: String,

    /// Elements probed when the command line names none.
    pub elements: Vec<String>,
}

impl Default for ProbeDefaults {
    fn default() -> Self {
        Self {
            interp: "bilinear".to_string(),
            decimals: 3,
            average_partial: false,
            table_version: "v2".to_string(),
            elements: Vec::new(),
        }
    }
}

impl ProbeDefaults {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading defaults file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing defaults file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let defaults: ProbeDefaults = serde_yaml::from_str("interp: nearest\n").unwrap();
        assert_eq!(defaults.interp, "nearest");
        assert_eq!(defaults.decimals, 3);
        assert_eq!(defaults.table_version, "v2");
    }
}
