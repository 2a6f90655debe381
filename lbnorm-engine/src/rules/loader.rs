use super::{config::RuleConfig, runtime::RuleSet};
use crate::error::{EngineError, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

static LUXEMBOURGISH: OnceLock<std::result::Result<Arc<RuleSet>, String>> = OnceLock::new();

const EMBEDDED_RULES: &str = include_str!("../../configs/rules/luxembourgish.toml");

impl RuleSet {
    /// The built-in Luxembourgish rule set, parsed once
    pub fn luxembourgish() -> Result<Arc<RuleSet>> {
        LUXEMBOURGISH
            .get_or_init(|| {
                RuleSet::parse(EMBEDDED_RULES)
                    .map(Arc::new)
                    .map_err(|e| format!("Failed to load embedded rules: {e}"))
            })
            .clone()
            .map_err(EngineError::Configuration)
    }

    /// Parse and validate a rule set from TOML text
    pub fn from_toml_str(content: &str) -> Result<RuleSet> {
        RuleSet::parse(content).map_err(EngineError::Configuration)
    }

    /// Load a rule set from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RuleSet> {
        let path = path.as_ref();
        let file_error = |error: String| EngineError::ConfigurationFile {
            path: path.display().to_string(),
            error,
        };
        let content = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        RuleSet::parse(&content).map_err(file_error)
    }

    fn parse(content: &str) -> std::result::Result<RuleSet, String> {
        let config: RuleConfig =
            toml::from_str(content).map_err(|e| format!("Failed to parse rules: {e}"))?;
        RuleSet::from_config(&config)
    }
}
