use super::{config::LexiconConfig, runtime::Lexicon};
use crate::error::{NumeralError, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

static LUXEMBOURGISH: OnceLock<Result<Arc<Lexicon>>> = OnceLock::new();

macro_rules! embed_lexicon {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED: (&str, &str) = embed_lexicon!("lb", "../../configs/lexicon/luxembourgish.toml");

impl Lexicon {
    /// The built-in Luxembourgish lexicon
    ///
    /// Parsed on first use and shared afterwards.
    pub fn luxembourgish() -> Result<Arc<Lexicon>> {
        LUXEMBOURGISH
            .get_or_init(|| {
                let (code, content) = EMBEDDED;
                let lexicon = Lexicon::from_toml_str(content)?;
                if lexicon.code() != code {
                    return Err(NumeralError::Configuration(format!(
                        "Lexicon code mismatch: expected {code}, got {}",
                        lexicon.code()
                    )));
                }
                log::debug!(
                    "loaded embedded lexicon '{}' revision {}",
                    lexicon.code(),
                    lexicon.revision()
                );
                Ok(Arc::new(lexicon))
            })
            .clone()
    }

    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Lexicon> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| NumeralError::Configuration(format!("Failed to parse lexicon: {e}")))?;
        Lexicon::from_config(&config).map_err(NumeralError::Configuration)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NumeralError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Lexicon::from_toml_str(&content)
    }
}
