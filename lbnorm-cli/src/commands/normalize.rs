//! Normalize command implementation

use crate::config::{CliConfig, NormalizeConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, NormalizedDocument, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use lbnorm_engine::Normalizer;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files or patterns (supports glob); standard input when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Record the text after every pass (implies JSON output)
    #[arg(long)]
    pub trace: bool,

    /// Only spell grouped numbers, units and suffixed years
    #[arg(long, conflicts_with = "trace")]
    pub units_only: bool,

    /// Switch a pass off; repeatable ("time", "bare-number", ...)
    #[arg(short, long = "skip", value_name = "PASS")]
    pub skip: Vec<String>,

    /// Custom lexicon file
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Custom rule table file
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LBNORM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Normalized text only
    Text,
    /// JSON array with one object per input
    Json,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let normalizer = self.build_normalizer(&config.normalize)?;
        log::info!("Passes: {:?}", normalizer.passes());

        let documents = self.run(&normalizer)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.effective_format() {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };
        for document in &documents {
            formatter.format_document(document)?;
        }
        formatter.finish()
    }

    /// Output format after `--trace` is taken into account
    pub fn effective_format(&self) -> OutputFormat {
        if self.trace {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Build the normalizer; flags win over the configuration file and
    /// skipped passes from both are combined
    pub fn build_normalizer(&self, config: &NormalizeConfig) -> Result<Normalizer> {
        let mut builder = Normalizer::builder().currency_options(config.currency_options());
        if let Some(path) = self.lexicon.as_ref().or(config.lexicon.as_ref()) {
            builder = builder.lexicon_file(path);
        }
        if let Some(path) = self.rules.as_ref().or(config.rules.as_ref()) {
            builder = builder.rules_file(path);
        }
        for name in config.skip_passes.iter().chain(&self.skip) {
            builder = builder.disable_named(name.as_str());
        }
        Ok(builder.build()?)
    }

    /// Normalize every input; files are processed in parallel and returned
    /// in sorted path order
    pub fn run(&self, normalizer: &Normalizer) -> Result<Vec<NormalizedDocument>> {
        if self.input.is_empty() {
            let text = FileReader::read_stdin()?;
            return Ok(vec![self.process(normalizer, "-".to_string(), &text)]);
        }

        let files = resolve_patterns(&self.input)?;
        files
            .par_iter()
            .map(|path| -> Result<NormalizedDocument> {
                let text = FileReader::read_text(path)?;
                Ok(self.process(normalizer, path.display().to_string(), &text))
            })
            .collect()
    }

    fn process(&self, normalizer: &Normalizer, source: String, text: &str) -> NormalizedDocument {
        if self.units_only {
            return NormalizedDocument {
                source,
                text: normalizer.to_unit(text),
                trace: None,
            };
        }
        if self.trace {
            let steps = normalizer.trace(text);
            let text = steps
                .last()
                .map_or_else(|| text.to_string(), |step| step.output.clone());
            return NormalizedDocument {
                source,
                text,
                trace: Some(steps),
            };
        }
        NormalizedDocument {
            source,
            text: normalizer.normalize(text),
            trace: None,
        }
    }
}
