//! JSON output formatter

use super::{NormalizedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<NormalizedDocument>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbnorm_engine::{PassId, PassTrace};

    #[test]
    fn test_compact_array() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out, false);
        formatter
            .format_document(&NormalizedDocument {
                source: "a.txt".to_string(),
                text: "fënnef".to_string(),
                trace: None,
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"source\":\"a.txt\",\"text\":\"fënnef\"}]\n"
        );
    }

    #[test]
    fn test_trace_is_included() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out, true);
        formatter
            .format_document(&NormalizedDocument {
                source: "-".to_string(),
                text: "fënnef".to_string(),
                trace: Some(vec![PassTrace {
                    pass: PassId::BareNumber,
                    output: "fënnef".to_string(),
                    changed: true,
                }]),
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["trace"][0]["pass"], "bare-number");
        assert_eq!(value[0]["trace"][0]["changed"], true);
    }

    #[test]
    fn test_empty_input_is_an_empty_array() {
        let mut out = Vec::new();
        JsonFormatter::new(&mut out, false).finish().unwrap();
        assert_eq!(out, b"[]\n");
    }
}
