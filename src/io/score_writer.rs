use crate::evidential::{ClaimScore, ScoringConfig, ScoringMode};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ScoreReport<'a> {
    mode: ScoringMode,
    threshold: f64,
    items: &'a [ClaimScore],
}

/// A writer for claim scores, using JSON.
///
/// The output is a single JSON object with the scoring mode, the threshold and the `items` array of scores, followed by a new line.
#[derive(Default)]
pub struct ScoreWriter {
    pretty: bool,
}

impl ScoreWriter {
    /// Builds a writer producing pretty-printed JSON.
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }

    /// Writes the scores computed with the given parameters.
    pub fn write_scores(
        &self,
        writer: &mut dyn Write,
        config: &ScoringConfig,
        scores: &[ClaimScore],
    ) -> Result<()> {
        let context = "while writing scores";
        let report = ScoreReport {
            mode: config.mode,
            threshold: config.threshold,
            items: scores,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &report).context(context)?;
        } else {
            serde_json::to_writer(&mut *writer, &report).context(context)?;
        }
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidential::Explanation;

    #[test]
    fn test_write_scores() {
        let scores = vec![ClaimScore {
            id: "c".to_string(),
            text: None,
            score: 0.5,
            belief: None,
            plausibility: None,
            accepted: false,
            explanation: Some(Explanation::Leaf { prior: 0.5 }),
        }];
        let mut buffer = Vec::new();
        ScoreWriter::default()
            .write_scores(&mut buffer, &ScoringConfig::default(), &scores)
            .unwrap();
        assert_eq!(
            "{\"mode\":\"min\",\"threshold\":0.7,\"items\":[{\"id\":\"c\",\"score\":0.5,\"accepted\":false,\"explanation\":{\"kind\":\"leaf\",\"prior\":0.5}}]}\n",
            String::from_utf8(buffer).unwrap()
        );
    }

    #[test]
    fn test_write_pretty_scores() {
        let mut buffer = Vec::new();
        ScoreWriter::new_pretty()
            .write_scores(&mut buffer, &ScoringConfig::default(), &[])
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\n  \"items\": []"));
        assert!(output.ends_with("}\n"));
    }
}
