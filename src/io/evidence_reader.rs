use super::WarningHandler;
use crate::evidential::EvidenceGraph;
use anyhow::{Context, Result};
use std::{collections::HashSet, io::Read};

/// A reader for evidence snapshots, encoded in JSON.
///
/// The snapshot is an object with the `claims`, `arguments` and `edges` arrays of an [`EvidenceGraph`].
/// References to unknown claims or arguments are kept in the graph (the scorer ignores them),
/// but a warning is raised for each of them; the number given to the warning handlers is the position (starting at 1) of the faulty item in its array.
///
/// # Example
///
/// ```
/// # use dialectica::io::EvidenceReader;
/// let json = r#"{"claims": [{"id": "c"}], "arguments": [{"id": "a", "conclusion": "c", "premises": ["p"]}]}"#;
/// let graph = EvidenceReader::default().read(&mut json.as_bytes()).unwrap();
/// assert_eq!(1, graph.arguments.len());
/// ```
#[derive(Default)]
pub struct EvidenceReader {
    warning_handlers: Vec<WarningHandler>,
}

impl EvidenceReader {
    /// Reads an evidence snapshot.
    pub fn read(&self, reader: &mut dyn Read) -> Result<EvidenceGraph> {
        let graph: EvidenceGraph =
            serde_json::from_reader(reader).context("while reading an evidence snapshot")?;
        self.check_references(&graph);
        Ok(graph)
    }

    /// Adds a callback function to call when warnings are raised while reading a snapshot.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }

    fn warn(&self, item: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(item, message.clone()));
    }

    fn check_references(&self, graph: &EvidenceGraph) {
        let claims = graph
            .claims
            .iter()
            .map(|c| c.id.as_str())
            .collect::<HashSet<&str>>();
        let arguments = graph
            .arguments
            .iter()
            .map(|a| a.id.as_str())
            .collect::<HashSet<&str>>();
        for (i, a) in graph.arguments.iter().enumerate() {
            match &a.conclusion {
                Some(c) if !claims.contains(c.as_str()) => self.warn(
                    1 + i,
                    format!("argument {} concludes unknown claim {}; ignored", a.id, c),
                ),
                None => self.warn(1 + i, format!("argument {} has no conclusion; ignored", a.id)),
                _ => {}
            }
            a.premises
                .iter()
                .filter(|p| !claims.contains(p.as_str()))
                .for_each(|p| {
                    self.warn(
                        1 + i,
                        format!("argument {} has unknown premise {}; ignored", a.id, p),
                    )
                });
        }
        for (i, e) in graph.edges.iter().enumerate() {
            if let Some(c) = e.target_claim.as_ref().filter(|c| !claims.contains(c.as_str())) {
                self.warn(1 + i, format!("{} edge targets unknown claim {}", e.kind, c));
            }
            if let Some(a) = e
                .target_argument
                .as_ref()
                .filter(|a| !arguments.contains(a.as_str()))
            {
                self.warn(1 + i, format!("{} edge targets unknown argument {}", e.kind, a));
            }
        }
    }
}
