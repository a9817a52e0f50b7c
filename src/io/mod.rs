//! Objects used to read deliberation graphs and evidence snapshots, and to write frameworks, answers and scores.

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod evidence_reader;
pub use evidence_reader::EvidenceReader;

mod relation_graph_reader;
pub use relation_graph_reader::RelationGraphReader;

mod score_writer;
pub use score_writer::ScoreWriter;

mod specs;
pub use specs::GraphReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod warning_result;
pub use warning_result::WarningResult;
