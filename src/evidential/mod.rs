//! Evidential scoring of claims, from the strength of the arguments supporting them.

pub mod combination;

mod config;
pub use config::ScoringConfig;
pub use config::ScoringMode;

mod evidence_graph;
pub use evidence_graph::ClaimNode;
pub use evidence_graph::EvidenceEdge;
pub use evidence_graph::EvidenceGraph;
pub use evidence_graph::EvidentialArgument;

mod explanation;
pub use explanation::ChainExplanation;
pub use explanation::Explanation;
pub use explanation::PremiseScore;

mod scorer;
pub use scorer::score_claims;
pub use scorer::ClaimScore;
pub use scorer::EvidentialScorer;
