//! Projection of typed deliberation graphs into abstract argumentation frameworks.

mod graph_projector;
pub use graph_projector::GraphProjector;
pub use graph_projector::Projection;
pub use graph_projector::ProjectionOptions;

mod relation_graph;
pub use relation_graph::Relation;
pub use relation_graph::RelationGraph;
pub use relation_graph::RelationKind;
