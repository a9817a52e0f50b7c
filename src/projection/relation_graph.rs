use crate::utils::{Label, LabelSet, LabelType};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The kind of a typed relation between two nodes of a deliberation graph.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// The source supports the target
    Support,
    /// The source attacks the conclusion of the target
    Rebut,
    /// The source attacks the inferential link of the target
    Undercut,
    /// An untyped attack
    Attack,
}

impl RelationKind {
    /// Returns `true` iff the relation is an attacking one, i.e. if it must be projected to an attack of an AF.
    pub fn is_attacking(&self) -> bool {
        match self {
            RelationKind::Support => false,
            RelationKind::Rebut | RelationKind::Undercut | RelationKind::Attack => true,
        }
    }
}

/// A typed relation given by the ids of its source and target nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    from: usize,
    to: usize,
    kind: RelationKind,
}

impl Relation {
    /// Returns the id of the source node.
    pub fn source(&self) -> usize {
        self.from
    }

    /// Returns the id of the target node.
    pub fn target(&self) -> usize {
        self.to
    }

    /// Returns the kind of the relation.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }
}

/// A snapshot of a deliberation graph: a set of nodes (arguments or claims) connected by typed relations.
///
/// Parallel relations between the same pair of nodes are kept.
#[derive(Debug, Default)]
pub struct RelationGraph<T>
where
    T: LabelType,
{
    nodes: LabelSet<T>,
    relations: Vec<Relation>,
}

impl<T> RelationGraph<T>
where
    T: LabelType,
{
    /// Builds a graph with no relation given its node labels.
    pub fn new(nodes: LabelSet<T>) -> Self {
        Self {
            nodes,
            relations: vec![],
        }
    }

    /// Adds a new relation given the labels of its source and target nodes.
    ///
    /// If one of the labels is undefined, an error is returned and the graph is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::projection::{RelationGraph, RelationKind};
    /// # use dialectica::utils::LabelSet;
    /// let mut graph = RelationGraph::new(LabelSet::new_with_labels(&["a", "b"]));
    /// graph.new_relation(&"a", &"b", RelationKind::Undercut).unwrap();
    /// assert!(graph.new_relation(&"a", &"c", RelationKind::Support).is_err());
    /// assert_eq!(1, graph.n_relations());
    /// ```
    pub fn new_relation(&mut self, from: &T, to: &T, kind: RelationKind) -> Result<()> {
        let context = || format!("cannot add a {} relation from {:?} to {:?}", kind, from, to);
        let from = self.nodes.get_label(from).with_context(context)?.id();
        let to = self.nodes.get_label(to).with_context(context)?.id();
        self.relations.push(Relation { from, to, kind });
        Ok(())
    }

    /// Adds a new relation if both its ends are defined, and returns `true` in this case.
    ///
    /// Relations referencing unknown nodes are silently dropped.
    pub fn try_new_relation(&mut self, from: &T, to: &T, kind: RelationKind) -> bool {
        match (self.nodes.get_label_id(from), self.nodes.get_label_id(to)) {
            (Some(from), Some(to)) => {
                self.relations.push(Relation { from, to, kind });
                true
            }
            _ => false,
        }
    }

    /// Returns the node set of the graph.
    pub fn node_set(&self) -> &LabelSet<T> {
        &self.nodes
    }

    /// Returns the node with the given id.
    pub fn node_by_id(&self, id: usize) -> &Label<T> {
        self.nodes.get_label_by_id(id)
    }

    /// Iterates over the relations, in insertion order.
    pub fn iter_relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter()
    }

    /// Returns the number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of relations.
    pub fn n_relations(&self) -> usize {
        self.relations.len()
    }
}
