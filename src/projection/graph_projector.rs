use super::{RelationGraph, RelationKind};
use crate::{
    aa::{AAFramework, ArgumentSet},
    utils::LabelType,
};
use std::collections::{HashSet, VecDeque};

/// The options of a [`GraphProjector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Derive an attack `s -> x` for each attack `x -> b` and each supporter `s` of `b`
    pub support_defense_propagation: bool,
    /// Consider transitive supporters (through chains of support relations) instead of direct ones
    pub support_closure: bool,
    /// Merge parallel attacks between the same pair of arguments
    pub deduplicate_attacks: bool,
}

/// The result of a projection: the AF and some counters about how it was built.
#[derive(Debug)]
pub struct Projection<T>
where
    T: LabelType,
{
    framework: AAFramework<T>,
    n_derived_attacks: usize,
    n_filtered_self_attacks: usize,
}

impl<T> Projection<T>
where
    T: LabelType,
{
    /// Returns the projected framework.
    pub fn framework(&self) -> &AAFramework<T> {
        &self.framework
    }

    /// Consumes the projection and returns the projected framework.
    pub fn into_framework(self) -> AAFramework<T> {
        self.framework
    }

    /// Returns the number of attacks that were added by defense propagation.
    pub fn n_derived_attacks(&self) -> usize {
        self.n_derived_attacks
    }

    /// Returns the number of self-attacks that were removed.
    pub fn n_filtered_self_attacks(&self) -> usize {
        self.n_filtered_self_attacks
    }
}

/// Converts a typed relation graph into an [`AAFramework`].
///
/// Every `rebut`, `undercut` and `attack` relation becomes an attack; support relations never become attacks directly,
/// but may produce derived attacks when support defense propagation is enabled.
///
/// Defense propagation is a single sweep over the attacks that come from the graph:
/// derived attacks are not themselves propagated.
/// When the support closure is enabled, the transitive supporters of every node are computed before the sweep.
/// A node is never considered as one of its own supporters.
///
/// Self-attacks are removed from the resulting framework, whatever their origin.
///
/// # Example
///
/// ```
/// # use dialectica::projection::{GraphProjector, ProjectionOptions, RelationKind};
/// let projector = GraphProjector::new(ProjectionOptions {
///     support_defense_propagation: true,
///     ..Default::default()
/// });
/// let projection = projector.project_labels(
///     &["x", "b", "s"],
///     &[
///         ("x", "b", RelationKind::Rebut),
///         ("s", "b", RelationKind::Support),
///         ("x", "unknown", RelationKind::Attack),
///     ],
/// );
/// let af = projection.framework();
/// assert_eq!(2, af.n_attacks());
/// assert_eq!(1, projection.n_derived_attacks());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphProjector {
    options: ProjectionOptions,
}

impl GraphProjector {
    /// Builds a new projector with the given options.
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    /// Returns the options of this projector.
    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Projects a graph given as a list of node labels and a list of typed edges.
    ///
    /// Duplicate node labels are merged and edges referencing unknown labels are silently dropped.
    pub fn project_labels<T>(&self, nodes: &[T], edges: &[(T, T, RelationKind)]) -> Projection<T>
    where
        T: LabelType,
    {
        let mut graph = RelationGraph::new(ArgumentSet::new_with_labels(nodes));
        for (from, to, kind) in edges {
            graph.try_new_relation(from, to, *kind);
        }
        self.project(&graph)
    }

    /// Projects a relation graph.
    pub fn project<T>(&self, graph: &RelationGraph<T>) -> Projection<T>
    where
        T: LabelType,
    {
        let base_attacks = graph
            .iter_relations()
            .filter(|r| r.kind().is_attacking())
            .map(|r| (r.source(), r.target()))
            .collect::<Vec<(usize, usize)>>();
        let derived_attacks = if self.options.support_defense_propagation {
            let supporters = self.compute_supporters(graph);
            propagate_defense(&base_attacks, &supporters)
        } else {
            vec![]
        };
        let n_derived_attacks = derived_attacks.len();
        let mut framework = AAFramework::new(clone_node_set(graph));
        let mut n_filtered_self_attacks = 0;
        let mut seen = HashSet::new();
        for (from, to) in base_attacks.into_iter().chain(derived_attacks) {
            if from == to {
                n_filtered_self_attacks += 1;
                continue;
            }
            if self.options.deduplicate_attacks && !seen.insert((from, to)) {
                continue;
            }
            // ids come from the same node set, so this cannot fail
            let _ = framework.new_attack_by_ids(from, to);
        }
        Projection {
            framework,
            n_derived_attacks,
            n_filtered_self_attacks,
        }
    }

    fn compute_supporters<T>(&self, graph: &RelationGraph<T>) -> Vec<Vec<usize>>
    where
        T: LabelType,
    {
        let n = graph.n_nodes();
        let mut direct = vec![vec![]; n];
        for r in graph.iter_relations() {
            if r.kind() == RelationKind::Support
                && r.source() != r.target()
                && !direct[r.target()].contains(&r.source())
            {
                direct[r.target()].push(r.source());
            }
        }
        if !self.options.support_closure {
            return direct;
        }
        (0..n)
            .map(|target| transitive_supporters(&direct, target))
            .collect()
    }
}

fn clone_node_set<T>(graph: &RelationGraph<T>) -> ArgumentSet<T>
where
    T: LabelType,
{
    let labels = graph
        .node_set()
        .iter()
        .map(|l| l.label().clone())
        .collect::<Vec<T>>();
    ArgumentSet::new_with_labels(&labels)
}

// Breadth-first search over the reversed support relations, starting from the target.
fn transitive_supporters(direct: &[Vec<usize>], target: usize) -> Vec<usize> {
    let mut visited = vec![false; direct.len()];
    visited[target] = true;
    let mut queue = VecDeque::from([target]);
    let mut supporters = vec![];
    while let Some(node) = queue.pop_front() {
        for s in direct[node].iter() {
            if !visited[*s] {
                visited[*s] = true;
                supporters.push(*s);
                queue.push_back(*s);
            }
        }
    }
    supporters
}

// Derived attacks are computed against the attacks given as input only; they are returned without duplicates
// and without the attacks that already belong to the input.
fn propagate_defense(attacks: &[(usize, usize)], supporters: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let existing = attacks.iter().copied().collect::<HashSet<(usize, usize)>>();
    let mut derived_set = HashSet::new();
    let mut derived = vec![];
    for (attacker, attacked) in attacks {
        for s in supporters[*attacked].iter() {
            let att = (*s, *attacker);
            if !existing.contains(&att) && derived_set.insert(att) {
                derived.push(att);
            }
        }
    }
    derived
}
