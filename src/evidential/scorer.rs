use super::{
    combination::{self, BeliefInterval},
    ChainExplanation, ClaimNode, EvidenceGraph, Explanation, PremiseScore, ScoringConfig,
    ScoringMode,
};
use crate::utils::LabelSet;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The score of a claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimScore {
    /// The claim identifier
    pub id: String,
    /// The claim text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The score, in `[0,1]`
    pub score: f64,
    /// The belief (DS mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub belief: Option<f64>,
    /// The plausibility (DS mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plausibility: Option<f64>,
    /// Whether the score (the belief in DS mode) reaches the threshold
    pub accepted: bool,
    /// How the score was obtained, if explanations were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
}

#[derive(Debug, Clone)]
struct Support {
    score: f64,
    interval: Option<BeliefInterval>,
    explanation: Option<Explanation>,
}

#[derive(Debug)]
enum VisitState {
    Unvisited,
    InProgress,
    Done(Support),
}

/// Computes the evidential support of the claims of an [`EvidenceGraph`].
///
/// The support of a claim is computed recursively from the support of the premises of its arguments.
/// Results are memoised for the lifetime of the scorer; claims met again while their own support is being computed
/// (support cycles) get the neutral prior, and this temporary value is not memoised.
///
/// References to unknown claims or arguments are silently ignored.
///
/// # Example
///
/// ```
/// # use dialectica::evidential::{ClaimNode, EvidenceEdge, EvidenceGraph, EvidentialArgument, EvidentialScorer, ScoringConfig};
/// # use dialectica::projection::RelationKind;
/// let graph = EvidenceGraph {
///     claims: vec![
///         ClaimNode::new("c"),
///         ClaimNode {
///             prior: Some(0.8),
///             ..ClaimNode::new("p")
///         },
///     ],
///     arguments: vec![EvidentialArgument::new("a", "c", &["p"])],
///     edges: vec![EvidenceEdge::to_argument(RelationKind::Undercut, "a")],
/// };
/// let mut scorer = EvidentialScorer::new(&graph, ScoringConfig::default());
/// let scores = scorer.score_all();
/// assert!((scores[0].score - 0.48).abs() < 1e-9);
/// assert!(!scores[0].accepted);
/// ```
pub struct EvidentialScorer<'a> {
    config: ScoringConfig,
    claims: LabelSet<String>,
    claim_nodes: Vec<&'a ClaimNode>,
    arguments_by_conclusion: Vec<Vec<usize>>,
    arguments: Vec<ArgumentData<'a>>,
    rebut_counts: Vec<usize>,
    states: Vec<VisitState>,
}

struct ArgumentData<'a> {
    id: &'a str,
    premises: Vec<usize>,
    scheme_base: f64,
    unsatisfied_cqs: u32,
    undercut_count: usize,
}

impl<'a> EvidentialScorer<'a> {
    /// Builds a scorer for the given graph and parameters.
    pub fn new(graph: &'a EvidenceGraph, config: ScoringConfig) -> Self {
        let claim_labels = graph
            .claims
            .iter()
            .map(|c| c.id.clone())
            .collect::<Vec<String>>();
        let claims = LabelSet::new_with_labels(&claim_labels);
        let mut claim_nodes = Vec::with_capacity(claims.len());
        for c in graph.claims.iter() {
            if claims.get_label_id(&c.id) == Some(claim_nodes.len()) {
                claim_nodes.push(c);
            }
        }
        let mut undercut_counts: HashMap<&str, usize> = HashMap::new();
        let mut rebut_counts = vec![0; claims.len()];
        for e in graph.edges.iter() {
            if e.is_undercut() {
                if let Some(target) = &e.target_argument {
                    *undercut_counts.entry(target.as_str()).or_default() += 1;
                }
            }
            if e.is_rebuttal() {
                if let Some(id) = e.target_claim.as_ref().and_then(|t| claims.get_label_id(t)) {
                    rebut_counts[id] += 1;
                }
            }
        }
        let mut arguments_by_conclusion = vec![vec![]; claims.len()];
        let mut arguments = vec![];
        for a in graph.arguments.iter() {
            let conclusion = match a.conclusion.as_ref().and_then(|c| claims.get_label_id(c)) {
                Some(c) => c,
                None => continue,
            };
            arguments_by_conclusion[conclusion].push(arguments.len());
            arguments.push(ArgumentData {
                id: &a.id,
                premises: a
                    .premises
                    .iter()
                    .filter_map(|p| claims.get_label_id(p))
                    .collect(),
                scheme_base: a.scheme_base.unwrap_or(config.default_scheme_base),
                unsatisfied_cqs: a.unsatisfied_cqs,
                undercut_count: undercut_counts.get(a.id.as_str()).copied().unwrap_or(0),
            });
        }
        let states = (0..claims.len()).map(|_| VisitState::Unvisited).collect();
        Self {
            config,
            claims,
            claim_nodes,
            arguments_by_conclusion,
            arguments,
            rebut_counts,
            states,
        }
    }

    /// Returns the parameters of this scorer.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores all the claims of the graph, in the order they are given.
    ///
    /// Claims with the same identifier are only scored once.
    pub fn score_all(&mut self) -> Vec<ClaimScore> {
        (0..self.claims.len()).map(|c| self.claim_score(c)).collect()
    }

    /// Scores the claims of the graph whose identifiers are given, in the order of the graph.
    ///
    /// Unknown identifiers are ignored. The other claims are still used to compute the support of the requested ones.
    pub fn score_claims(&mut self, ids: &[String]) -> Vec<ClaimScore> {
        let requested = ids
            .iter()
            .filter_map(|id| self.claims.get_label_id(id))
            .collect::<HashSet<usize>>();
        (0..self.claims.len())
            .filter(|c| requested.contains(c))
            .map(|c| self.claim_score(c))
            .collect()
    }

    fn claim_score(&mut self, claim: usize) -> ClaimScore {
        let support = self.support_claim(claim);
        let node = self.claim_nodes[claim];
        let decisive = support.interval.map(|i| i.belief).unwrap_or(support.score);
        ClaimScore {
            id: node.id.clone(),
            text: node.text.clone(),
            score: support.score,
            belief: support.interval.map(|i| i.belief),
            plausibility: support.interval.map(|i| i.plausibility),
            accepted: decisive >= self.config.threshold,
            explanation: support.explanation,
        }
    }

    fn support_claim(&mut self, claim: usize) -> Support {
        match &self.states[claim] {
            VisitState::Done(support) => return support.clone(),
            VisitState::InProgress => return self.prior_support(self.config.prior, true),
            VisitState::Unvisited => {}
        }
        self.states[claim] = VisitState::InProgress;
        let support = self.compute_support(claim);
        self.states[claim] = VisitState::Done(support.clone());
        support
    }

    fn prior_support(&self, prior: f64, cycle: bool) -> Support {
        Support {
            score: prior,
            interval: self.is_ds().then(|| BeliefInterval {
                belief: prior,
                plausibility: 1.,
            }),
            explanation: self.config.explain.then(|| {
                if cycle {
                    Explanation::Cycle { prior }
                } else {
                    Explanation::Leaf { prior }
                }
            }),
        }
    }

    fn compute_support(&mut self, claim: usize) -> Support {
        let supporters = self.arguments_by_conclusion[claim].clone();
        if supporters.is_empty() {
            let prior = self.claim_nodes[claim]
                .prior
                .map(combination::clamp)
                .unwrap_or(self.config.prior);
            return self.prior_support(prior, false);
        }
        let mut chains = Vec::with_capacity(supporters.len());
        let mut lines = vec![];
        for a in supporters {
            let premises = self.arguments[a].premises.clone();
            let premise_scores = premises
                .iter()
                .map(|p| self.support_claim(*p).score)
                .collect::<Vec<f64>>();
            let aggregate = match self.config.mode {
                ScoringMode::Prod => combination::joint(&premise_scores),
                ScoringMode::Min | ScoringMode::Ds => combination::weakest_link(&premise_scores),
            }
            .unwrap_or(self.config.prior);
            let argument = &self.arguments[a];
            let cq_penalty = self.config.cq_penalty.powi(argument.unsatisfied_cqs as i32);
            let defeat =
                combination::hedged_strength(self.config.undercut_hedge, argument.undercut_count);
            let chain = combination::clamp(argument.scheme_base * aggregate * cq_penalty * (1. - defeat));
            chains.push(chain);
            if self.config.explain {
                lines.push(ChainExplanation {
                    argument_id: argument.id.to_string(),
                    scheme_base: argument.scheme_base,
                    premises: premises
                        .iter()
                        .zip(premise_scores.iter())
                        .map(|(p, s)| PremiseScore {
                            id: self.claims.get_label_by_id(*p).label().clone(),
                            score: *s,
                        })
                        .collect(),
                    unsatisfied_cqs: argument.unsatisfied_cqs,
                    cq_penalty,
                    undercut_count: argument.undercut_count,
                    defeat,
                    chain,
                });
            }
        }
        let (mut score, mut interval) = match self.config.mode {
            ScoringMode::Min => (combination::best_line(&chains), None),
            ScoringMode::Prod => (combination::noisy_or(&chains), None),
            ScoringMode::Ds => {
                let interval = combination::ds_combine(&chains);
                (interval.belief, Some(interval))
            }
        };
        let rebut_count = self.rebut_counts[claim];
        let pre_rebut = if rebut_count > 0 {
            let counter = combination::hedged_strength(self.config.rebut_hedge, rebut_count);
            let pre_rebut = score;
            score = combination::clamp(score * (1. - counter));
            interval = interval.map(|i| i.rebutted(counter));
            Some(pre_rebut)
        } else {
            None
        };
        Support {
            score,
            interval,
            explanation: self.config.explain.then(|| Explanation::Lines {
                lines,
                rebut_count,
                pre_rebut,
            }),
        }
    }

    fn is_ds(&self) -> bool {
        self.config.mode == ScoringMode::Ds
    }
}

/// Scores all the claims of a graph.
///
/// See [EvidentialScorer] for more information.
pub fn score_claims(graph: &EvidenceGraph, config: ScoringConfig) -> Vec<ClaimScore> {
    EvidentialScorer::new(graph, config).score_all()
}
