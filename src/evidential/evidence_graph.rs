use crate::projection::RelationKind;
use serde::{Deserialize, Serialize};

/// A snapshot of the claims, arguments and edges of a deliberation, as consumed by the [`EvidentialScorer`](super::EvidentialScorer).
///
/// References to unknown claims or arguments are tolerated: the scorer ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceGraph {
    /// The claims
    #[serde(default)]
    pub claims: Vec<ClaimNode>,
    /// The arguments supporting claims
    #[serde(default)]
    pub arguments: Vec<EvidentialArgument>,
    /// The attack edges
    #[serde(default)]
    pub edges: Vec<EvidenceEdge>,
}

/// A claim of an [`EvidenceGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimNode {
    /// The claim identifier
    pub id: String,
    /// The claim text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The score of the claim when no argument supports it; the configured prior is used if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior: Option<f64>,
}

impl ClaimNode {
    /// Builds a claim with no text and the default prior.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: None,
            prior: None,
        }
    }
}

/// An argument of an [`EvidenceGraph`]: a set of premise claims supporting a conclusion claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidentialArgument {
    /// The argument identifier
    pub id: String,
    /// The identifier of the supported claim
    #[serde(default)]
    pub conclusion: Option<String>,
    /// The identifiers of the premise claims
    #[serde(default)]
    pub premises: Vec<String>,
    /// The base confidence of the argumentation scheme the argument instantiates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_base: Option<f64>,
    /// The number of critical questions of the scheme that are still unanswered
    #[serde(default)]
    pub unsatisfied_cqs: u32,
}

impl EvidentialArgument {
    /// Builds an argument with no scheme base and no unsatisfied critical question.
    pub fn new(id: &str, conclusion: &str, premises: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            conclusion: Some(conclusion.to_string()),
            premises: premises.iter().map(|p| p.to_string()).collect(),
            scheme_base: None,
            unsatisfied_cqs: 0,
        }
    }
}

/// An edge of an [`EvidenceGraph`].
///
/// Edges target either a claim (rebuttals) or an argument (undercuts); an `attack` edge may play both roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEdge {
    /// The identifier of the source argument, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// The kind of relation
    pub kind: RelationKind,
    /// The targeted claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_claim: Option<String>,
    /// The targeted argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_argument: Option<String>,
}

impl EvidenceEdge {
    /// Builds an edge targeting a claim.
    pub fn to_claim(kind: RelationKind, claim: &str) -> Self {
        Self {
            from: None,
            kind,
            target_claim: Some(claim.to_string()),
            target_argument: None,
        }
    }

    /// Builds an edge targeting an argument.
    pub fn to_argument(kind: RelationKind, argument: &str) -> Self {
        Self {
            from: None,
            kind,
            target_claim: None,
            target_argument: Some(argument.to_string()),
        }
    }

    /// Returns `true` iff this edge undercuts its target argument.
    pub fn is_undercut(&self) -> bool {
        self.target_argument.is_some()
            && matches!(self.kind, RelationKind::Undercut | RelationKind::Attack)
    }

    /// Returns `true` iff this edge rebuts its target claim.
    pub fn is_rebuttal(&self) -> bool {
        self.target_claim.is_some()
            && matches!(self.kind, RelationKind::Rebut | RelationKind::Attack)
    }
}
