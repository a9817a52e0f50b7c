use serde::Serialize;

/// The way the score of a claim was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    /// No argument supports the claim: its score is its prior
    Leaf {
        /// The prior
        prior: f64,
    },
    /// The claim was met again while computing its own support: the neutral prior was used
    Cycle {
        /// The prior
        prior: f64,
    },
    /// The claim is supported by one or more arguments
    Lines {
        /// One entry per supporting argument
        lines: Vec<ChainExplanation>,
        /// The number of rebuttals of the claim
        rebut_count: usize,
        /// The score before the rebuttals were applied, if there were any
        #[serde(skip_serializing_if = "Option::is_none")]
        pre_rebut: Option<f64>,
    },
}

/// How the chain score of a single supporting argument was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainExplanation {
    /// The argument identifier
    pub argument_id: String,
    /// The scheme base confidence that was used
    pub scheme_base: f64,
    /// The known premises and their scores
    pub premises: Vec<PremiseScore>,
    /// The number of unsatisfied critical questions
    pub unsatisfied_cqs: u32,
    /// The factor due to the unsatisfied critical questions
    pub cq_penalty: f64,
    /// The number of undercuts of the argument
    pub undercut_count: usize,
    /// The defeat strength of these undercuts
    pub defeat: f64,
    /// The resulting chain score
    pub chain: f64,
}

/// A premise identifier and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiseScore {
    /// The premise claim identifier
    pub id: String,
    /// The score of the premise
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_leaf() {
        assert_eq!(
            r#"{"kind":"leaf","prior":0.5}"#,
            serde_json::to_string(&Explanation::Leaf { prior: 0.5 }).unwrap()
        );
    }

    #[test]
    fn test_serialize_lines_without_rebut() {
        let explanation = Explanation::Lines {
            lines: vec![],
            rebut_count: 0,
            pre_rebut: None,
        };
        assert_eq!(
            r#"{"kind":"lines","lines":[],"rebut_count":0}"#,
            serde_json::to_string(&explanation).unwrap()
        );
    }
}
