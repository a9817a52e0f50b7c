use anyhow::{anyhow, Result};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The way premise scores and argument chains are combined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Weakest-link premises, best single chain
    #[strum(serialize = "min")]
    Min,
    /// Joint premises, noisy-OR over chains
    #[strum(to_string = "prod", serialize = "product")]
    Prod,
    /// Weakest-link premises, binary Dempster-Shafer combination over chains
    #[strum(serialize = "ds")]
    Ds,
}

impl Default for ScoringMode {
    fn default() -> Self {
        ScoringMode::Min
    }
}

/// The parameters of the [`EvidentialScorer`](super::EvidentialScorer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// The combination mode
    pub mode: ScoringMode,
    /// The score (belief in DS mode) from which a claim is accepted
    pub threshold: f64,
    /// The score of claims no argument supports, and of claims met again along a support cycle
    pub prior: f64,
    /// The strength of a single undercut when the undercutter strength is unresolved
    pub undercut_hedge: f64,
    /// The strength of a single rebuttal when the rebutter strength is unresolved
    pub rebut_hedge: f64,
    /// The factor applied to a chain for each unsatisfied critical question
    pub cq_penalty: f64,
    /// The scheme base confidence of arguments that do not give their own
    pub default_scheme_base: f64,
    /// Whether to build explanations
    pub explain: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            threshold: 0.7,
            prior: 0.5,
            undercut_hedge: 0.4,
            rebut_hedge: 0.4,
            cq_penalty: 0.85,
            default_scheme_base: 1.0,
            explain: false,
        }
    }
}

impl ScoringConfig {
    /// Checks that all the numeric parameters are probabilities.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::evidential::ScoringConfig;
    /// assert!(ScoringConfig::default().validate().is_ok());
    /// let config = ScoringConfig {
    ///     threshold: 1.5,
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        [
            ("threshold", self.threshold),
            ("prior", self.prior),
            ("undercut hedge", self.undercut_hedge),
            ("rebut hedge", self.rebut_hedge),
            ("critical question penalty", self.cq_penalty),
            ("default scheme base", self.default_scheme_base),
        ]
        .iter()
        .try_for_each(|(name, value)| {
            if (0.0..=1.0).contains(value) {
                Ok(())
            } else {
                Err(anyhow!("{} must be in [0,1], got {}", name, value))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ScoringMode::Min, ScoringMode::from_str("min").unwrap());
        assert_eq!(ScoringMode::Prod, ScoringMode::from_str("prod").unwrap());
        assert_eq!(ScoringMode::Prod, ScoringMode::from_str("product").unwrap());
        assert_eq!(ScoringMode::Ds, ScoringMode::from_str("DS").unwrap());
        assert!(ScoringMode::from_str("max").is_err());
    }

    #[test]
    fn test_mode_to_string() {
        assert_eq!("min", ScoringMode::Min.as_ref());
        assert_eq!("prod", ScoringMode::Prod.to_string());
        assert_eq!("\"ds\"", serde_json::to_string(&ScoringMode::Ds).unwrap());
    }

    #[test]
    fn test_validate() {
        assert!(ScoringConfig {
            rebut_hedge: -0.1,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(ScoringConfig {
            threshold: f64::NAN,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(ScoringConfig {
            threshold: 1.0,
            prior: 0.0,
            ..Default::default()
        }
        .validate()
        .is_ok());
    }
}
