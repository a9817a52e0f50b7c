//! Combination rules for premise scores and argument chains.
//!
//! All inputs are expected to be probabilities; all outputs are probabilities.

use serde::Serialize;

/// A belief/plausibility pair, as produced by the Dempster-Shafer combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeliefInterval {
    /// The mass committed to the claim
    pub belief: f64,
    /// The mass not committed against the claim
    pub plausibility: f64,
}

impl BeliefInterval {
    /// Discounts the interval by a rebuttal of the given strength.
    ///
    /// The rebuttal moves a share `strength` of the uncommitted mass against the claim, and the same share of the belief to ignorance.
    pub fn rebutted(&self, strength: f64) -> Self {
        Self {
            belief: clamp(self.belief * (1. - strength)),
            plausibility: clamp(1. - strength * (1. - self.belief)),
        }
    }
}

/// Returns the weakest premise score, or `None` if there is no premise.
pub fn weakest_link(premises: &[f64]) -> Option<f64> {
    premises.iter().copied().reduce(f64::min)
}

/// Returns the product of the premise scores, or `None` if there is no premise.
pub fn joint(premises: &[f64]) -> Option<f64> {
    premises.iter().copied().reduce(|a, b| a * b)
}

/// Returns the best chain score; `0` if there is no chain.
pub fn best_line(chains: &[f64]) -> f64 {
    chains.iter().copied().fold(0., f64::max)
}

/// Combines independent chains by a probabilistic union: `1 - ∏(1 - s)`.
///
/// # Example
///
/// ```
/// # use dialectica::evidential::combination::noisy_or;
/// assert!((noisy_or(&[0.5, 0.5]) - 0.75).abs() < 1e-9);
/// assert_eq!(0., noisy_or(&[]));
/// ```
pub fn noisy_or(chains: &[f64]) -> f64 {
    clamp(1. - chains.iter().fold(1., |acc, s| acc * (1. - s)))
}

/// Combines independent chains with Dempster's rule on the binary frame `{φ, ¬φ}`.
///
/// Each chain score `s` is a mass `m({φ}) = s`, `m(Θ) = 1 - s`; as no mass is put on `¬φ`, there is no conflict
/// and the plausibility stays at `1`.
pub fn ds_combine(chains: &[f64]) -> BeliefInterval {
    let mut belief = 0.;
    let mut ignorance = 1.;
    for s in chains {
        belief += ignorance * s;
        ignorance *= 1. - s;
    }
    BeliefInterval {
        belief: clamp(belief),
        plausibility: 1.,
    }
}

/// The strength of `n` independent attacks of strength `hedge` each: `1 - (1 - hedge)^n`.
pub fn hedged_strength(hedge: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.;
    }
    clamp(1. - (1. - hedge).powi(n as i32))
}

pub(crate) fn clamp(value: f64) -> f64 {
    value.clamp(0., 1.)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_premise_aggregates() {
        assert_eq!(Some(0.3), weakest_link(&[0.9, 0.3, 0.5]));
        assert_close(0.135, joint(&[0.9, 0.3, 0.5]).unwrap());
        assert_eq!(None, weakest_link(&[]));
        assert_eq!(None, joint(&[]));
    }

    #[test]
    fn test_joint_is_below_weakest_link() {
        let premises = [0.95, 0.2, 0.7, 1.0, 0.0001];
        for i in 1..=premises.len() {
            assert!(joint(&premises[..i]).unwrap() <= weakest_link(&premises[..i]).unwrap());
        }
    }

    #[test]
    fn test_chain_combination() {
        assert_close(0.8, best_line(&[0.3, 0.8, 0.5]));
        assert_eq!(0., best_line(&[]));
        assert_close(1. - 0.7 * 0.2 * 0.5, noisy_or(&[0.3, 0.8, 0.5]));
    }

    #[test]
    fn test_noisy_or_never_lowers() {
        let mut chains = vec![];
        let mut previous = 0.;
        for s in [0.2, 0.0, 0.9, 0.4] {
            chains.push(s);
            let current = noisy_or(&chains);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_ds_combine_matches_noisy_or() {
        let chains = [0.3, 0.8, 0.5];
        let interval = ds_combine(&chains);
        assert_close(noisy_or(&chains), interval.belief);
        assert_eq!(1., interval.plausibility);
        assert_eq!(0., ds_combine(&[]).belief);
    }

    #[test]
    fn test_rebutted_interval() {
        let interval = BeliefInterval {
            belief: 0.6,
            plausibility: 1.,
        }
        .rebutted(0.4);
        assert_close(0.36, interval.belief);
        assert_close(0.84, interval.plausibility);
        assert!(interval.belief <= interval.plausibility);
    }

    #[test]
    fn test_hedged_strength() {
        assert_eq!(0., hedged_strength(0.4, 0));
        assert_close(0.4, hedged_strength(0.4, 1));
        assert_close(0.64, hedged_strength(0.4, 2));
        assert!(hedged_strength(0.4, 3) > hedged_strength(0.4, 2));
    }
}
