//! Core predicates of Dung semantics.
//!
//! Sets of arguments are given as slices of arguments; internally, they are handled as membership vectors indexed by argument ids.

use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};

pub(crate) fn membership<T>(af: &AAFramework<T>, set: &[&Argument<T>]) -> Vec<bool>
where
    T: LabelType,
{
    let mut in_set = vec![false; af.n_arguments()];
    set.iter().for_each(|a| in_set[a.id()] = true);
    in_set
}

pub(crate) fn members<'a, T>(af: &'a AAFramework<T>, in_set: &[bool]) -> Vec<&'a Argument<T>>
where
    T: LabelType,
{
    in_set
        .iter()
        .enumerate()
        .filter(|(_, b)| **b)
        .map(|(i, _)| af.argument_set().get_label_by_id(i))
        .collect()
}

pub(crate) fn is_conflict_free_in<T>(af: &AAFramework<T>, in_set: &[bool]) -> bool
where
    T: LabelType,
{
    af.iter_attacks()
        .all(|att| !in_set[att.attacker().id()] || !in_set[att.attacked().id()])
}

pub(crate) fn defends_in<T>(af: &AAFramework<T>, in_set: &[bool], arg_id: usize) -> bool
where
    T: LabelType,
{
    af.attacker_ids_of(arg_id)
        .iter()
        .all(|b| af.attacker_ids_of(*b).iter().any(|c| in_set[*c]))
}

pub(crate) fn characteristic_function_in<T>(af: &AAFramework<T>, in_set: &[bool]) -> Vec<bool>
where
    T: LabelType,
{
    (0..af.n_arguments())
        .map(|a| defends_in(af, in_set, a))
        .collect()
}

pub(crate) fn is_admissible_in<T>(af: &AAFramework<T>, in_set: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free_in(af, in_set)
        && in_set
            .iter()
            .enumerate()
            .all(|(a, b)| !*b || defends_in(af, in_set, a))
}

/// Returns `true` iff no argument of the set attacks an argument of the set.
///
/// # Example
///
/// ```
/// # use dialectica::aa::{AAFramework, ArgumentSet};
/// # use dialectica::solvers::is_conflict_free;
/// let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let a = af.get_argument(&"a").unwrap();
/// let b = af.get_argument(&"b").unwrap();
/// let c = af.get_argument(&"c").unwrap();
/// assert!(is_conflict_free(&af, &[a, c]));
/// assert!(!is_conflict_free(&af, &[a, b]));
/// ```
pub fn is_conflict_free<T>(af: &AAFramework<T>, set: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_conflict_free_in(af, &membership(af, set))
}

/// Returns `true` iff each attacker of `arg` is attacked by a member of `set`.
///
/// An argument with no attacker is defended by any set, including the empty one.
pub fn defends<T>(af: &AAFramework<T>, set: &[&Argument<T>], arg: &Argument<T>) -> bool
where
    T: LabelType,
{
    defends_in(af, &membership(af, set), arg.id())
}

/// Computes the characteristic function of the framework: the arguments defended by `set`.
///
/// This function is monotone with respect to set inclusion.
pub fn characteristic_function<'a, T>(
    af: &'a AAFramework<T>,
    set: &[&Argument<T>],
) -> Vec<&'a Argument<T>>
where
    T: LabelType,
{
    members(af, &characteristic_function_in(af, &membership(af, set)))
}

/// Returns `true` iff the set is conflict-free and defends all its members.
pub fn is_admissible<T>(af: &AAFramework<T>, set: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_admissible_in(af, &membership(af, set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn chain_af() -> AAFramework<&'static str> {
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af
    }

    fn args<'a>(af: &'a AAFramework<&'static str>, labels: &[&'static str]) -> Vec<&'a Argument<&'static str>> {
        labels.iter().map(|l| af.get_argument(l).unwrap()).collect()
    }

    #[test]
    fn test_defends_unattacked() {
        let af = chain_af();
        assert!(defends(&af, &[], af.get_argument(&"a").unwrap()));
        assert!(!defends(&af, &[], af.get_argument(&"c").unwrap()));
        assert!(defends(&af, &args(&af, &["a"]), af.get_argument(&"c").unwrap()));
    }

    #[test]
    fn test_characteristic_function() {
        let af = chain_af();
        let labels = |v: Vec<&Argument<&'static str>>| v.iter().map(|a| *a.label()).collect::<Vec<_>>();
        assert_eq!(vec!["a"], labels(characteristic_function(&af, &[])));
        assert_eq!(
            vec!["a", "c"],
            labels(characteristic_function(&af, &args(&af, &["a"])))
        );
    }

    #[test]
    fn test_admissibility() {
        let af = chain_af();
        assert!(is_admissible(&af, &[]));
        assert!(is_admissible(&af, &args(&af, &["a"])));
        assert!(is_admissible(&af, &args(&af, &["a", "c"])));
        assert!(!is_admissible(&af, &args(&af, &["c"])));
        assert!(!is_admissible(&af, &args(&af, &["a", "b"])));
    }

    #[test]
    fn test_self_attacking_argument_is_never_admissible() {
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a"]));
        af.new_attack(&"a", &"a").unwrap();
        assert!(!is_conflict_free(&af, &args(&af, &["a"])));
        assert!(!is_admissible(&af, &args(&af, &["a"])));
    }
}
