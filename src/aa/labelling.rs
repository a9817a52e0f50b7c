use super::{AAFramework, Argument};
use crate::utils::LabelType;
use strum_macros::{AsRefStr, Display, EnumIter};

/// The status given to an argument by a [`Labelling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ArgumentStatus {
    /// The argument belongs to the extension the labelling was derived from
    #[strum(serialize = "IN")]
    In,
    /// The argument is attacked by an argument labelled [`ArgumentStatus::In`]
    #[strum(serialize = "OUT")]
    Out,
    /// Neither in nor out
    #[strum(serialize = "UNDEC")]
    Undec,
}

/// A three-valued labelling of the arguments of a framework.
///
/// A labelling is derived from a set of arguments `E` (usually an extension):
/// `IN = E`, `OUT` is the set of arguments attacked by at least one member of `IN`, and `UNDEC` contains the remaining arguments.
/// The three sets form a partition of the arguments of the framework.
///
/// When `E` is not conflict-free (e.g. the union of several preferred extensions), an argument both in `E` and attacked by `E` is labelled `IN`.
#[derive(Debug)]
pub struct Labelling<'a, T>
where
    T: LabelType,
{
    statuses: Vec<ArgumentStatus>,
    af: &'a AAFramework<T>,
}

impl<'a, T> Labelling<'a, T>
where
    T: LabelType,
{
    /// Derives the labelling associated with a set of arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet, ArgumentStatus, Labelling};
    /// let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// let a = af.get_argument(&"a").unwrap();
    /// let labelling = Labelling::from_extension(&af, &[a]);
    /// assert_eq!(ArgumentStatus::Out, labelling.status_of(af.get_argument(&"b").unwrap()));
    /// assert_eq!(ArgumentStatus::Undec, labelling.status_of(af.get_argument(&"c").unwrap()));
    /// ```
    pub fn from_extension(af: &'a AAFramework<T>, extension: &[&Argument<T>]) -> Self {
        let mut statuses = vec![ArgumentStatus::Undec; af.n_arguments()];
        extension
            .iter()
            .for_each(|arg| statuses[arg.id()] = ArgumentStatus::In);
        for arg in extension {
            for attacked in af.attacked_ids_of(arg.id()) {
                if statuses[*attacked] != ArgumentStatus::In {
                    statuses[*attacked] = ArgumentStatus::Out;
                }
            }
        }
        Self { statuses, af }
    }

    /// Returns the status of an argument.
    pub fn status_of(&self, arg: &Argument<T>) -> ArgumentStatus {
        self.statuses[arg.id()]
    }

    /// Iterates over the arguments with the given status, in id order.
    pub fn iter_with_status(
        &self,
        status: ArgumentStatus,
    ) -> impl Iterator<Item = &'a Argument<T>> + '_ {
        let af = self.af;
        self.statuses
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == status)
            .map(move |(i, _)| af.argument_set().get_label_by_id(i))
    }

    /// Returns the `IN` arguments.
    pub fn in_arguments(&self) -> Vec<&'a Argument<T>> {
        self.iter_with_status(ArgumentStatus::In).collect()
    }

    /// Returns the `OUT` arguments.
    pub fn out_arguments(&self) -> Vec<&'a Argument<T>> {
        self.iter_with_status(ArgumentStatus::Out).collect()
    }

    /// Returns the `UNDEC` arguments.
    pub fn undec_arguments(&self) -> Vec<&'a Argument<T>> {
        self.iter_with_status(ArgumentStatus::Undec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use strum::IntoEnumIterator;

    fn labels<T: LabelType>(args: Vec<&Argument<T>>) -> Vec<T> {
        args.iter().map(|a| a.label().clone()).collect()
    }

    #[test]
    fn test_chain_labelling() {
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        let ext = vec![
            af.get_argument(&"a").unwrap(),
            af.get_argument(&"c").unwrap(),
        ];
        let labelling = Labelling::from_extension(&af, &ext);
        assert_eq!(vec!["a", "c"], labels(labelling.in_arguments()));
        assert_eq!(vec!["b"], labels(labelling.out_arguments()));
        assert!(labelling.undec_arguments().is_empty());
    }

    #[test]
    fn test_empty_extension() {
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["x", "y"]));
        af.new_attack(&"x", &"y").unwrap();
        af.new_attack(&"y", &"x").unwrap();
        let labelling = Labelling::from_extension(&af, &[]);
        assert_eq!(vec!["x", "y"], labels(labelling.undec_arguments()));
    }

    #[test]
    fn test_partition() {
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c", "d"]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"d").unwrap();
        let all = af.argument_set().iter().collect::<Vec<_>>();
        let ext_candidates: Vec<Vec<&Argument<&str>>> = vec![
            vec![],
            vec![all[0]],
            vec![all[1], all[3]],
            vec![all[0], all[1]],
            all.clone(),
        ];
        for ext in ext_candidates {
            let labelling = Labelling::from_extension(&af, &ext);
            let total: usize = ArgumentStatus::iter()
                .map(|s| labelling.iter_with_status(s).count())
                .sum();
            assert_eq!(af.n_arguments(), total);
            for arg in ext {
                assert_eq!(ArgumentStatus::In, labelling.status_of(arg));
            }
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!("IN", ArgumentStatus::In.to_string());
        assert_eq!("OUT", ArgumentStatus::Out.as_ref());
        assert_eq!("UNDEC", ArgumentStatus::Undec.to_string());
    }
}
