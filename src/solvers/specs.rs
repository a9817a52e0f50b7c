use crate::{aa::Argument, utils::LabelType};

/// Solvers returning one extension of the semantics they implement.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Returns an extension, or `None` if the semantics yields none for this framework.
    ///
    /// Grounded and preferred extensions always exist, so the solvers of this crate always return `Some`.
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>>;
}

/// Solvers listing every extension of the semantics they implement.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Returns the extensions.
    ///
    /// Bounded solvers may return an approximation; see their own documentation.
    fn compute_all_extensions(&mut self) -> Vec<Vec<&Argument<T>>>;
}

/// Solvers deciding whether an argument belongs to at least one extension.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Returns `true` iff some extension contains the argument.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Same as [is_credulously_accepted](Self::is_credulously_accepted), with an extension containing the argument as a witness.
    ///
    /// The witness is `None` iff the argument is rejected.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}

/// Solvers deciding whether an argument belongs to every extension.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Returns `true` iff all the extensions contain the argument.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Same as [is_skeptically_accepted](Self::is_skeptically_accepted), with an extension lacking the argument as a counterexample.
    ///
    /// The counterexample is `None` iff the argument is accepted.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}
