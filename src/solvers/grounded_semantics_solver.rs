use super::{
    admissibility, CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};

/// The grounded extension of a framework, and the number of iterations needed to compute it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedExtension<'a, T>
where
    T: LabelType,
{
    arguments: Vec<&'a Argument<T>>,
    iterations: usize,
}

impl<'a, T> GroundedExtension<'a, T>
where
    T: LabelType,
{
    /// Returns the arguments of the extension, in id order.
    pub fn arguments(&self) -> &[&'a Argument<T>] {
        &self.arguments
    }

    /// Consumes this object and returns the arguments of the extension.
    pub fn into_arguments(self) -> Vec<&'a Argument<T>> {
        self.arguments
    }

    /// Returns the number of applications of the characteristic function that were needed to reach the fixpoint.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns `true` iff the argument belongs to the extension.
    pub fn contains(&self, arg: &Argument<T>) -> bool {
        self.arguments.iter().any(|a| a.id() == arg.id())
    }
}

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the least fixpoint of the characteristic function of the framework.
/// It is computed by iterating this function from the empty set until the set does not change anymore,
/// which takes at most `n + 1` iterations for a framework with `n` arguments.
///
/// This solver implements [SingleExtensionComputer], [ExtensionEnumerator] and both [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] interfaces.
/// In all these cases, the computation resumes to the (polynomial time) computation of the grounded extension.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet};
    /// # use dialectica::solvers::GroundedSemanticsSolver;
    /// let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"c").unwrap();
    /// let solver = GroundedSemanticsSolver::new(&af);
    /// let grounded = solver.compute_grounded_extension();
    /// let labels = grounded.arguments().iter().map(|a| *a.label()).collect::<Vec<_>>();
    /// assert_eq!(vec!["a", "c"], labels);
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the grounded extension.
    pub fn compute_grounded_extension(&self) -> GroundedExtension<'a, T> {
        let mut current = vec![false; self.af.n_arguments()];
        let mut iterations = 0;
        loop {
            let next = admissibility::characteristic_function_in(self.af, &current);
            iterations += 1;
            if next == current {
                break;
            }
            current = next;
        }
        GroundedExtension {
            arguments: admissibility::members(self.af, &current),
            iterations,
        }
    }
}

/// Computes the grounded extension of a framework.
///
/// See [GroundedSemanticsSolver] for more information.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    GroundedSemanticsSolver::new(af)
        .compute_grounded_extension()
        .into_arguments()
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.compute_grounded_extension().into_arguments())
    }
}

impl<T> ExtensionEnumerator<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_all_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        vec![self.compute_grounded_extension().into_arguments()]
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_grounded_extension().contains(arg)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let ext = self.compute_grounded_extension();
        if ext.contains(arg) {
            (true, Some(ext.into_arguments()))
        } else {
            (false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_grounded_extension().contains(arg)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let ext = self.compute_grounded_extension();
        if ext.contains(arg) {
            (true, None)
        } else {
            (false, Some(ext.into_arguments()))
        }
    }
}
