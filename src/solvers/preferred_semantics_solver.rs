use super::{
    admissibility, grounded_semantics_solver, CredulousAcceptanceComputer, ExtensionEnumerator,
    SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// The parameters of the search for preferred extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferredSearchConfig {
    /// The maximal number of search nodes the exhaustive search may explore
    pub max_explore: usize,
    /// The framework size above which the greedy fallback is used when the exhaustive search found nothing
    pub greedy_threshold: usize,
    /// The number of random orderings tried by the greedy fallback
    pub greedy_restarts: usize,
    /// The seed of the random orderings
    pub seed: u64,
}

impl Default for PreferredSearchConfig {
    fn default() -> Self {
        Self {
            max_explore: 100_000,
            greedy_threshold: 18,
            greedy_restarts: 8,
            seed: 0,
        }
    }
}

/// The preferred extensions computed by a [PreferredSemanticsSolver].
///
/// When the exploration budget is exhausted, the extensions are only admissible sets that are maximal among the ones that were found.
/// In this case, the result is flagged as approximate and must not be considered as a certified enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredExtensions<'a, T>
where
    T: LabelType,
{
    extensions: Vec<Vec<&'a Argument<T>>>,
    approximate: bool,
    used_greedy: bool,
    n_explored: usize,
}

impl<'a, T> PreferredExtensions<'a, T>
where
    T: LabelType,
{
    /// Returns the extensions, each one given in id order.
    pub fn extensions(&self) -> &[Vec<&'a Argument<T>>] {
        &self.extensions
    }

    /// Consumes this object and returns the extensions.
    pub fn into_extensions(self) -> Vec<Vec<&'a Argument<T>>> {
        self.extensions
    }

    /// Returns `true` iff the exploration budget was exhausted before the search completed.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// Returns `true` iff the extensions come from the greedy fallback.
    pub fn used_greedy(&self) -> bool {
        self.used_greedy
    }

    /// Returns the number of search nodes explored by the exhaustive search.
    pub fn n_explored(&self) -> usize {
        self.n_explored
    }
}

/// A solver used to solve queries for the preferred semantics.
///
/// Preferred extensions are the maximal (under inclusion) admissible sets.
/// They are computed by a depth-first search over the arguments, branching on their inclusion and exclusion.
/// An argument is included only if the partial set remains conflict-free and each of its attackers may still be counter-attacked,
/// either by an argument of the partial set or by an argument that is yet to be decided.
/// Complete assignments are checked for admissibility, and the found sets are filtered to keep the maximal ones.
/// Branches which can only lead to subsets of an already found set are cut.
///
/// The search is bounded by the exploration budget of the [PreferredSearchConfig].
/// If the budget is exhausted before any set is found, a multi-start greedy heuristic is used for frameworks larger than the greedy threshold,
/// while the grounded extension is returned for smaller ones.
/// In both cases, as when some sets were found before exhaustion, the result is flagged as approximate.
///
/// The computation is made once and cached; the acceptance queries use the cached extensions.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    config: PreferredSearchConfig,
    cache: Option<PreferredExtensions<'a, T>>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred semantics, using the default search parameters.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet};
    /// # use dialectica::solvers::PreferredSemanticsSolver;
    /// let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["x", "y"]));
    /// af.new_attack(&"x", &"y").unwrap();
    /// af.new_attack(&"y", &"x").unwrap();
    /// let mut solver = PreferredSemanticsSolver::new(&af);
    /// let preferred = solver.compute_preferred_extensions();
    /// assert_eq!(2, preferred.extensions().len());
    /// assert!(!preferred.is_approximate());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_config(af, PreferredSearchConfig::default())
    }

    /// Builds a new solver dedicated to the preferred semantics, using the provided search parameters.
    pub fn new_with_config(af: &'a AAFramework<T>, config: PreferredSearchConfig) -> Self {
        Self {
            af,
            config,
            cache: None,
        }
    }

    /// Returns the search parameters of this solver.
    pub fn config(&self) -> &PreferredSearchConfig {
        &self.config
    }

    /// Computes the preferred extensions.
    pub fn compute_preferred_extensions(&mut self) -> &PreferredExtensions<'a, T> {
        let extensions = match self.cache.take() {
            Some(e) => e,
            None => self.search(),
        };
        self.cache.insert(extensions)
    }

    fn search(&self) -> PreferredExtensions<'a, T> {
        let n = self.af.n_arguments();
        let mut dfs = BoundedSearch {
            af: self.af,
            max_explore: self.config.max_explore,
            explored: 0,
            exhausted: false,
            results: vec![],
        };
        dfs.explore(n);
        let mut used_greedy = false;
        let mut results = dfs.results;
        if dfs.exhausted && results.is_empty() {
            if n > self.config.greedy_threshold {
                results = self.greedy_search();
                used_greedy = true;
            } else {
                let grounded = grounded_semantics_solver::grounded_extension(self.af);
                results = vec![admissibility::membership(self.af, &grounded)];
            }
        }
        PreferredExtensions {
            extensions: results
                .iter()
                .map(|r| admissibility::members(self.af, r))
                .collect(),
            approximate: dfs.exhausted,
            used_greedy,
            n_explored: dfs.explored,
        }
    }

    fn greedy_search(&self) -> Vec<Vec<bool>> {
        let n = self.af.n_arguments();
        let mut results = vec![];
        for restart in 0..self.config.greedy_restarts {
            let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(restart as u64));
            let mut order = (0..n).collect::<Vec<usize>>();
            order.shuffle(&mut rng);
            let mut in_set = vec![false; n];
            // arguments attacked by the current set
            let mut defeated = vec![false; n];
            loop {
                let mut changed = false;
                for i in order.iter() {
                    if !in_set[*i] && self.keeps_admissible(&in_set, &defeated, *i) {
                        in_set[*i] = true;
                        self.af
                            .attacked_ids_of(*i)
                            .iter()
                            .for_each(|a| defeated[*a] = true);
                        changed = true;
                    }
                }
                if !changed {
                    break;
                }
            }
            add_if_maximal(&mut results, in_set);
        }
        results
    }

    // whether adding an argument to an admissible set keeps it admissible
    fn keeps_admissible(&self, in_set: &[bool], defeated: &[bool], arg: usize) -> bool {
        let attackers = self.af.attacker_ids_of(arg);
        let attacked = self.af.attacked_ids_of(arg);
        !attackers.contains(&arg)
            && !attackers.iter().any(|a| in_set[*a])
            && !attacked.iter().any(|a| in_set[*a])
            && attackers
                .iter()
                .all(|b| defeated[*b] || attacked.contains(b))
    }

    fn preferred_extensions(&mut self) -> &[Vec<&'a Argument<T>>] {
        self.compute_preferred_extensions().extensions()
    }
}

/// Computes the preferred extensions of a framework, using the default search parameters.
///
/// See [PreferredSemanticsSolver] for more information.
pub fn preferred_extensions<T>(af: &AAFramework<T>) -> PreferredExtensions<'_, T>
where
    T: LabelType,
{
    PreferredSemanticsSolver::new(af)
        .compute_preferred_extensions()
        .clone()
}

// a step of the include-first depth-first search
enum SearchStep {
    // decide the argument with this index, or check the set if all are decided
    Enter(usize),
    // leave the inclusion branch of this argument and explore its exclusion branch
    Exclude(usize),
}

struct BoundedSearch<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    max_explore: usize,
    explored: usize,
    exhausted: bool,
    results: Vec<Vec<bool>>,
}

impl<T> BoundedSearch<'_, T>
where
    T: LabelType,
{
    fn explore(&mut self, n: usize) {
        let mut in_set = vec![false; n];
        let mut stack = vec![SearchStep::Enter(0)];
        while let Some(step) = stack.pop() {
            let next = match step {
                SearchStep::Enter(next) => next,
                SearchStep::Exclude(arg) => {
                    in_set[arg] = false;
                    stack.push(SearchStep::Enter(arg + 1));
                    continue;
                }
            };
            if self.explored >= self.max_explore {
                self.exhausted = true;
                return;
            }
            self.explored += 1;
            if self.is_dominated(&in_set, next) {
                continue;
            }
            if next == n {
                if admissibility::is_admissible_in(self.af, &in_set) {
                    add_if_maximal(&mut self.results, in_set.clone());
                }
                continue;
            }
            if self.may_include(&in_set, next) {
                in_set[next] = true;
                stack.push(SearchStep::Exclude(next));
            }
            // explored first: the inclusion branch if the argument was included, its exclusion otherwise
            stack.push(SearchStep::Enter(next + 1));
        }
    }

    fn may_include(&self, in_set: &[bool], arg: usize) -> bool {
        let attackers = self.af.attacker_ids_of(arg);
        if attackers.contains(&arg) {
            return false;
        }
        if attackers.iter().any(|a| in_set[*a])
            || self.af.attacked_ids_of(arg).iter().any(|a| in_set[*a])
        {
            return false;
        }
        attackers.iter().all(|b| {
            self.af
                .attacker_ids_of(*b)
                .iter()
                .any(|c| in_set[*c] || *c >= arg)
        })
    }

    // true if every completion of the partial set is included in a set that was already found
    fn is_dominated(&self, in_set: &[bool], next: usize) -> bool {
        self.results.iter().any(|r| {
            (0..next).all(|i| !in_set[i] || r[i]) && (next..in_set.len()).all(|i| r[i])
        })
    }
}

fn add_if_maximal(results: &mut Vec<Vec<bool>>, candidate: Vec<bool>) {
    let is_subset = |a: &[bool], b: &[bool]| a.iter().zip(b.iter()).all(|(x, y)| !*x || *y);
    if results.iter().any(|r| is_subset(&candidate, r)) {
        return;
    }
    results.retain(|r| !is_subset(r, &candidate));
    results.push(candidate);
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        self.preferred_extensions().first().cloned()
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_all_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        self.preferred_extensions().to_vec()
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match self
            .preferred_extensions()
            .iter()
            .find(|ext| ext.iter().any(|a| a.id() == arg.id()))
        {
            Some(ext) => (true, Some(ext.clone())),
            None => (false, None),
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).0
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match self
            .preferred_extensions()
            .iter()
            .find(|ext| ext.iter().all(|a| a.id() != arg.id()))
        {
            Some(ext) => (false, Some(ext.clone())),
            None => (true, None),
        }
    }
}
