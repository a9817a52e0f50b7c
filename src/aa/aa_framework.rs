use super::{Argument, ArgumentSet};
use crate::utils::LabelType;
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Attacks are stored as given: parallel attacks are kept and self-attacks are accepted.
/// The [`GraphProjector`](crate::projection::GraphProjector) is in charge of filtering them when building frameworks from deliberation graphs.
#[derive(Debug, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attackers: Vec<Vec<usize>>,
    attacked: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use dialectica::aa::Attack;
    /// # use dialectica::utils::LabelType;
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework with no attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        AAFramework {
            arguments,
            attacks: vec![],
            attackers: vec![vec![]; n],
            attacked: vec![vec![]; n],
        }
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// If the attack already exists, it is added another time (no checks are made for existence).
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet};
    /// let mut framework = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b"]));
    /// framework.new_attack(&"a", &"b").unwrap();
    /// assert!(framework.new_attack(&"a", &"z").is_err());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_label(from)
            .with_context(context)?
            .id();
        let attacked_id = self.arguments.get_label(to).with_context(context)?.id();
        self.push_attack(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the ids of the source and destination arguments.
    ///
    /// If the provided ids are undefined, an error is returned.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from identifiers {:?} to {:?}; the framework has {} argument(s)",
                from,
                to,
                n_arguments
            ));
        }
        self.push_attack(from, to);
        Ok(())
    }

    fn push_attack(&mut self, from: usize, to: usize) {
        self.attacks.push((from, to));
        self.attackers[to].push(from);
        self.attacked[from].push(to);
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the argument with the given label, or an error if there is no such argument.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.arguments.get_label(label)
    }

    /// Provides an iterator to the attacks, in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_label_by_id(*a),
                self.arguments.get_label_by_id(*b),
            )
        })
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        let attacked = self.arguments.get_label_by_id(arg.id());
        self.attackers[arg.id()]
            .iter()
            .map(move |a| Attack(self.arguments.get_label_by_id(*a), attacked))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(
        &self,
        arg: &Argument<T>,
    ) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        let attacker = self.arguments.get_label_by_id(arg.id());
        self.attacked[arg.id()]
            .iter()
            .map(move |b| Attack(attacker, self.arguments.get_label_by_id(*b)))
    }

    /// Returns the ids of the attackers of the argument with the given id (with repetitions for parallel attacks).
    pub fn attacker_ids_of(&self, id: usize) -> &[usize] {
        &self.attackers[id]
    }

    /// Returns the ids of the arguments attacked by the argument with the given id (with repetitions for parallel attacks).
    pub fn attacked_ids_of(&self, id: usize) -> &[usize] {
        &self.attacked[id]
    }

    /// Returns `true` iff there is at least one attack from `from` to `to` (given by their ids).
    pub fn has_attack_by_ids(&self, from: usize, to: usize) -> bool {
        self.attacked[from].contains(&to)
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework, parallel attacks included.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}
