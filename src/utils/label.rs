use anyhow::{anyhow, Result};
use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

/// The trait for node, argument and claim labels.
///
/// Nodes of a deliberation graph may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize], [&str] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// A label associated with the unique identifier it received from its [`LabelSet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label<T>
where
    T: LabelType,
{
    id: usize,
    label: T,
}

impl<T> Label<T>
where
    T: LabelType,
{
    pub(crate) fn new(id: usize, label: T) -> Self {
        Self { id, label }
    }

    /// Returns the label value.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the identifier given to the label by its set.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Label<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An arena of labels, each one with a unique id.
///
/// Identifiers are dense: the `i`-th distinct label added to the set gets the id `i`.
/// Graph snapshots are immutable, so labels are never removed from a set.
#[derive(Debug, Default)]
pub struct LabelSet<T>
where
    T: LabelType,
{
    labels: Vec<Label<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> LabelSet<T>
where
    T: LabelType,
{
    /// Builds a new label set initialized with a set of labels.
    ///
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::utils::LabelSet;
    /// let labels = LabelSet::new_with_labels(&["a", "b", "a"]);
    /// assert_eq!(2, labels.len());
    /// assert_eq!(0, labels.get_label(&"a").unwrap().id());
    /// assert_eq!(1, labels.get_label(&"b").unwrap().id());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_set = LabelSet {
            labels: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels.iter().for_each(|l| {
            label_set.new_label(l.clone());
        });
        label_set.labels.shrink_to_fit();
        label_set.label_to_id.shrink_to_fit();
        label_set
    }

    /// Adds a new label to this set and returns its id.
    ///
    /// In the label is already present in the set, nothing is added and the id of the existing label is returned.
    pub fn new_label(&mut self, label: T) -> usize {
        let labels = &mut self.labels;
        *self.label_to_id.entry(label.clone()).or_insert_with(|| {
            labels.push(Label::new(labels.len(), label));
            labels.len() - 1
        })
    }

    /// Returns the number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if and only if the set has no label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label object associated to a label value.
    ///
    /// In case no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::utils::LabelSet;
    /// let labels = LabelSet::new_with_labels(&["a", "b", "c"]);
    /// assert!(labels.get_label(&"a").is_ok());
    /// assert!(labels.get_label(&"d").is_err());
    /// ```
    pub fn get_label(&self, label: &T) -> Result<&Label<T>> {
        self.get_label_id(label)
            .map(|i| &self.labels[i])
            .ok_or_else(|| anyhow!("no such label: {}", label))
    }

    /// Returns the id of a label value, or `None` if it does not belong to the set.
    pub fn get_label_id(&self, label: &T) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Returns `true` if and only if the label value belongs to this set.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the label with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no label has such id.
    pub fn get_label_by_id(&self, id: usize) -> &Label<T> {
        &self.labels[id]
    }

    /// Returns an iterator to the labels, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Label<T>> + '_ {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let str_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let labels = LabelSet::new_with_labels(&str_labels);
        assert_eq!(3, labels.len());
        assert!(!labels.is_empty());
        for (i, l) in labels.iter().enumerate() {
            assert_eq!(i, l.id());
            assert_eq!(&str_labels[i], l.label());
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let labels = LabelSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, labels.len());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_new_label_returns_existing_id() {
        let mut labels = LabelSet::new_with_labels(&["a", "b"]);
        assert_eq!(2, labels.new_label("c"));
        assert_eq!(2, labels.new_label("c"));
        assert_eq!(0, labels.new_label("a"));
        assert_eq!(3, labels.len());
    }

    #[test]
    #[should_panic(expected = "no such label: d")]
    fn test_get_unknown_label() {
        let labels = LabelSet::new_with_labels(&["a", "b"]);
        labels.get_label(&"d").unwrap();
    }

    #[test]
    fn test_contains() {
        let labels = LabelSet::new_with_labels(&["a"]);
        assert!(labels.contains(&"a"));
        assert!(!labels.contains(&"b"));
        assert_eq!(None, labels.get_label_id(&"b"));
    }
}
