use crate::aa::AAFramework;
use crate::utils::LabelType;

/// Some statistics about the shape of an [`AAFramework`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkStats {
    /// The number of arguments
    pub n_arguments: usize,
    /// The number of attacks, parallel attacks included
    pub n_attacks: usize,
    /// The greatest number of attacks an argument receives
    pub max_in_degree: usize,
    /// The greatest number of attacks an argument emits
    pub max_out_degree: usize,
    /// The mean number of attacks per argument
    pub average_degree: f64,
    /// The number of weakly connected components
    pub n_connected_components: usize,
    /// Whether the attack relation contains a cycle (self-attacks included)
    pub has_cycles: bool,
}

impl FrameworkStats {
    /// Computes the statistics of a framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::{AAFramework, ArgumentSet};
    /// # use dialectica::utils::FrameworkStats;
    /// let mut af = AAFramework::new(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"a").unwrap();
    /// let stats = FrameworkStats::of(&af);
    /// assert_eq!(2, stats.n_connected_components);
    /// assert!(stats.has_cycles);
    /// ```
    pub fn of<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        let n = af.n_arguments();
        Self {
            n_arguments: n,
            n_attacks: af.n_attacks(),
            max_in_degree: (0..n)
                .map(|i| af.attacker_ids_of(i).len())
                .max()
                .unwrap_or(0),
            max_out_degree: (0..n)
                .map(|i| af.attacked_ids_of(i).len())
                .max()
                .unwrap_or(0),
            average_degree: if n == 0 {
                0.
            } else {
                af.n_attacks() as f64 / n as f64
            },
            n_connected_components: count_connected_components(af),
            has_cycles: has_cycles(af),
        }
    }
}

fn count_connected_components<T>(af: &AAFramework<T>) -> usize
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut visited = vec![false; n];
    let mut n_components = 0;
    for start in 0..n {
        if visited[start] {
            continue;
        }
        n_components += 1;
        visited[start] = true;
        let mut to_visit = vec![start];
        while let Some(current) = to_visit.pop() {
            for next in af
                .attacker_ids_of(current)
                .iter()
                .chain(af.attacked_ids_of(current).iter())
            {
                if !visited[*next] {
                    visited[*next] = true;
                    to_visit.push(*next);
                }
            }
        }
    }
    n_components
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

// iterative DFS; a grey successor closes a cycle
fn has_cycles<T>(af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut colors = vec![Color::White; n];
    for start in 0..n {
        if colors[start] != Color::White {
            continue;
        }
        let mut stack = vec![(start, 0)];
        colors[start] = Color::Grey;
        while let Some((current, next_child)) = stack.pop() {
            let successors = af.attacked_ids_of(current);
            if next_child == successors.len() {
                colors[current] = Color::Black;
                continue;
            }
            stack.push((current, next_child + 1));
            let child = successors[next_child];
            match colors[child] {
                Color::Grey => return true,
                Color::White => {
                    colors[child] = Color::Grey;
                    stack.push((child, 0));
                }
                Color::Black => {}
            }
        }
    }
    false
}
