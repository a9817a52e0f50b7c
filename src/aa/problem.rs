use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
    /// Compute the IN/OUT/UNDEC labelling
    LA,
}

impl Query {
    /// Returns `true` iff the query needs an argument to be checked.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }

    /// Iterates over the problem strings handled by this crate, following the `XX-YY` pattern.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::aa::Query;
    /// assert!(Query::iter_problem_strings().any(|p| p == "EE-PR"));
    /// ```
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter().flat_map(|q| {
            Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
        })
    }

    /// Reads a string depicting a problem with an XX-YY pattern.
    ///
    /// The string is split at the first hyphen found in it.
    /// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
    ///
    /// In case there is no hyphen, an error is returned.
    pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
        let context = || format!(r#"while parsing problem string "{}""#, problem);
        match problem.find('-') {
            Some(n) => {
                let query = Query::from_str(&problem[0..n])
                    .map_err(|_| anyhow!(r#"undefined query "{}""#, &problem[0..n]))
                    .with_context(context)?;
                let semantics = Semantics::from_str(&problem[1 + n..])
                    .map_err(|_| anyhow!(r#"undefined semantics "{}""#, &problem[1 + n..]))
                    .with_context(context)?;
                Ok((query, semantics))
            }
            None => Err(anyhow!("no hyphen in problem string")).with_context(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::EE, Semantics::PR),
            Query::read_problem_string("EE-PR").unwrap()
        );
        assert_eq!(
            (Query::LA, Semantics::GR),
            Query::read_problem_string("la-gr").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert!(Query::read_problem_string("foo-GR").is_err());
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(Query::read_problem_string("SE-ST").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert!(Query::read_problem_string("SEGR").is_err());
    }

    #[test]
    fn test_problem_strings() {
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        assert_eq!(10, problems.len());
        assert!(problems.contains(&"DS-GR".to_string()));
    }
}
