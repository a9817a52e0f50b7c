/// An enum acting like a `Result`, but producing warnings instead of errors.
///
/// There is always a value, which may come with one or more warnings.
#[derive(Debug, PartialEq, Eq)]
pub enum WarningResult<T, W> {
    /// A value with no warning
    Ok(T),
    /// A value and its warnings
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    /// Builds a result from a value and a (possibly empty) list of warnings.
    pub fn new(value: T, warnings: Vec<W>) -> Self {
        if warnings.is_empty() {
            WarningResult::Ok(value)
        } else {
            WarningResult::Warned(value, warnings)
        }
    }

    /// Consumes the result, passing the warnings (if any) to the callback and returning the value.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        match self {
            WarningResult::Ok(t) => t,
            WarningResult::Warned(t, w) => {
                f(w);
                t
            }
        }
    }

    /// Zips two results; the warnings are concatenated.
    pub fn zip<U>(self, other: WarningResult<U, W>) -> WarningResult<(T, U), W> {
        let (t, mut w1) = self.split();
        let (u, w2) = other.split();
        w1.extend(w2);
        WarningResult::new((t, u), w1)
    }

    fn split(self) -> (T, Vec<W>) {
        match self {
            WarningResult::Ok(t) => (t, vec![]),
            WarningResult::Warned(t, w) => (t, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(WarningResult::Ok(1), WarningResult::<_, String>::new(1, vec![]));
        assert_eq!(
            WarningResult::Warned(1, vec!["w"]),
            WarningResult::new(1, vec!["w"])
        );
    }

    #[test]
    fn test_consume_warnings() {
        let mut consumed = vec![];
        assert_eq!(
            1,
            WarningResult::Warned(1, vec!["w".to_string()]).consume_warnings(|w| consumed = w)
        );
        assert_eq!(vec!["w".to_string()], consumed);
        let mut called = false;
        assert_eq!(
            2,
            WarningResult::<_, String>::Ok(2).consume_warnings(|_| called = true)
        );
        assert!(!called);
    }

    #[test]
    fn test_zip() {
        let ok: WarningResult<i32, &str> = WarningResult::Ok(1);
        assert_eq!(WarningResult::Ok((1, 2)), ok.zip(WarningResult::Ok(2)));
        let w1 = WarningResult::Warned(1, vec!["w1"]);
        assert_eq!(
            WarningResult::Warned((1, 2), vec!["w1"]),
            w1.zip(WarningResult::Ok(2))
        );
        let w1 = WarningResult::Warned(1, vec!["w1"]);
        assert_eq!(
            WarningResult::Warned((1, 2), vec!["w1", "w2"]),
            w1.zip(WarningResult::Warned(2, vec!["w2"]))
        );
    }
}
