use std::io::Write;

/// An in-memory sink used to capture the help messages produced by clap before logging them.
#[derive(Default)]
pub(crate) struct WritableString(String);

impl Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Display for WritableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut s = WritableString::default();
        write!(s, "abc").unwrap();
        write!(s, "def").unwrap();
        s.flush().unwrap();
        assert_eq!("abcdef", s.to_string())
    }

    #[test]
    fn test_help_lines() {
        let mut s = WritableString::default();
        writeln!(s, "USAGE:").unwrap();
        write!(s, "    dialectica <SUBCOMMAND>").unwrap();
        assert_eq!(
            vec!["USAGE:", "    dialectica <SUBCOMMAND>"],
            s.to_string().split('\n').collect::<Vec<&str>>()
        );
    }
}
