use super::ResponseWriter;
use crate::{
    aa::{AAFramework, Argument, ArgumentStatus, Labelling},
    utils::LabelType,
};
use anyhow::{Context, Result};
use std::io::Write;
use strum::IntoEnumIterator;

/// A writer for the Aspartix format.
///
/// Frameworks are written with `arg` and `att` facts.
/// Extensions are written as bracketed lists of arguments (`[a,c]`), lists of extensions as bracketed lists of extensions (`[[a],[b]]`),
/// acceptance statuses as `YES` or `NO`, and labellings as `in`, `out` and `undec` facts.
///
/// # Example
///
/// The following example writes a framework to the standard output.
///
/// ```
/// # use dialectica::aa::{AAFramework, ArgumentSet};
/// # use dialectica::io::AspartixWriter;
/// # use dialectica::utils::LabelType;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new(ArgumentSet::new_with_labels(&[] as &[String])));
/// ```
#[derive(Default)]
pub struct AspartixWriter;

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

fn write_extension_list<T: LabelType>(
    writer: &mut dyn Write,
    extension: &[&Argument<T>],
) -> std::io::Result<()> {
    write!(writer, "[")?;
    for (i, arg) in extension.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", arg)?;
    }
    write!(writer, "]")
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing problem has no extension";
        writeln!(writer, "NO").context(context)?;
        writer.flush().context(context)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_extension_list(writer, extension).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()> {
        let context = "while writing extensions";
        write!(writer, "[").context(context)?;
        for (i, ext) in extensions.iter().enumerate() {
            if i > 0 {
                write!(writer, ",").context(context)?;
            }
            write_extension_list(writer, ext).context(context)?;
        }
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" }).context(context)?;
        writer.flush().context(context)
    }

    fn write_labelling(&self, writer: &mut dyn Write, labelling: &Labelling<T>) -> Result<()> {
        let context = "while writing a labelling";
        for status in ArgumentStatus::iter() {
            let keyword = status.as_ref().to_lowercase();
            for arg in labelling.iter_with_status(status) {
                writeln!(writer, "{}({}).", keyword, arg).context(context)?;
            }
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::io::BufWriter;

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write),
    {
        let mut buffer = BufWriter::new(Vec::new());
        f(&mut buffer);
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    fn chain_af() -> AAFramework<String> {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut af = AAFramework::new(ArgumentSet::new_with_labels(&labels));
        af.new_attack(&labels[0], &labels[1]).unwrap();
        af.new_attack(&labels[1], &labels[2]).unwrap();
        af
    }

    #[test]
    fn test_write_af() {
        let af = chain_af();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\n",
            written(|w| AspartixWriter::default().write_framework(&af, w).unwrap())
        )
    }

    #[test]
    fn test_write_single_extension() {
        let af = chain_af();
        let args = af.argument_set().iter().collect::<Vec<&Argument<String>>>();
        assert_eq!(
            "[a,b,c]\n",
            written(|w| AspartixWriter.write_single_extension(w, &args).unwrap())
        );
        assert_eq!(
            "[]\n",
            written(|w| AspartixWriter
                .write_single_extension(w, &[] as &[&Argument<String>])
                .unwrap())
        );
    }

    #[test]
    fn test_write_extensions() {
        let af = chain_af();
        let a = af.get_argument(&"a".to_string()).unwrap();
        let c = af.get_argument(&"c".to_string()).unwrap();
        assert_eq!(
            "[[a,c],[],[c]]\n",
            written(|w| AspartixWriter
                .write_extensions(w, &[vec![a, c], vec![], vec![c]])
                .unwrap())
        );
    }

    #[test]
    fn test_write_acceptance_status() {
        assert_eq!(
            "YES\n",
            written(|w| ResponseWriter::<String>::write_acceptance_status(&AspartixWriter, w, true)
                .unwrap())
        );
        assert_eq!(
            "NO\n",
            written(|w| ResponseWriter::<String>::write_no_extension(&AspartixWriter, w).unwrap())
        );
    }

    #[test]
    fn test_write_labelling() {
        let mut af = chain_af();
        af.new_attack(&"c".to_string(), &"c".to_string()).unwrap();
        let a = af.get_argument(&"a".to_string()).unwrap();
        let labelling = Labelling::from_extension(&af, &[a]);
        assert_eq!(
            "in(a).\nout(b).\nundec(c).\n",
            written(|w| AspartixWriter.write_labelling(w, &labelling).unwrap())
        );
    }
}
