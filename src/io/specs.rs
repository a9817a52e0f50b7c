use crate::{
    aa::{Argument, Labelling},
    projection::RelationGraph,
    utils::LabelType,
};
use anyhow::Result;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while parsing an instance.
///
/// The first parameter is the line (or item) number, the second one the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read typed relation graphs.
pub trait GraphReader<T>
where
    T: LabelType,
{
    /// Reads a [`RelationGraph`].
    ///
    /// Relations referencing undeclared nodes are dropped;
    /// in this case, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dialectica::io::{GraphReader, RelationGraphReader};
    /// # use dialectica::projection::RelationGraph;
    /// fn read_graph_from_str(s: &str) -> RelationGraph<String> {
    ///     let reader = RelationGraphReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid relation graph")
    /// }
    /// # read_graph_from_str("arg(a).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<RelationGraph<T>>;

    /// Adds a callback function to call when warnings are raised while parsing a graph.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write responses to problems.
pub trait ResponseWriter<T>
where
    T: LabelType,
{
    /// Writes the text associated with the fact the problem has no extension.
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()>;

    /// Writes a single extension.
    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()>;

    /// Writes a list of extensions.
    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()>;

    /// Writes an acceptance status.
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()>;

    /// Writes a three-valued labelling.
    fn write_labelling(&self, writer: &mut dyn Write, labelling: &Labelling<T>) -> Result<()>;
}
