use super::{warning_result::WarningResult, GraphReader, WarningHandler};
use crate::{
    projection::{RelationGraph, RelationKind},
    utils::LabelSet,
};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const NODE_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\)\.\s*$").unwrap();
    static ref ARG_LINE_NODE_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\)\.\s*$", NODE_AND_SPACE_PATTERN)).unwrap();
    static ref REL_LINE_PATTERN: Regex =
        Regex::new(r"^\s*(att|reb|und|sup)\([^,]+,[^)]+\)\.\s*$").unwrap();
    static ref REL_LINE_NODES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*(att|reb|und|sup)\(({}),({})\)\.\s*$",
        NODE_AND_SPACE_PATTERN, NODE_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

fn captured_node(c: &Captures, i: usize) -> WarningResult<String, String> {
    let str_node = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed = str_node.trim().to_string();
    if trimmed.len() == str_node.len() {
        WarningResult::Ok(trimmed)
    } else {
        WarningResult::Warned(
            trimmed,
            vec!["node names beginning or ending by spaces may be ambiguous".to_string()],
        )
    }
}

fn relation_kind(keyword: &str) -> Result<RelationKind> {
    match keyword {
        "att" => Ok(RelationKind::Attack),
        "reb" => Ok(RelationKind::Rebut),
        "und" => Ok(RelationKind::Undercut),
        "sup" => Ok(RelationKind::Support),
        _ => Err(anyhow!("unknown relation keyword {}", keyword)),
    }
}

fn try_read_arg_line(l: &str) -> Result<Option<WarningResult<String, String>>> {
    if ARG_LINE_PATTERN.is_match(l) {
        match ARG_LINE_NODE_PATTERN.captures(l) {
            Some(c) => Ok(Some(captured_node(&c, 1))),
            None => Err(anyhow!("invalid node name in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

type RawRelation = (String, String, RelationKind);

fn try_read_relation_line(l: &str) -> Result<Option<WarningResult<RawRelation, String>>> {
    if REL_LINE_PATTERN.is_match(l) {
        match REL_LINE_NODES_PATTERN.captures(l) {
            Some(c) => {
                let kind = relation_kind(c.get(1).map(|m| m.as_str()).unwrap_or_default())?;
                let nodes = captured_node(&c, 2).zip(captured_node(&c, 3));
                Ok(Some(match nodes {
                    WarningResult::Ok((a, b)) => WarningResult::Ok((a, b, kind)),
                    WarningResult::Warned((a, b), w) => WarningResult::Warned((a, b, kind), w),
                }))
            }
            None => Err(anyhow!("invalid node names in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

/// A reader for typed relation graphs, using an extension of the Aspartix format.
///
/// Nodes are declared by `arg` facts; relations use one of the `att` (untyped attack), `reb` (rebut), `und` (undercut) and `sup` (support) facts.
/// Lines beginning by a `%` are comments.
/// Declarations may come in any order.
///
/// Relations involving undeclared nodes are dropped, and a warning is raised for each of them.
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(s).
/// reb(a,b).
/// sup(s,b).
/// ```
///
/// # Example
///
/// ```
/// # use dialectica::io::{GraphReader, RelationGraphReader};
/// let reader = RelationGraphReader::default();
/// let graph = reader.read(&mut "arg(a).\narg(b).\nund(a,b).\natt(a,z).\n".as_bytes()).unwrap();
/// assert_eq!(2, graph.n_nodes());
/// assert_eq!(1, graph.n_relations());
/// ```
#[derive(Default)]
pub struct RelationGraphReader {
    warning_handlers: Vec<WarningHandler>,
}

impl RelationGraphReader {
    fn warn(&self, line: usize, message: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.to_string()));
    }
}

impl GraphReader<String> for RelationGraphReader {
    fn read(&self, reader: &mut dyn Read) -> Result<RelationGraph<String>> {
        let mut node_labels = vec![];
        let mut relations = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let warning_consumer = |warnings: Vec<String>| {
                warnings.iter().for_each(|w| self.warn(1 + i, w));
            };
            let l = &line.with_context(context)?;
            if l.trim().is_empty() || l.trim_start().starts_with('%') {
                continue;
            }
            if let Some(a) = try_read_arg_line(l).with_context(context)? {
                node_labels.push(a.consume_warnings(warning_consumer));
                continue;
            }
            if let Some(r) = try_read_relation_line(l).with_context(context)? {
                relations.push((1 + i, r.consume_warnings(warning_consumer)));
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        let mut graph = RelationGraph::new(LabelSet::new_with_labels(&node_labels));
        for (line, (from, to, kind)) in relations {
            if !graph.try_new_relation(&from, &to, kind) {
                self.warn(
                    line,
                    &format!(
                        "ignoring {} relation from {} to {}: undeclared node",
                        kind, from, to
                    ),
                );
            }
        }
        Ok(graph)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
