use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ProblemsCommand,
    ProjectCommand, ScoreCommand, SolveCommand,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use dialectica::{
    aa::AAFramework,
    io::{GraphReader, RelationGraphReader},
    projection::{GraphProjector, ProjectionOptions, RelationGraph},
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Dialectica, an evaluation core for deliberation argument graphs.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(ProjectCommand::new()),
        Box::new(ScoreCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args(help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help(help)
        .required(true)
}

const ARG_SUPPORT_DEFENSE: &str = "SUPPORT_DEFENSE";
const ARG_SUPPORT_CLOSURE: &str = "SUPPORT_CLOSURE";
const ARG_DEDUP_ATTACKS: &str = "DEDUP_ATTACKS";

pub(crate) fn projection_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_SUPPORT_DEFENSE)
            .long("support-defense")
            .takes_value(false)
            .help("derive attacks on the attackers of supported nodes")
            .required(false),
        Arg::with_name(ARG_SUPPORT_CLOSURE)
            .long("support-closure")
            .takes_value(false)
            .requires(ARG_SUPPORT_DEFENSE)
            .help("consider transitive supporters when deriving attacks")
            .required(false),
        Arg::with_name(ARG_DEDUP_ATTACKS)
            .long("dedup-attacks")
            .takes_value(false)
            .help("merge parallel attacks between the same pair of nodes")
            .required(false),
    ]
}

pub(crate) fn projection_options(arg_matches: &ArgMatches<'_>) -> ProjectionOptions {
    ProjectionOptions {
        support_defense_propagation: arg_matches.is_present(ARG_SUPPORT_DEFENSE),
        support_closure: arg_matches.is_present(ARG_SUPPORT_CLOSURE),
        deduplicate_attacks: arg_matches.is_present(ARG_DEDUP_ATTACKS),
    }
}

/// Reads the relation graph given on the command line and projects it into an AF.
pub(crate) fn read_and_project(arg_matches: &ArgMatches<'_>) -> Result<AAFramework<String>> {
    let file = arg_matches
        .value_of(ARG_INPUT)
        .context("missing input file")?;
    let graph = read_relation_graph(file)?;
    let options = projection_options(arg_matches);
    let projection = GraphProjector::new(options).project(&graph);
    info!(
        "the projected framework has {} argument(s) and {} attack(s)",
        projection.framework().n_arguments(),
        projection.framework().n_attacks(),
    );
    if options.support_defense_propagation {
        info!(
            "{} attack(s) derived from support relations",
            projection.n_derived_attacks()
        );
    }
    if projection.n_filtered_self_attacks() > 0 {
        info!(
            "{} self-attack(s) filtered out",
            projection.n_filtered_self_attacks()
        );
    }
    Ok(projection.into_framework())
}

pub(crate) fn read_relation_graph(file_path: &str) -> Result<RelationGraph<String>> {
    let mut reader = RelationGraphReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let graph = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the relation graph has {} node(s) and {} relation(s)",
        graph.n_nodes(),
        graph.n_relations(),
    );
    Ok(graph)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

/// Parses an optional numeric argument, returning `None` if it is absent.
pub(crate) fn parse_opt_value<V>(arg_matches: &ArgMatches<'_>, name: &str) -> Result<Option<V>>
where
    V: std::str::FromStr,
    <V as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    arg_matches
        .value_of(name)
        .map(|s| {
            s.parse::<V>()
                .with_context(|| format!(r#"while parsing value "{}" given for {}"#, s, name))
        })
        .transpose()
}
