use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dialectica::{
    evidential::{EvidentialScorer, ScoringConfig, ScoringMode},
    io::{EvidenceReader, ScoreWriter},
};
use log::{info, warn};
use std::str::FromStr;
use strum::IntoEnumIterator;

const CMD_NAME: &str = "score";

const ARG_MODE: &str = "MODE";
const ARG_THRESHOLD: &str = "THRESHOLD";
const ARG_PRIOR: &str = "PRIOR";
const ARG_UNDERCUT_HEDGE: &str = "UNDERCUT_HEDGE";
const ARG_REBUT_HEDGE: &str = "REBUT_HEDGE";
const ARG_CQ_PENALTY: &str = "CQ_PENALTY";
const ARG_EXPLAIN: &str = "EXPLAIN";
const ARG_ONLY: &str = "ONLY";
const ARG_PRETTY: &str = "PRETTY";

pub(crate) struct ScoreCommand;

impl ScoreCommand {
    pub(crate) fn new() -> Self {
        ScoreCommand
    }
}

fn numeric_arg(name: &'static str, long: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(long)
        .empty_values(false)
        .multiple(false)
        .help(help)
        .required(false)
}

impl<'a> Command<'a> for ScoreCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the evidential scores of the claims of a JSON evidence snapshot")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args("the input file that contains the evidence snapshot"))
            .arg(
                Arg::with_name(ARG_MODE)
                    .short("m")
                    .long("mode")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("min")
                    .help("the combination mode (min, prod or ds)")
                    .required(false),
            )
            .arg(numeric_arg(
                ARG_THRESHOLD,
                "threshold",
                "the score from which a claim is accepted (default 0.7)",
            ))
            .arg(numeric_arg(
                ARG_PRIOR,
                "prior",
                "the score of unsupported claims without their own prior (default 0.5)",
            ))
            .arg(numeric_arg(
                ARG_UNDERCUT_HEDGE,
                "undercut-hedge",
                "the strength of a single undercut (default 0.4)",
            ))
            .arg(numeric_arg(
                ARG_REBUT_HEDGE,
                "rebut-hedge",
                "the strength of a single rebuttal (default 0.4)",
            ))
            .arg(numeric_arg(
                ARG_CQ_PENALTY,
                "cq-penalty",
                "the factor applied for each unsatisfied critical question (default 0.85)",
            ))
            .arg(
                Arg::with_name(ARG_EXPLAIN)
                    .long("explain")
                    .takes_value(false)
                    .help("add the explanation of each score to the output")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ONLY)
                    .long("only")
                    .empty_values(false)
                    .multiple(false)
                    .help("a comma-separated list of the claims to score (default: all)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_PRETTY)
                    .long("pretty")
                    .takes_value(false)
                    .help("pretty-print the JSON output")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let config = read_config(arg_matches)?;
        info!("scoring claims in {} mode", config.mode);
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .context("missing input file")?;
        let mut reader = EvidenceReader::default();
        reader.add_warning_handler(Box::new(|item, msg| warn!("at item {}: {}", item, msg)));
        let graph = common::read_file_path_with(file, &|r| reader.read(r))?;
        info!(
            "the evidence snapshot has {} claim(s), {} argument(s) and {} edge(s)",
            graph.claims.len(),
            graph.arguments.len(),
            graph.edges.len()
        );
        let mut scorer = EvidentialScorer::new(&graph, config);
        let scores = match arg_matches.value_of(ARG_ONLY) {
            Some(only) => {
                let ids = only
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<String>>();
                scorer.score_claims(&ids)
            }
            None => scorer.score_all(),
        };
        info!(
            "{} of {} scored claim(s) accepted",
            scores.iter().filter(|s| s.accepted).count(),
            scores.len()
        );
        let writer = if arg_matches.is_present(ARG_PRETTY) {
            ScoreWriter::new_pretty()
        } else {
            ScoreWriter::default()
        };
        writer.write_scores(&mut std::io::stdout(), &config, &scores)
    }
}

fn read_config(arg_matches: &ArgMatches<'_>) -> Result<ScoringConfig> {
    let mut config = ScoringConfig::default();
    if let Some(mode) = arg_matches.value_of(ARG_MODE) {
        config.mode = ScoringMode::from_str(mode).map_err(|_| {
            anyhow!(
                r#"unknown scoring mode "{}"; expected one of {}"#,
                mode,
                ScoringMode::iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )
        })?;
    }
    let fields: [(&str, &mut f64); 5] = [
        (ARG_THRESHOLD, &mut config.threshold),
        (ARG_PRIOR, &mut config.prior),
        (ARG_UNDERCUT_HEDGE, &mut config.undercut_hedge),
        (ARG_REBUT_HEDGE, &mut config.rebut_hedge),
        (ARG_CQ_PENALTY, &mut config.cq_penalty),
    ];
    for (name, field) in fields {
        if let Some(value) = common::parse_opt_value(arg_matches, name)? {
            *field = value;
        }
    }
    config.explain = arg_matches.is_present(ARG_EXPLAIN);
    config
        .validate()
        .context("while checking the scoring parameters")?;
    Ok(config)
}
