use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dialectica::{
    aa::{AAFramework, Argument, Labelling, Query, Semantics},
    io::{AspartixWriter, ResponseWriter},
    solvers::{
        CredulousAcceptanceComputer, ExtensionEnumerator, GroundedSemanticsSolver,
        PreferredSearchConfig, PreferredSemanticsSolver, SingleExtensionComputer,
        SkepticalAcceptanceComputer,
    },
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_MAX_EXPLORE: &str = "MAX_EXPLORE";
const ARG_SEED: &str = "SEED";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves a problem on the AF projected from a relation graph")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args("the input file that contains the relation graph"))
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve (see the problems command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .args(&common::projection_args())
            .arg(
                Arg::with_name(ARG_MAX_EXPLORE)
                    .long("max-explore")
                    .empty_values(false)
                    .multiple(false)
                    .help("the maximal number of search nodes explored for the preferred semantics")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_SEED)
                    .long("seed")
                    .empty_values(false)
                    .multiple(false)
                    .help("the seed of the greedy fallback for the preferred semantics")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let (query, semantics) = Query::read_problem_string(
            arg_matches
                .value_of(ARG_PROBLEM)
                .context("missing problem")?,
        )?;
        let af = common::read_and_project(arg_matches)?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| af.get_argument(&a.to_string()))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        if arg.is_some() && !query.requires_argument() {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                query.as_ref()
            );
        }
        match query {
            Query::SE => compute_one_extension(&af, semantics, arg_matches),
            Query::EE => enumerate_extensions(&af, semantics, arg_matches),
            Query::DC => {
                check_credulous_acceptance(&af, semantics, required_arg(query, arg)?, arg_matches)
            }
            Query::DS => {
                check_skeptical_acceptance(&af, semantics, required_arg(query, arg)?, arg_matches)
            }
            Query::LA => compute_labelling(&af, semantics, arg_matches),
        }
    }
}

fn required_arg(query: Query, arg: Option<&Argument<String>>) -> Result<&Argument<String>> {
    arg.ok_or_else(|| {
        anyhow!(
            "missing argument on the command line (required for query {})",
            query.as_ref()
        )
    })
}

fn preferred_solver<'a>(
    af: &'a AAFramework<String>,
    arg_matches: &ArgMatches<'_>,
) -> Result<PreferredSemanticsSolver<'a, String>> {
    let mut config = PreferredSearchConfig::default();
    if let Some(max_explore) = common::parse_opt_value(arg_matches, ARG_MAX_EXPLORE)? {
        config.max_explore = max_explore;
    }
    if let Some(seed) = common::parse_opt_value(arg_matches, ARG_SEED)? {
        config.seed = seed;
    }
    let mut solver = PreferredSemanticsSolver::new_with_config(af, config);
    let (n_extensions, n_explored, approximate, used_greedy) = {
        let preferred = solver.compute_preferred_extensions();
        (
            preferred.extensions().len(),
            preferred.n_explored(),
            preferred.is_approximate(),
            preferred.used_greedy(),
        )
    };
    info!(
        "found {} preferred extension(s) after exploring {} search node(s)",
        n_extensions, n_explored
    );
    if approximate {
        warn!(
            "the exploration budget ({}) was exhausted; the preferred extensions are approximate",
            config.max_explore
        );
    }
    if used_greedy {
        warn!(
            "no admissible set found within the budget; used the greedy fallback with seed {}",
            config.seed
        );
    }
    Ok(solver)
}

fn compute_one_extension(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg_matches: &ArgMatches<'_>,
) -> Result<()> {
    let mut solver: Box<dyn SingleExtensionComputer<String>> = match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(preferred_solver(af, arg_matches)?),
    };
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    match solver.compute_one_extension() {
        Some(ext) => writer.write_single_extension(&mut out, &ext),
        None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
    }
}

fn enumerate_extensions(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg_matches: &ArgMatches<'_>,
) -> Result<()> {
    let mut solver: Box<dyn ExtensionEnumerator<String>> = match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(preferred_solver(af, arg_matches)?),
    };
    let extensions = solver.compute_all_extensions();
    AspartixWriter::default().write_extensions(&mut std::io::stdout(), &extensions)
}

fn check_credulous_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg: &Argument<String>,
    arg_matches: &ArgMatches<'_>,
) -> Result<()> {
    let mut solver: Box<dyn CredulousAcceptanceComputer<String>> = match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(preferred_solver(af, arg_matches)?),
    };
    let acceptance_status = solver.is_credulously_accepted(arg);
    ResponseWriter::<String>::write_acceptance_status(
        &AspartixWriter::default(),
        &mut std::io::stdout(),
        acceptance_status,
    )
}

fn check_skeptical_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg: &Argument<String>,
    arg_matches: &ArgMatches<'_>,
) -> Result<()> {
    let mut solver: Box<dyn SkepticalAcceptanceComputer<String>> = match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(preferred_solver(af, arg_matches)?),
    };
    let acceptance_status = solver.is_skeptically_accepted(arg);
    ResponseWriter::<String>::write_acceptance_status(
        &AspartixWriter::default(),
        &mut std::io::stdout(),
        acceptance_status,
    )
}

/// Labels the arguments from the grounded extension, or from the union of the preferred extensions.
fn compute_labelling(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg_matches: &ArgMatches<'_>,
) -> Result<()> {
    let in_arguments = match semantics {
        Semantics::GR => GroundedSemanticsSolver::new(af)
            .compute_grounded_extension()
            .into_arguments(),
        Semantics::PR => {
            let mut in_set = vec![false; af.n_arguments()];
            preferred_solver(af, arg_matches)?
                .compute_preferred_extensions()
                .extensions()
                .iter()
                .flatten()
                .for_each(|a| in_set[a.id()] = true);
            af.argument_set()
                .iter()
                .filter(|a| in_set[a.id()])
                .collect()
        }
    };
    let labelling = Labelling::from_extension(af, &in_arguments);
    AspartixWriter::default().write_labelling(&mut std::io::stdout(), &labelling)
}
