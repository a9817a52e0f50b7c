use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dialectica::utils::FrameworkStats;
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a relation graph file for errors and displays statistics about its projection")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args("the input file that contains the relation graph"))
            .args(&common::projection_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_and_project(arg_matches)?;
        let stats = FrameworkStats::of(&af);
        info!(
            "max in-degree is {}, max out-degree is {}, average degree is {:.3}",
            stats.max_in_degree, stats.max_out_degree, stats.average_degree
        );
        info!(
            "the framework has {} connected component(s) and {}",
            stats.n_connected_components,
            if stats.has_cycles {
                "contains attack cycles"
            } else {
                "is acyclic"
            }
        );
        Ok(())
    }
}
