use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dialectica::io::AspartixWriter;

const CMD_NAME: &str = "project";

pub(crate) struct ProjectCommand;

impl ProjectCommand {
    pub(crate) fn new() -> Self {
        ProjectCommand
    }
}

impl<'a> Command<'a> for ProjectCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Projects a relation graph into an AF and writes it in the Aspartix format")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args("the input file that contains the relation graph"))
            .args(&common::projection_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_and_project(arg_matches)?;
        AspartixWriter::default().write_framework(&af, &mut std::io::stdout())
    }
}
