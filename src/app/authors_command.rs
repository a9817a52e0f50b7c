use super::{cli_manager::logging_level_cli_arg, command::Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "authors";

/// Prints the package name and version on a first line, then the authors.
pub(crate) struct AuthorsCommand {
    name_and_version: String,
    authors: String,
}

impl AuthorsCommand {
    pub(crate) fn new(app_name: &str, app_version: &str, authors: &str) -> Self {
        AuthorsCommand {
            name_and_version: format!("{} {}", app_name, app_version),
            // cargo joins the package authors with colons
            authors: authors.split(':').collect::<Vec<&str>>().join(", "),
        }
    }
}

impl<'a> Command<'a> for AuthorsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the app version and its authors")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        println!("{}\n{}", self.name_and_version, self.authors);
        Ok(())
    }
}
