use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
    writable_string::WritableString,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};

/// Handles the set of commands and dispatches the CLI arguments to the selected one.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const APP_HELPER_LOGGING_LEVEL_ARG: &str = "APP_HELPER_LOGGING_LEVEL_ARG";

const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(APP_HELPER_LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        match app.clone().get_matches_from_safe(args.clone()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let command = self.commands.iter().find(|c| c.name() == name);
                match (command, sub_matches) {
                    (Some(c), Some(sub_matches)) => {
                        let log_level = sub_matches
                            .value_of(APP_HELPER_LOGGING_LEVEL_ARG)
                            .and_then(|l| log::LevelFilter::from_str(l).ok())
                            .unwrap_or(log::LevelFilter::Info);
                        init_logger_with_level(log_level);
                        info!("{} {}", self.app_name, self.version);
                        c.execute(sub_matches)
                    }
                    _ => Err(anyhow!("no command named {:?}", name)),
                }
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, &args)
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, app: &mut App, args: &[OsString]) -> Result<()> {
        let arg_at = |i: usize| args.get(i).and_then(|a| a.to_str());
        let is_help = |s: &str| HELP_STRINGS.contains(&s);
        let subcommand_name = match (arg_at(1), arg_at(2)) {
            (Some(a1), _) if !is_help(a1) => Some(a1),
            (Some(_), Some(a2)) => Some(a2),
            _ => None,
        };
        let mut message = WritableString::default();
        let written =
            match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n)) {
                Some(c) => c.clap_subcommand().write_long_help(&mut message),
                None => app.write_long_help(&mut message),
            };
        written.context("while writing the help message")?;
        message.to_string().split('\n').for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct RecordingCommand {
        executed: Rc<RefCell<bool>>,
        flag_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for RecordingCommand {
        fn name(&self) -> &str {
            "record"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("record")
                .about("records its execution")
                .arg(Arg::with_name("flag").short("a"))
                .arg(logging_level_cli_arg())
                .setting(AppSettings::DisableVersion)
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.executed.borrow_mut() = true;
            if arg_matches.is_present("flag") {
                *self.flag_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn run(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let executed = Rc::new(RefCell::new(false));
        let flag_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(RecordingCommand {
            executed: Rc::clone(&executed),
            flag_set: Rc::clone(&flag_set),
        }));
        manager.parse_cli(args)?;
        let result = (*executed.borrow(), *flag_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_executed() {
        assert_eq!((true, false), run(vec!["app_name", "record"]).unwrap());
    }

    #[test]
    fn test_command_and_flag() {
        assert_eq!((true, true), run(vec!["app_name", "record", "-a"]).unwrap());
    }

    #[test]
    fn test_logging_level() {
        assert_eq!(
            (true, false),
            run(vec!["app_name", "record", "--logging-level", "off"]).unwrap()
        );
        assert!(run(vec!["app_name", "record", "--logging-level", "loud"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        assert!(run(vec!["app_name"]).is_err());
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(run(vec!["app_name", "foo"]).is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(run(vec!["app_name", "record", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!((false, false), run(vec!["app_name", "-h"]).unwrap());
        assert_eq!((false, false), run(vec!["app_name", "help"]).unwrap());
        assert_eq!((false, false), run(vec!["app_name", "help", "record"]).unwrap());
        assert_eq!((false, false), run(vec!["app_name", "record", "-h"]).unwrap());
    }
}
