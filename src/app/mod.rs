mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod project_command;
pub(crate) use project_command::ProjectCommand;

mod score_command;
pub(crate) use score_command::ScoreCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;

mod writable_string;
