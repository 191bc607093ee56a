mod check;
mod completion;

pub use check::*;
pub use completion::*;

use clap::{command, Command};

use crate::{commands, APP_HELP_TEMPLATE};

pub fn command(name: &'static str) -> Command {
    Command::new(name).help_template(
        r#"{about-with-newline}
{usage-heading}
  {usage}

{all-args}
"#,
    )
}

pub fn cli() -> Command {
    command!()
        .arg_required_else_help(true)
        .help_template(APP_HELP_TEMPLATE)
        .subcommand_required(true)
        .subcommands(vec![commands::check(), commands::completion()])
}
