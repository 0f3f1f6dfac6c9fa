//! Interactive line-oriented dashboard shell

use crate::{Dashboard, render};

use std::io::Write;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  name <value>         set the new user's name
  email <value>        set the new user's email
  add                  add the new user
  edit <id>            edit a user
  edit-name <value>    set the edited user's name
  edit-email <value>   set the edited user's email
  update               save the edited user
  cancel               close the edit panel
  delete <id>          delete a user
  select <id>          toggle selection of a user
  delete-selected      delete all selected users
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Name(String),
    Email(String),
    Add,
    Edit(String),
    EditName(String),
    EditEmail(String),
    Update,
    Cancel,
    Delete(String),
    Select(String),
    DeleteSelected,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' requires an id")]
    MissingId(&'static str),
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let id = |command: &'static str| {
            if argument.is_empty() {
                Err(ParseCommandError::MissingId(command))
            } else {
                Ok(argument.to_string())
            }
        };

        match command {
            "" => Err(ParseCommandError::Empty),
            "name" => Ok(ShellCommand::Name(argument.to_string())),
            "email" => Ok(ShellCommand::Email(argument.to_string())),
            "add" => Ok(ShellCommand::Add),
            "edit" => id("edit").map(ShellCommand::Edit),
            "edit-name" => Ok(ShellCommand::EditName(argument.to_string())),
            "edit-email" => Ok(ShellCommand::EditEmail(argument.to_string())),
            "update" => Ok(ShellCommand::Update),
            "cancel" => Ok(ShellCommand::Cancel),
            "delete" => id("delete").map(ShellCommand::Delete),
            "select" => id("select").map(ShellCommand::Select),
            "delete-selected" => Ok(ShellCommand::DeleteSelected),
            "help" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Apply one command. Returns `false` when the shell should exit.
pub async fn apply(dashboard: &mut Dashboard, command: ShellCommand) -> bool {
    let keep_running = command != ShellCommand::Quit;

    match command {
        ShellCommand::Name(name) => dashboard.state_mut().set_draft_name(name),
        ShellCommand::Email(email) => dashboard.state_mut().set_draft_email(email),
        ShellCommand::Add => dashboard.add_user().await,
        ShellCommand::Edit(id) => dashboard.state_mut().edit(&id),
        ShellCommand::EditName(name) => dashboard.state_mut().set_editing_name(name),
        ShellCommand::EditEmail(email) => dashboard.state_mut().set_editing_email(email),
        ShellCommand::Update => dashboard.update_user().await,
        ShellCommand::Cancel => dashboard.state_mut().cancel_edit(),
        ShellCommand::Delete(id) => dashboard.delete_user(&id).await,
        ShellCommand::Select(id) => dashboard.state_mut().toggle_selection(&id),
        ShellCommand::DeleteSelected => dashboard.delete_selected().await,
        ShellCommand::Help | ShellCommand::Quit => {}
    }

    keep_running
}

/// Mount the dashboard, then read commands until `quit` or end of input.
///
/// The view is re-rendered after every applied command.
pub async fn run<R, W>(dashboard: &mut Dashboard, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    dashboard.mount().await;
    writeln!(output, "{}", render(dashboard.state()))?;
    writeln!(output, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if command == ShellCommand::Help {
            writeln!(output, "{}", HELP)?;
            continue;
        }

        if !apply(dashboard, command).await {
            break;
        }

        writeln!(output, "{}", render(dashboard.state()))?;
    }

    Ok(())
}
