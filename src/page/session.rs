//! Line-driven interactive session over a [`UsersPage`].
//!
//! Each input line is one UI event: a field edit, a submit, a reload, or a
//! request to show the page. State changes reach the screen through the
//! page's observer; this loop only prints replies and explicit `show`s.

use std::io::Write;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::UserApi;
use crate::models::FormField;
use crate::output::PageRenderer;
use crate::page::{SubmitOutcome, UsersPage};

pub const HELP: &str = "\
commands:
  name <value>   set the name field
  age <value>    set the age field
  submit         create the user from the form
  reload         fetch the user list again
  show           print the page
  help           show this help
  quit           leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(FormField, String),
    Submit,
    Reload,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if let Ok(field) = word.parse::<FormField>() {
            return Ok(Command::Edit(field, rest.to_string()));
        }

        match word.to_lowercase().as_str() {
            "submit" => Ok(Command::Submit),
            "reload" => Ok(Command::Reload),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("unknown command: {word} (try `help`)")),
        }
    }
}

/// Mount the page, then apply commands from `input` until EOF or `quit`.
pub async fn run<A, R, W>(
    page: &mut UsersPage<A>,
    input: R,
    out: &mut W,
    renderer: &dyn PageRenderer,
) -> std::io::Result<()>
where
    A: UserApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    page.mount().await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        match command {
            Command::Edit(field, value) => page.edit(field, value),
            Command::Submit => {
                if let SubmitOutcome::Rejected(err) = page.submit().await {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Reload => {
                page.load().await;
            }
            Command::Show => write!(out, "{}", renderer.render(page.state()))?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
