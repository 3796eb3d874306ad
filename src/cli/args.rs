//! Clap argument types.

use clap::{Parser, ValueEnum};

use userdeck::output::PageRenderer;
use userdeck::output::json::JsonRenderer;
use userdeck::output::terminal::TerminalRenderer;

/// Terminal users page for a users REST backend.
#[derive(Parser, Debug)]
#[command(name = "userdeck", version = userdeck::constants::VERSION)]
pub struct Cli {
    /// Base URL of the users API (default: http://localhost:8080/api).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (at least 1).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format for the rendered page.
    #[arg(long, global = true, default_value = "terminal")]
    pub format: OutputFormat,

    /// Log request lifecycles to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load the user list and print the page.
    List,

    /// Fill in the form, submit it, and print the refreshed page.
    Add(AddArgs),

    /// Interactive session: edit the form, submit, reload.
    Page,

    /// Print version and build information.
    Version,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the new user.
    #[arg(long)]
    pub name: String,

    /// Age of the new user; leading digits are used ("30 years" sends 30).
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,
}

/// Page output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> &'static dyn PageRenderer {
        match self {
            OutputFormat::Terminal => &TerminalRenderer,
            OutputFormat::Json => &JsonRenderer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck::page::ViewState;

    #[test]
    fn parse_list_with_globals() {
        let cli = Cli::try_parse_from([
            "userdeck",
            "list",
            "--api-url",
            "http://users:9000/api",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.api_url.as_deref(), Some("http://users:9000/api"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from(["userdeck", "-v", "add", "--name", "Ada", "--age", "30"])
            .unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.name, "Ada");
                assert_eq!(args.age, "30");
            }
            other => panic!("expected add, got {other:?}"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn parse_add_requires_both_fields() {
        assert!(Cli::try_parse_from(["userdeck", "add", "--name", "Ada"]).is_err());
    }

    #[test]
    fn parse_timeout_rejects_zero() {
        assert!(Cli::try_parse_from(["userdeck", "list", "--timeout", "0"]).is_err());
        let cli = Cli::try_parse_from(["userdeck", "list", "--timeout", "3"]).unwrap();
        assert_eq!(cli.timeout, Some(3));
    }

    #[test]
    fn default_format_is_terminal() {
        let cli = Cli::try_parse_from(["userdeck", "page"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert_eq!(cli.timeout, None);
    }

    #[test]
    fn json_renderer_selected() {
        let rendered = OutputFormat::Json.renderer().render(&ViewState::default());
        assert!(rendered.trim_start().starts_with('{'));
    }
}
