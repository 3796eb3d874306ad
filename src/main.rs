//! userdeck — terminal users page for a users REST backend.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{AddArgs, Cli, Command};
use userdeck::api::HttpUserApi;
use userdeck::config::Config;
use userdeck::constants;
use userdeck::env::Env;
use userdeck::logging;
use userdeck::models::FormField;
use userdeck::output::PageRenderer;
use userdeck::page::{SubmitOutcome, UsersPage, ViewState, session};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(&env, cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Command::Version = cli.command {
        return run_version();
    }

    let work_dir = std::env::current_dir().context("could not determine working directory")?;
    let mut config = Config::load(Some(&work_dir), &env).context("failed to load configuration")?;
    config.override_api(cli.api_url.clone(), cli.timeout);
    tracing::debug!(?config, "resolved configuration");

    let api = HttpUserApi::new(&config.api).context("failed to set up the users API client")?;
    let renderer = cli.format.renderer();

    match cli.command {
        Command::List => run_list(api, renderer).await,
        Command::Add(args) => run_add(api, renderer, args).await,
        Command::Page => run_page(api, renderer).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    println!("{}    {}", "backend:".dimmed(), constants::DEFAULT_API_URL);
    Ok(())
}

/// Mount the page and print it once.
async fn run_list(api: HttpUserApi, renderer: &dyn PageRenderer) -> Result<()> {
    let mut page = UsersPage::new(api);
    page.mount().await;

    print!("{}", renderer.render(page.state()));

    if let Some(error) = page.error() {
        bail!("{error}");
    }
    Ok(())
}

/// Mount, fill both fields, submit, and print the resulting page.
async fn run_add(api: HttpUserApi, renderer: &dyn PageRenderer, args: AddArgs) -> Result<()> {
    let mut page = UsersPage::new(api);
    page.mount().await;
    page.edit(FormField::Name, args.name);
    page.edit(FormField::Age, args.age);

    let outcome = page.submit().await;
    print!("{}", renderer.render(page.state()));

    match outcome {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Rejected(err) => Err(err).context("user was not submitted"),
        SubmitOutcome::Failed => bail!("{}", constants::CREATE_FAILED_MESSAGE),
    }
}

/// Run the interactive session on stdin, re-rendering after every change.
async fn run_page(api: HttpUserApi, renderer: &'static dyn PageRenderer) -> Result<()> {
    let mut page = UsersPage::new(api).with_observer(move |state: &ViewState| {
        print!("{}", renderer.render(state));
    });

    println!("{}", session::HELP);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session::run(&mut page, stdin, &mut std::io::stdout(), renderer)
        .await
        .context("interactive session failed")
}
