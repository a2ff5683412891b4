//! Chui CLI
//!
//! The command-line interface for managing a Chui project.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{AppAction, Cli, Commands, ConfigAction, EnvAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.env.as_deref()),
        None => {
            println!("{} Chui CLI", "chui".green().bold());
            println!();
            println!("Run {} for available commands.", "chui --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` sets the filter; `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, env: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Init {
            dir,
            domain,
            name,
            org,
            environments,
        } => commands::run_init(
            &cwd.join(dir),
            &commands::NewProject {
                domain,
                name,
                org,
                environments,
            },
        ),
        Commands::Env { action } => match action {
            EnvAction::Add { name, domain } => commands::run_env_add(&cwd, &name, domain.as_deref()),
            EnvAction::List => commands::run_env_list(&cwd),
        },
        Commands::Config {
            action: ConfigAction::Show { json },
        } => commands::run_config_show(&cwd, env, json),
        Commands::Validate => commands::run_validate(&cwd, env),
        Commands::App { action } => match action {
            AppAction::Add {
                source,
                name,
                app_type,
                variant,
                version,
                revision,
                skip_install,
            } => commands::run_app_add(
                &cwd,
                commands::AppRequest {
                    source,
                    name,
                    app_type,
                    variant,
                    version,
                },
                revision.as_deref(),
                skip_install,
            ),
            AppAction::Catalog { refresh, json, url } => {
                commands::run_app_catalog(url.as_deref(), refresh, json)
            }
            AppAction::Current => commands::run_app_current(&cwd),
        },
        Commands::Stack { stack, lookup } => {
            commands::run_stack(&cwd, env, stack.as_deref(), &lookup)
        }
    }
}
