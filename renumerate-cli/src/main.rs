use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use renumerate_core::{
    Config, NamingPolicy, OutputFormatter, Preview, RenumerateError, RunMode, VersionResult,
};
use std::io::{self, IsTerminal};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod confirm;
mod list;
mod rename;

use cli::args::NamingArgs;
use cli::{Cli, Commands, OutputFormat, PreviewArg};
use confirm::confirmation_prompt_active;

fn main() {
    init_logging();

    // Set up signal handler for graceful shutdown (both SIGINT and SIGTERM)
    let interrupted = Arc::new(AtomicBool::new(false));

    let interrupted_clone = Arc::clone(&interrupted);
    ctrlc::set_handler(move || on_interrupt("SIGINT", &interrupted_clone))
        .expect("Error setting SIGINT handler");

    let interrupted_clone = Arc::clone(&interrupted);
    unsafe {
        signal_hook::low_level::register(signal_hook::consts::SIGTERM, move || {
            on_interrupt("SIGTERM", &interrupted_clone);
        })
        .expect("Error setting SIGTERM handler");
    }

    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {e:#}");
        Config::default()
    });
    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    let result = match cli.command {
        Commands::Rename {
            directory,
            naming,
            dry_run,
            preview_only,
            format,
            output,
            quiet,
        } => {
            let mode = run_mode(dry_run, preview_only);
            let policy = naming_policy(&config, naming).with_mode(mode);

            rename::handle_rename(
                &directory,
                &policy,
                preview_format(&config, format),
                cli.yes,
                use_color,
                output,
                quiet,
            )
        },

        Commands::List {
            directory,
            sort,
            format,
            output,
        } => list::handle_list(
            &directory,
            sort.map_or(config.defaults.sort, Into::into),
            preview_format(&config, format),
            use_color,
            output,
        ),

        Commands::Version { output } => handle_version(output),

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "renumerate", &mut io::stdout());
            Ok(0)
        },
    };

    // Renames already underway were allowed to finish; report the interruption now
    if interrupted.load(Ordering::SeqCst) {
        eprintln!("Operation interrupted");
        process::exit(130);
    }

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RENUMERATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn on_interrupt(signal: &str, interrupted: &AtomicBool) {
    // Nothing has been renamed while the prompt is waiting
    if confirmation_prompt_active() {
        eprintln!("\nReceived {signal}. Aborted.");
        process::exit(130);
    }
    eprintln!("\nReceived {signal}. Finishing the current batch...");
    interrupted.store(true, Ordering::SeqCst);
}

/// `--preview` wins when both simulation flags are given
fn run_mode(dry_run: bool, preview_only: bool) -> RunMode {
    if preview_only {
        RunMode::Preview
    } else if dry_run {
        RunMode::DryRun
    } else {
        RunMode::Execute
    }
}

/// Invalid input exits with 2, anything else with 3
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<RenumerateError>() {
        Some(e) if e.is_invalid_input() => 2,
        _ => 3,
    }
}

/// Config defaults overridden by whatever was given on the command line
fn naming_policy(config: &Config, args: NamingArgs) -> NamingPolicy {
    let mut policy = config.naming_policy();
    if let Some(sort) = args.sort {
        policy.sort = sort.into();
    }
    if let Some(scheme) = args.scheme {
        policy.scheme = scheme.into();
    }
    if let Some(prefix) = args.prefix {
        policy.prefix = prefix;
    }
    if let Some(suffix) = args.suffix {
        policy.suffix = suffix;
    }
    policy
}

fn preview_format(config: &Config, format: Option<PreviewArg>) -> Preview {
    format
        .or_else(|| <PreviewArg as ValueEnum>::from_str(&config.defaults.format, true).ok())
        .map_or(Preview::List, Into::into)
}

fn handle_version(output: OutputFormat) -> Result<i32> {
    let version_result = VersionResult {
        name: "renumerate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(0)
}
