//! netdialogs command line entry point
//!
//! Global flags come before the category:
//!
//! - `--dry-run` submits to an in-memory model and prints what would be saved
//! - `--log-file` also logs to the daily rolling file

use std::{env, error::Error, process, sync::Arc};

use netdialogs::{
    cli::{CliContext, CliService, formatting::format_error},
    config::Config,
    services::network_manager::{NetworkModel, StaticNetworkModel},
    tracing_config,
};
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct GlobalFlags {
    dry_run: bool,
    log_file: bool,
}

fn split_flags(args: &[String]) -> (GlobalFlags, &[String]) {
    let mut flags = GlobalFlags::default();
    let mut rest = args;

    while let Some((first, tail)) = rest.split_first() {
        match first.as_str() {
            "--dry-run" => flags.dry_run = true,
            "--log-file" => flags.log_file = true,
            _ => break,
        }
        rest = tail;
    }

    (flags, rest)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (flags, args) = split_flags(&args);

    let config = match Config::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    if flags.log_file {
        tracing_config::init_with_file(config.general.log_level)?;
    } else {
        tracing_config::init_cli_mode(config.general.log_level)?;
    }

    run_cli_command(config, &flags, args).await
}

/// Executes one command through the CliService.
///
/// `help [category]`, or no arguments at all, prints the command overview.
///
/// # Errors
/// Returns error if dry-run output cannot be rendered. Command failures are
/// printed and exit with status 1.
#[instrument(skip(config))]
async fn run_cli_command(
    config: Config,
    flags: &GlobalFlags,
    args: &[String],
) -> Result<(), Box<dyn Error>> {
    let dry_run_model = flags.dry_run.then(|| Arc::new(StaticNetworkModel::default()));

    let context = match &dry_run_model {
        Some(model) => {
            debug!("dry run: submits are kept in memory");
            CliContext::with_network(config, model.clone() as Arc<dyn NetworkModel>)
        }
        None => CliContext::new(config),
    };
    let cli_service = CliService::new(context);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    if category == "help" {
        println!("{}", cli_service.help(args.get(1).map(|s| s.as_str())));
        return Ok(());
    }

    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    let result = cli_service
        .execute_command(category, command, command_args)
        .await;

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }

            if let Some(model) = dry_run_model {
                for request in model.applied().await {
                    println!("{}", request.settings.to_json_pretty()?);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
