use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use typebuilder::cli::{Cli, Commands};
use typebuilder::commands;
use typebuilder_core::TypeBuilderError;

fn main() -> ExitCode {
    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    debug!("Parsed arguments: {:?}", cli);

    let result = match &cli.command {
        Commands::Generate(args) => commands::generate::run(&cli, args.clone()),
        Commands::Preview(args) => commands::preview::run(&cli, args.clone()),
        Commands::Init(args) => commands::init::run(&cli, args.clone()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already shown to the user by the command
        Err(TypeBuilderError::Builder(_)) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("typebuilder={level},typebuilder_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
