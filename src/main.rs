//! plan-reflect - Plan/Reflection Planner
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plan_reflect::cli::commands;
use plan_reflect::core::config::OutputFormat;
use plan_reflect::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// plan-reflect - Plan/Reflection Planner for tool-using agents
#[derive(Parser, Debug)]
#[command(name = "plan-reflect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug output
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Pass responses through without planning
    #[arg(long, global = true)]
    no_planner: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the planning instruction sent to the model
    Instruction,

    /// Process a model response (JSON) from a file or stdin
    Process {
        /// Response file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Also print parts marked as thought
        #[arg(long, short = 't')]
        show_thoughts: bool,

        /// Print the processed response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the default configuration
    Config {
        /// Write the default configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load()?;

    // Apply CLI overrides
    if args.debug {
        config.logging.debug = true;
    }

    if args.no_planner {
        config.planner.enabled = false;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let output = match args.command {
        Command::Instruction => commands::instruction(),
        Command::Process {
            file,
            show_thoughts,
            json,
        } => {
            if show_thoughts {
                config.output.show_thoughts = true;
            }
            if json {
                config.output.format = OutputFormat::Json;
            }

            let input = commands::read_input(file.as_deref())?;
            commands::process(&input, &config)?
        }
        Command::Config { init } => commands::config(init)?,
    };

    println!("{}", output);
    Ok(())
}
