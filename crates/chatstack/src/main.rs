use anyhow::{Context, Result};
use chatstack_config::{SystemConfig, DEFAULT_CONFIG_PATH};
use chatstack_wizard::{run_wizard, WizardDefaults};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use std::path::PathBuf;
use tracing::info;

mod names;
mod prompts;

/// Interactive configuration wizard for a chatbot stack deployment
#[derive(Parser)]
#[command(name = "chatstack")]
#[command(version)]
#[command(about = "Collect chatbot deployment settings and write config.json", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deployment prefix (pre-seeds the prefix prompt)
    #[arg(long, value_name = "PREFIX", global = true)]
    prefix: Option<String>,

    /// Existing configuration file to seed prompt defaults
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Where to write the configuration document
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the wizard (default if no subcommand given)
    Create,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Some(Commands::Create) | None => run_create(cli),
    }
}

fn init_tracing(level: Option<&str>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Ignore error if a subscriber is already set (idempotent)
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer()),
    );
}

fn run_create(cli: Cli) -> Result<()> {
    let input_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // A malformed existing document aborts here, before any prompt.
    let mut defaults = match SystemConfig::load(&input_path)? {
        Some(existing) => {
            info!("Seeding prompt defaults from {}", input_path.display());
            WizardDefaults::from_config(&existing)
        }
        None => WizardDefaults::default(),
    };

    if let Some(prefix) = cli.prefix {
        defaults.prefix = prefix;
    }
    if defaults.prefix.is_empty() {
        defaults.prefix = names::suggest();
    }

    println!();
    println!("chatstack create - deployment configuration");
    println!();

    let mut collector = prompts::TerminalCollector::new();
    let config = run_wizard(&mut collector, &defaults)?;

    println!();
    print!("{}", config.to_pretty_json()?);
    println!();

    let proceed = Confirm::new()
        .with_prompt("Create the configuration with the above settings")
        .default(true)
        .interact()
        .context("Confirmation prompt failed")?;

    if !proceed {
        println!("Skipping configuration write.");
        return Ok(());
    }

    config.save(&output_path)?;

    println!();
    println!("Configuration written to {}", output_path.display());
    println!();
    println!("Next steps:");
    println!("  Run your deployment with this file available at the well-known path:");
    println!("    {}", output_path.display());
    println!();

    Ok(())
}
