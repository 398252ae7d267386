use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use chatrooms::application::services::ScenarioService;
use chatrooms::infrastructure::adapters::ConsoleSink;
use chatrooms::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "chatrooms")]
#[command(about = "Themed chat rooms with policy-driven message workflows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "chatrooms.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured script and print each room's history
    Run {
        /// Print room snapshots as JSON instead of plain history
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { json } => run(&cli.config, json),
        Commands::Version => {
            println!("chatrooms v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &str) -> Config {
    if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn run(config_path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path);

    let mut sink = ConsoleSink::new();
    if let Some(prefix) = &config.output.prefix {
        sink = sink.with_prefix(prefix.clone());
    }

    let scenario = ScenarioService::from_config(&config, Arc::new(sink))?;
    scenario.run_script(&config.script)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scenario.snapshots())?);
        return Ok(());
    }

    for room in scenario.rooms() {
        println!("\n{} Chat History:", room.room_name());
        for line in room.history() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn init_config() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to chatrooms.yaml and adjust as needed.");
    Ok(())
}
