use anyhow::Result;
use clap::Parser;
use mindflip::config::CliConfig;
use mindflip::{Config, Difficulty, GameMode, LaunchRequest, SetupInterface, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mindflip")]
#[command(about = "A memory matching card game for the terminal")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Card theme to start with directly, skipping the menus
    /// (fruits, animals, sports or space)
    #[arg(short, long)]
    preset: Option<String>,

    /// Game mode for a direct start (solo or duel)
    #[arg(short, long)]
    mode: Option<String>,

    /// Difficulty for a direct start (easy, medium or hard)
    #[arg(long)]
    difficulty: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("mindflip={},warn", log_level))
        .init();

    info!("Starting MindFlip v{}", VERSION);

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => Config::from_file(&config_path)?,
        None => Config::default(),
    };

    let mode = cli.mode.as_deref().map(str::parse::<GameMode>).transpose()?;
    let difficulty = cli
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()?;

    config.merge_with_cli(CliConfig {
        log_level: None,
        debug: cli.debug,
        theme: None,
        mode,
        difficulty,
    });

    let mut interface = SetupInterface::new(config).await?;

    // The setup screen hands the finished selection to this launcher.
    // A real game engine would take over here.
    let mut launcher = |request: LaunchRequest| {
        info!(
            "Session handed to engine: {} / \"{}\" / {} / {} cards",
            request.mode,
            request.theme_name,
            request.difficulty,
            request.items.len()
        );
    };

    let outcome = match cli.preset {
        Some(preset_id) => {
            info!("Direct start with preset: {}", preset_id);
            interface
                .launch_directly(&preset_id, mode, difficulty, &mut launcher)
                .await
                .map(Some)
        }
        None => interface.run(&mut launcher).await,
    };

    match outcome {
        Ok(Some(request)) => {
            info!("Setup finished with theme \"{}\"", request.theme_name);
        }
        Ok(None) => {
            info!("Setup left without starting a game");
        }
        Err(e) => {
            error!("Setup error: {}", e);
            eprintln!("An error occurred: {}", e);
            std::process::exit(1);
        }
    }

    info!("Session ended");
    Ok(())
}
