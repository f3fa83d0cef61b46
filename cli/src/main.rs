//! CLI entrypoint for GOGAR
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gogar_application::{GameRepository, PlayGameUseCase};
use gogar_infrastructure::{ConfigLoader, FileConfig, JsonGameRepository, JsonlTranscriptLogger};
use gogar_presentation::{Cli, ConsoleFormatter, GameRepl, OutputConfig, ReplConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("--log-file must name a file: {}", path.display());
    };
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_config && cli.config.is_some() {
        bail!("--config and --no-config cannot be used together");
    }

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources(cli.config.as_deref()));
        return Ok(());
    }

    // Flushes the log file on drop
    let _log_guard = init_logging(&cli)?;

    info!("Starting GOGAR");

    let file_config = load_config(&cli)?;
    let game_config = file_config.to_game_config();
    let output_config = OutputConfig {
        color: file_config.output.color && !cli.no_color,
        width: file_config.output.width,
    };
    let repl_config = ReplConfig {
        history_file: file_config.repl.history_file.clone(),
        prompt: file_config.repl.prompt.clone(),
    };

    // === Dependency Injection ===
    let repository = cli.session.clone().map(JsonGameRepository::new);
    let saved_game = match &repository {
        Some(repository) => repository.load()?,
        None => None,
    };
    let resumed = saved_game.is_some();

    let formatter = ConsoleFormatter::new(&output_config);
    let mut use_case = match saved_game {
        Some(game) => PlayGameUseCase::new(game, game_config, formatter)?,
        None => PlayGameUseCase::new_game(game_config, formatter)?,
    };

    if let Some(path) = &cli.transcript
        && let Some(logger) = JsonlTranscriptLogger::new(path)
    {
        info!(path = %path.display(), "Writing transcript");
        use_case = use_case.with_transcript_logger(Arc::new(logger));
    }

    let game = if cli.is_batch() {
        for command in &cli.execute {
            let response = use_case.execute(command);
            print!("{}", response.output);
            if response.is_quit() {
                break;
            }
        }
        use_case.into_game()
    } else {
        let mut repl = GameRepl::new(use_case, repl_config).with_resumed(resumed);
        repl.run()?;
        repl.into_use_case().into_game()
    };

    if let Some(repository) = &repository {
        repository
            .save(&game)
            .with_context(|| format!("Failed to save session to {}", repository.path().display()))?;
    }

    Ok(())
}
