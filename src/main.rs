use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use songscribe::app::{PipelineOptions, run_translate_command};
use songscribe::cli::Cli;
use songscribe::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let Some(credentials) = cli
        .credentials
        .clone()
        .or_else(|| config.service.credentials.clone())
    else {
        eprintln!(
            "{}",
            "No credentials file given (use --credentials or set service.credentials in the config)"
                .red()
        );
        std::process::exit(1);
    };

    let options = PipelineOptions {
        input: cli.input,
        credentials,
        out_dir: cli.out_dir,
        language: cli.language.or_else(|| config.pipeline.language.clone()),
        target_language: config.service.target_language.clone(),
        pause_secs: cli.pause.unwrap_or(config.pipeline.pause_seconds),
        chunk_length_ms: cli.chunk_length.unwrap_or(config.pipeline.chunk_length_ms),
        keep_intermediate: cli.keep_intermediate,
        overwrite: cli.overwrite,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    if options.pause_secs < 0.0 {
        bail!("pause threshold must not be negative");
    }

    if let Err(e) = run_translate_command(&config, options).await {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/songscribe/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path).with_context(|| format!("failed to load config {}", path.display()))?
    } else {
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)
            .with_context(|| format!("failed to load config {}", default_path.display()))?
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}
