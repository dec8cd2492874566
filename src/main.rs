//! Hinglish translator: English/Hindi text and documents to Hinglish

use clap::Parser;
use hinglish_translator::cli::{self, Cli, Commands, ConfigAction};
use hinglish_translator::config::Config;
use hinglish_translator::error::{HinglishError, Result};
use hinglish_translator::input::{DocumentExtractor, UploadedFile};
use hinglish_translator::llm::{ensure_translatable, GeminiClient, Translator};
use hinglish_translator::output::{save_text, ConsoleFormatter, TranslationReport};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        log::log!(e.log_level(), "Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    let formatter = ConsoleFormatter::new(config.output.color_output, config.output.show_stats);

    match command {
        Commands::Translate { text, file, tone, save } => {
            let tone = match tone {
                Some(tone) => cli::parse_tone(&tone).map_err(HinglishError::InvalidInput)?,
                None => config.translation.default_tone,
            };

            let (source_name, input) = match (text, file) {
                (Some(text), _) => (None, text),
                (None, Some(path)) => {
                    let upload = UploadedFile::from_path(&path, config.max_file_bytes()).await?;
                    let text = DocumentExtractor::new().extract(&upload).await?;
                    (Some(upload.name), text)
                }
                (None, None) => (None, read_stdin()?),
            };

            let input = ensure_translatable(&input)?;

            let client = GeminiClient::new(
                config.api_key(),
                config.translation.base_url.clone(),
                config.request_timeout(),
            )?;
            let translator = Translator::new(client)
                .with_model(config.translation.model.clone())
                .with_temperature(config.translation.temperature);

            let spinner = spinner("Translating to Hinglish...");
            let result = translator.translate(input, tone).await;
            spinner.finish_and_clear();
            let translation = result?;

            let report = TranslationReport::new(source_name, tone, translator.model(), input, translation);
            print!("{}", formatter.format_translation(&report));

            if let Some(save) = save {
                let path = save.unwrap_or_else(|| PathBuf::from(report.download_file_name()));
                let saved = save_text(&path, &report.translation).await?;
                println!("Saved translation to {}", saved.display());
            }
        }

        Commands::Extract { file, save } => {
            let upload = UploadedFile::from_path(&file, config.max_file_bytes()).await?;
            let text = DocumentExtractor::new().extract(&upload).await?;

            match save {
                Some(path) => {
                    let saved = save_text(&path, &text).await?;
                    info!("Extracted {} characters from {}", text.len(), upload.name);
                    println!("Saved extracted text to {}", saved.display());
                }
                None => print!("{}", formatter.format_extracted(&upload.name, &text)),
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration ({})\n", path.display());
                    println!("Model: {}", config.translation.model);
                    println!("Endpoint: {}", config.translation.base_url);
                    println!("API key variable: {}", config.translation.api_key_env);
                    println!("Temperature: {}", config.translation.temperature);
                    println!("Timeout: {}s", config.translation.timeout_secs);
                    println!("Default tone: {}", config.translation.default_tone);
                    println!("Max upload size: {} MB", config.input.max_file_size_mb);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
