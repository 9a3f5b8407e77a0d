// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::{Config, TranslationProvider};
use crate::translation::{TranslationRequest, Translator};

mod app_config;
mod errors;
mod language_utils;
mod providers;
mod token_utils;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    OpenAI,
    Ollama,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a document using AI providers (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for redraft
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input text file to translate, or '-' to read from stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Source language code or name (e.g., 'en', 'English')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code or name (e.g., 'fr', 'French')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Target country for colloquial adaptation (e.g., 'Mexico')
    #[arg(long)]
    country: Option<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Token budget above which the input is split into chunks
    #[arg(long)]
    token_budget: Option<usize>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// redraft - AI document translation with a draft, reflection and
/// improvement loop.
#[derive(Parser, Debug)]
#[command(name = "redraft")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered document translation tool")]
#[command(long_about = "redraft translates documents with a three-pass AI pipeline: an initial
draft, an itemized critique, and a final edit. Long documents are split into
token-bounded chunks translated with full-document context.

EXAMPLES:
    redraft document.txt -s en -t fr            # Translate using default config
    redraft - -s en -t es --country Mexico      # Read stdin, Mexican Spanish
    redraft -p ollama -m mistral document.txt   # Use a local Ollama model
    redraft --token-budget 500 document.txt     # Chunk more aggressively
    redraft completions bash > redraft.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PROVIDERS:
    openai - OpenAI API (requires OPENAI_API_KEY or api_key in config)
    ollama - Local Ollama server (default: llama3.2:3b)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file to translate, or '-' to read from stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Source language code or name (e.g., 'en', 'English')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code or name (e.g., 'fr', 'French')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Target country for colloquial adaptation (e.g., 'Mexico')
    #[arg(long)]
    country: Option<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Token budget above which the input is split into chunks
    #[arg(long)]
    token_budget: Option<usize>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "redraft", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_path,
                source_language: cli.source_language,
                target_language: cli.target_language,
                country: cli.country,
                provider: cli.provider,
                model: cli.model,
                token_budget: cli.token_budget,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        // Find the provider config and update the model
        let provider_str = config.translation.provider.to_lowercase_string();
        if let Some(provider_config) = config
            .translation
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.model = model.clone();
        }
    }

    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }

    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }

    if let Some(country) = &options.country {
        config.country = country.clone();
    }

    if let Some(token_budget) = options.token_budget {
        config.token_budget = token_budget;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Read the source text
    let source_text = read_input(&options.input_path)?;
    if source_text.trim().is_empty() {
        return Err(anyhow!("Input is empty: {:?}", options.input_path));
    }

    let total_tokens = token_utils::count_tokens(&source_text)
        .map_err(|e| anyhow!("Failed to count tokens: {}", e))?;
    let num_chunks = if total_tokens < config.token_budget {
        1
    } else {
        total_tokens.div_ceil(config.token_budget)
    };
    debug!(
        "Input is {} tokens, will be processed as {} chunk(s)",
        total_tokens, num_chunks
    );

    // Build the translator and run the pipeline
    let translator = Translator::from_config(&config)?;
    let request = TranslationRequest::new(
        &config.source_language,
        &config.target_language,
        source_text,
    )
    .country(&config.country)
    .token_budget(config.token_budget);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Translating {} -> {} ({} tokens, {} chunk(s))",
        config.source_language, config.target_language, total_tokens, num_chunks
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = translator.translate(&request).await;
    spinner.finish_and_clear();

    let translation = result.map_err(|e| anyhow!("Translation failed: {}", e))?;

    // Write the result
    match &options.output {
        Some(output_path) => {
            std::fs::write(output_path, &translation)
                .context(format!("Failed to write output file: {:?}", output_path))?;
            info!("Success: {:?}", output_path);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(translation.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

// Helper function to read the source text from a file or stdin
fn read_input(input_path: &Path) -> Result<String> {
    if input_path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    if !input_path.exists() {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    std::fs::read_to_string(input_path)
        .context(format!("Failed to read input file: {:?}", input_path))
}
