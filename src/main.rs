//! Spellcheck - Main entrypoint.
//!
//! Loads the configuration and the word list, then answers a single query
//! about one word on stdout. Logs and errors go to stderr.

use clap::{Parser, Subcommand};
use spellcheck_lib::config::{ConfigLoader, LogConfig, SpellConfig, ENV_PREFIX};
use spellcheck_lib::error::{
    report_error, set_error_reporter, ErrorContext, SpellError, SpellResult, TracingErrorReporter,
};
use spellcheck_lib::{dictionary, Query};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the spell checker.
#[derive(Parser, Debug)]
#[clap(name = "spellcheck", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overrides the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Print answers as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Tell whether a word is in the dictionary
    Check {
        /// Word to look up
        word: String,
    },

    /// List words one character longer than the given one
    Complete {
        /// Prefix to extend
        word: String,
    },

    /// List words that replace the first character leaving the dictionary
    Correct {
        /// Misspelled word
        word: String,
    },

    /// List words that replace the last character
    EndCorrect {
        /// Misspelled word
        word: String,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system on stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> SpellResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| SpellError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Executes the parsed command with a loaded configuration.
fn run(args: Args, mut config: SpellConfig) -> SpellResult<()> {
    let (query, word) = match args.command {
        Command::Check { word } => (Query::Check, word),
        Command::Complete { word } => (Query::Complete, word),
        Command::Correct { word } => (Query::Correct, word),
        Command::EndCorrect { word } => (Query::EndCorrect, word),
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&SpellConfig::default())
                .map_err(|e| SpellError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
    };

    if let Some(path) = args.dictionary {
        config.dictionary.path = path;
    }
    let trie = dictionary::load(&config.dictionary)?;

    let output = query.run(&trie, &word)?;
    if args.json {
        println!("{}", output.to_json()?);
    } else {
        print!("{output}");
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();

    let log = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let mut context = ErrorContext::new(e.into(), "config");
            if let Some(path) = &args.config {
                context = context.with_details(format!("config: {}", path.display()));
            }
            report_error(context);
            process::exit(1);
        }
    };

    let dictionary_path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| config.dictionary.path.clone());
    if let Err(e) = run(args, config) {
        let context = match e {
            SpellError::Dictionary(_) => ErrorContext::new(e, "dictionary")
                .with_details(format!("dictionary: {}", dictionary_path.display())),
            _ => ErrorContext::new(e, "spellcheck"),
        };
        report_error(context);
        process::exit(1);
    }
}
