use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use mnemonic_core::utils::logging;
use mnemonic_core::{generate, import_phrase, log_warn, validate, CoreSettings, ImportResult};

#[derive(Parser)]
#[command(
    name = "mnemonic-core",
    version,
    about = "Generate and validate 12-word phrases with unique words and starting letters"
)]
struct Cli {
    /// Word list file, one word per line (defaults to BIP39 English)
    #[arg(long, global = true, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new phrase
    Generate,
    /// Check a 12-word phrase against the uniqueness contract
    Validate {
        /// Phrase words (a single quoted phrase also works)
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Import a 12- or 24-word phrase
    Import {
        #[arg(required = true)]
        phrase: Vec<String>,
    },
    /// Run the generator repeatedly and report failures
    TestBatch {
        /// Number of trials (defaults to the configured batch size)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Run trials in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = CoreSettings::from_env().context("invalid environment configuration")?;
    if let Some(path) = cli.wordlist {
        settings.word_list_path = Some(path);
    }
    if cli.debug {
        settings.debug_logging = true;
    }
    if settings.debug_logging {
        logging::enable_debug();
    }
    for warning in settings.validate() {
        log_warn!("cli", warning);
    }

    match cli.command {
        Command::Generate => {
            let word_list = settings.load_word_list()?;
            let result = generate(&word_list);
            if cli.json {
                print_json(&result)?;
            } else if result.is_valid {
                println!("{}", result.mnemonic.to_phrase().as_str());
            }
            if !result.is_valid {
                bail!(
                    "generation failed: {}",
                    result.error.unwrap_or_default()
                );
            }
        }
        Command::Validate { words } => {
            let words = split_words(&words);
            let result = validate(&words);
            if cli.json {
                print_json(&result)?;
            } else if result.is_valid {
                println!("✅ Valid: 12 unique words with unique starting letters");
            } else {
                println!("❌ Invalid: {}", result.error.as_deref().unwrap_or_default());
            }
            if !result.is_valid {
                bail!("phrase rejected");
            }
        }
        Command::Import { phrase } => {
            let result: ImportResult = import_phrase(&phrase.join(" ")).into();
            if cli.json {
                print_json(&result)?;
            } else if result.accepted {
                let note = if result.contract_checked {
                    "unique-letter contract verified"
                } else {
                    "not checked against the unique-letter contract"
                };
                println!("✅ Accepted {}-word phrase ({})", result.word_count, note);
            } else {
                println!("❌ Rejected: {}", result.error.as_deref().unwrap_or_default());
            }
            if !result.accepted {
                bail!("phrase rejected");
            }
        }
        Command::TestBatch { count, parallel } => {
            let trials = count.unwrap_or(settings.batch_trials);
            if trials == 0 {
                bail!("count must be a positive integer");
            }
            let word_list = settings.load_word_list()?;
            let report = settings
                .batch_runner(&word_list)
                .trials(trials)
                .parallel(parallel || settings.parallel_batch)
                .run();

            if cli.json {
                print_json(&report)?;
            } else if report.success {
                println!(
                    "✓ All {} mnemonics generated successfully!",
                    report.total_generated
                );
            } else {
                println!(
                    "✗ {} failures out of {} generations",
                    report.failure_count(),
                    report.total_generated
                );
                for error in &report.errors {
                    println!("    {}", error);
                }
            }
            if !report.success {
                bail!("batch self-test failed");
            }
        }
    }

    Ok(())
}

/// Accept both `validate a b c` and `validate "a b c"`
fn split_words(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
