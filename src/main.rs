//! Unscramble - CLI
//!
//! Reads guesses from stdin, one per line, until end of input.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unscramble::{
    commands::run_play,
    config::{
        DEFAULT_DICTIONARY, DEFAULT_MIN_LENGTH, DictionarySource, GameConfig, parse_min_length,
    },
    core::GameResult,
    error::{ConfigError, game_exit_status},
    output::{Style, print_config_error, print_error},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Guess words made from a set of letters",
    version,
    author
)]
struct Cli {
    /// Shortest word accepted as a guess (3 to 5)
    #[arg(
        long,
        value_name = "numchars",
        default_value_t = DEFAULT_MIN_LENGTH,
        value_parser = parse_min_length
    )]
    min_length: usize,

    /// Letters to play with (default: 7 random letters)
    #[arg(long, value_name = "chars")]
    letters: Option<String>,

    /// Dictionary file with one word per line, or 'builtin' for the embedded list
    /// (use './builtin' for a file of that name)
    #[arg(long, value_name = "file", env = "UNSCRAMBLE_DICT", default_value = DEFAULT_DICTIONARY)]
    dict: String,

    /// Seed for the random letters, for repeatable games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(result) => ExitCode::from(game_exit_status(result)),
        Err(err) => {
            if let Some(config_err) = err.downcast_ref::<ConfigError>() {
                print_config_error(config_err);
                ExitCode::from(config_err.exit_status())
            } else {
                print_error(&err);
                ExitCode::FAILURE
            }
        }
    }
}

/// Log to stderr so the game transcript on stdout stays clean
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Parse arguments, turning every clap failure into a usage error
///
/// `--help` and `--version` print and exit here.
fn parse_cli<I, T>(args: I) -> Result<Cli, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            debug!(error = %e, "rejected command line");
            ConfigError::Usage
        }
    })
}

fn run() -> Result<GameResult> {
    let cli = parse_cli(std::env::args_os())?;

    let dictionary = DictionarySource::from_arg(&cli.dict);
    let letters = cli.letters.as_deref();
    let config = match cli.seed {
        Some(seed) => GameConfig::new(
            cli.min_length,
            letters,
            dictionary,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => GameConfig::new(cli.min_length, letters, dictionary, &mut rand::rng()),
    }?;
    let session = config.into_session()?;

    let style = if io::stdout().is_terminal() {
        Style::Colored
    } else {
        Style::Plain
    };
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_play(session, stdin, &mut stdout, style).context("failed to run the game")
}
