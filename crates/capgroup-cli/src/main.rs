//! capgroup CLI
//!
//! Compile a pattern, match it against one input, and print every capture
//! group that participated.

#![forbid(unsafe_code)]

mod logging;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use capgroup::config::env::home_dir;
use capgroup::config::file::DEFAULT_FILE_NAME;
use capgroup::{CaptureMatcher, Config, ConfigLoader, Dialect, EnvConfig};
use clap::Parser;

use crate::report::{MatchReport, OutputFormat};

/// Match a POSIX extended regular expression and print its capture groups
#[derive(Debug, Parser)]
#[command(name = "capgroup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern to compile (ERE unless --dialect says otherwise)
    pattern: String,

    /// Input string to match against
    input: String,

    /// Report exactly this many group slots, counting group 0
    #[arg(short = 'n', long)]
    max_groups: Option<usize>,

    /// Pattern dialect: ere or rust
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Ignore case (REG_ICASE)
    #[arg(short, long)]
    ignore_case: bool,

    /// Line-oriented matching (REG_NEWLINE)
    #[arg(long)]
    newline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file path
    #[arg(short, long, env = "CAPGROUP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Exit status when the pattern does not match.
const EXIT_NO_MATCH: u8 = 1;

/// Exit status for compile and configuration errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli, &EnvConfig::default()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(err) = logging::init_logging(&config.logging) {
        eprintln!("warning: {err}");
    }

    match run(&cli, &config, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Defaults, then the config file, then `CAPGROUP_*`, then flags.
fn load_config(cli: &Cli, env: &EnvConfig) -> capgroup::Result<Config> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::new().load(path)?,
        None => {
            let mut loader = ConfigLoader::new().add_path(".");
            if let Some(home) = home_dir() {
                loader = loader.add_path(home.join(".config"));
            }
            loader.load_by_name(DEFAULT_FILE_NAME)?.unwrap_or_default()
        }
    };
    resolve_config(cli, config, env)
}

/// Overlay the environment snapshot and then the flags onto `config`.
fn resolve_config(cli: &Cli, mut config: Config, env: &EnvConfig) -> capgroup::Result<Config> {
    env.apply(&mut config)?;

    if let Some(dialect) = cli.dialect {
        config.matcher.dialect = dialect;
    }
    if let Some(max_groups) = cli.max_groups {
        config.matcher.max_groups = Some(max_groups);
    }
    config.matcher.case_insensitive |= cli.ignore_case;
    config.matcher.newline |= cli.newline;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    Ok(config)
}

/// Compile, match, print. Returns whether the input matched.
fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> capgroup::Result<bool> {
    let mut matcher: CaptureMatcher = match config.matcher.compile(&cli.pattern) {
        Ok(matcher) => matcher,
        Err(err) => {
            writeln!(out, "Couldn't compile regular expression.")?;
            return Err(err.into());
        }
    };
    tracing::debug!(
        pattern = %cli.pattern,
        max_groups = matcher.max_groups(),
        "matching"
    );

    let nmatch = matcher.max_groups();
    let matched = match matcher.matches(&cli.input) {
        Some(groups) => {
            MatchReport::matched(&cli.pattern, &groups).write(out, cli.format)?;
            true
        }
        None => {
            MatchReport::unmatched(&cli.pattern, &cli.input, nmatch).write(out, cli.format)?;
            false
        }
    };
    Ok(matched)
}
