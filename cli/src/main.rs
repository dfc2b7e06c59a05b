//! Seeded Mock CLI - reproducible mock values from the command line
//!
//! # Commands
//!
//! - `seeded-mock int --min 1 --max 6` - uniform integer
//! - `seeded-mock string --length 12 --charset hex` - random string
//! - `seeded-mock color --format rgb` - random color
//! - `seeded-mock pick a b c` - one of the given items
//!
//! `--seed` reseeds the ambient stream before generating. `--local-seed`
//! isolates the invocation instead: with `--count`, each line gets its own
//! child seed so any line can be reproduced on its own.
//!
//! Output is one JSON value per line on stdout; logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Reproducible mock data generator
#[derive(Parser, Debug)]
#[command(name = "seeded-mock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reseed the ambient stream (integer or text)
    #[arg(short, long, global = true, env = "SEEDED_MOCK_SEED")]
    seed: Option<String>,

    /// Isolate this invocation with its own seed (integer or text)
    #[arg(short, long, global = true)]
    local_seed: Option<String>,

    /// Number of values to generate
    #[arg(short = 'n', long, global = true, default_value = "1")]
    count: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Uniform integer in [min, max]
    Int {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        max: f64,
    },

    /// Uniform float in [min, max)
    Float {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        max: f64,
        /// Decimals to keep
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Boolean with the given probability of true
    Bool {
        #[arg(long, default_value = "0.5")]
        probability: f64,
    },

    /// Random string
    String {
        #[arg(long, default_value = "8")]
        length: usize,
        #[arg(long, value_enum, default_value = "alphanumeric")]
        charset: CharsetArg,
        /// Characters to draw from when --charset custom
        #[arg(long)]
        chars: Option<String>,
    },

    /// Random color
    Color {
        #[arg(long, value_enum, default_value = "hex")]
        format: ColorFormat,
    },

    /// Deterministic version-4 layout UUID
    Uuid,

    /// Instant between two RFC 3339 timestamps
    Date {
        #[arg(long, default_value = "2000-01-01T00:00:00Z")]
        from: String,
        #[arg(long, default_value = "2030-01-01T00:00:00Z")]
        to: String,
    },

    /// One of the given items
    Pick {
        #[arg(required = true)]
        items: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CharsetArg {
    Alphanumeric,
    Alpha,
    Numeric,
    Hex,
    Custom,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    let invocation = commands::Invocation {
        seed: cli.seed.as_deref().map(commands::parse_seed),
        local_seed: cli.local_seed.as_deref().map(commands::parse_seed),
        count: cli.count,
    };

    let request = match cli.command {
        Commands::Int { min, max } => commands::Request::Int { min, max },
        Commands::Float {
            min,
            max,
            precision,
        } => commands::Request::Float {
            min,
            max,
            precision,
        },
        Commands::Bool { probability } => commands::Request::Bool { probability },
        Commands::String {
            length,
            charset,
            chars,
        } => commands::Request::String {
            length,
            charset: commands::charset(charset, chars)?,
        },
        Commands::Color { format } => commands::Request::Color { format },
        Commands::Uuid => commands::Request::Uuid,
        Commands::Date { from, to } => commands::Request::Date {
            from: commands::parse_instant(&from)?,
            to: commands::parse_instant(&to)?,
        },
        Commands::Pick { items } => commands::Request::Pick { items },
    };

    let mut stdout = std::io::stdout().lock();
    commands::run(&invocation, &request, &mut stdout)?;
    Ok(())
}
