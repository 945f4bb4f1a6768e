//! Terminal frontend for the incident response training game.

mod commands;
mod terminal;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use commands::play::PlayArgs;

#[derive(Parser)]
#[command(
    name = "irgame",
    about = "Incident Response: The Game, a ransomware response simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through the shift (default)
    Play(PlayOpts),

    /// List every scenario with the effect of each option
    Scenarios,

    /// Show which ending a final score and reputation lead to
    Classify {
        /// Final score
        #[arg(long, allow_negative_numbers = true)]
        score: i64,

        /// Final reputation (percent)
        #[arg(long, allow_negative_numbers = true)]
        reputation: i64,
    },
}

#[derive(Args, Default)]
struct PlayOpts {
    /// Play non-interactively with these option numbers, one per scenario (e.g. 3,1,4,4)
    #[arg(short, long, value_delimiter = ',')]
    choices: Option<Vec<usize>>,

    /// Print the run summary as JSON instead of the game screens
    #[arg(long, requires = "choices")]
    json: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Milliseconds per character when narrating scenarios (0 disables)
    #[arg(long)]
    typewriter_ms: Option<u64>,

    /// Skip the mission briefing
    #[arg(long)]
    skip_briefing: bool,
}

impl From<PlayOpts> for PlayArgs {
    fn from(opts: PlayOpts) -> Self {
        Self {
            choices: opts.choices,
            json: opts.json,
            color: !opts.no_color,
            typewriter_ms: opts.typewriter_ms,
            briefing: !opts.skip_briefing,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(PlayOpts::default()));

    let result = match command {
        Commands::Play(opts) => commands::play::run(opts.into()),
        Commands::Scenarios => commands::scenarios::run(),
        Commands::Classify { score, reputation } => commands::classify::run(score, reputation),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
