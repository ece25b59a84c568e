use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use puzzleboard_core::{Config, JsonlStore, MetricSlot, RawPost, ScoreRecord};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "puzzleboard", about = "Puzzle game score tracker", version)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "puzzleboard.toml")]
    config: PathBuf,

    /// Directory holding the score and post data files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a pasted share post and record the score
    Submit {
        #[arg(short, long)]
        player: String,
        /// Puzzle date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Post text; read from stdin when omitted
        text: Option<String>,
    },
    /// Show the leaderboard for one game
    Board {
        game: String,
        /// Restrict to these players
        #[arg(long)]
        players: Vec<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Keep every submission instead of the best per player per day
        #[arg(long)]
        all_rows: bool,
        /// Order best-first instead of newest-first
        #[arg(long)]
        ranked: bool,
        /// Print the rows as CSV
        #[arg(long)]
        csv: bool,
    },
    /// Per-player progress for one game
    Progress {
        game: String,
        /// Players to chart; defaults to the whole roster
        #[arg(long)]
        players: Vec<String>,
        #[arg(long, value_enum, default_value = "primary")]
        metric: MetricArg,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List stored raw posts, newest first
    Posts {
        #[arg(long)]
        player: Option<String>,
    },
    /// Delete all of a player's scores for one date
    Delete {
        #[arg(short, long)]
        player: String,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Generate sample scores for a game
    Seed {
        game: String,
        /// Players to seed; defaults to the whole roster
        #[arg(long)]
        players: Vec<String>,
        #[arg(long, default_value = "1")]
        start: u32,
        #[arg(long, default_value = "7")]
        end: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricArg {
    Primary,
    Secondary,
}

impl From<MetricArg> for MetricSlot {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Primary => MetricSlot::Primary,
            MetricArg::Secondary => MetricSlot::Secondary,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("puzzleboard=info".parse()?)
                .add_directive("puzzleboard_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let mut scores: JsonlStore<ScoreRecord> =
        JsonlStore::open(args.data_dir.join("scores.jsonl"))?;
    let mut posts: JsonlStore<RawPost> = JsonlStore::open(args.data_dir.join("posts.jsonl"))?;

    match args.command {
        Command::Submit { player, date, text } => {
            commands::submit::run(&config, &mut scores, &mut posts, &player, date, text)
        }
        Command::Board {
            game,
            players,
            from,
            to,
            all_rows,
            ranked,
            csv,
        } => commands::board::run(
            &config, &scores, &game, players, from, to, all_rows, ranked, csv,
        ),
        Command::Progress {
            game,
            players,
            metric,
            from,
            to,
        } => commands::progress::run(&config, &scores, &game, players, metric.into(), from, to),
        Command::Posts { player } => commands::posts::run(&posts, player.as_deref()),
        Command::Delete { player, date } => commands::delete::run(&mut scores, &player, date),
        Command::Seed {
            game,
            players,
            start,
            end,
        } => commands::seed::run(&config, &mut scores, &game, players, start, end),
    }
}
