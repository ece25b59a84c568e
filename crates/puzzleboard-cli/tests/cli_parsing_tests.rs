//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would touch the data files).

use chrono::NaiveDate;
use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "puzzleboard")]
struct Args {
    #[arg(short, long, default_value = "puzzleboard.toml")]
    config: String,

    #[arg(short, long, default_value = ".")]
    data_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Submit {
        #[arg(short, long)]
        player: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        text: Option<String>,
    },
    Board {
        game: String,
        #[arg(long)]
        players: Vec<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        all_rows: bool,
        #[arg(long)]
        ranked: bool,
        #[arg(long)]
        csv: bool,
    },
    Delete {
        #[arg(short, long)]
        player: String,
        #[arg(long)]
        date: NaiveDate,
    },
}

#[test]
fn submit_with_inline_text() {
    let args = Args::parse_from([
        "puzzleboard",
        "submit",
        "--player",
        "ada",
        "Pinpoint #135 | 3 guesses",
    ]);
    match args.command {
        Command::Submit { player, date, text } => {
            assert_eq!(player, "ada");
            assert!(date.is_none());
            assert_eq!(text.as_deref(), Some("Pinpoint #135 | 3 guesses"));
        }
        _ => panic!("expected submit command"),
    }
}

#[test]
fn submit_date_override() {
    let args = Args::parse_from([
        "puzzleboard",
        "submit",
        "--player",
        "ada",
        "--date",
        "2025-06-01",
    ]);
    match args.command {
        Command::Submit { date, .. } => {
            assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1));
        }
        _ => panic!("expected submit command"),
    }
}

#[test]
fn board_flags_and_defaults() {
    let args = Args::parse_from([
        "puzzleboard",
        "board",
        "Queens",
        "--players",
        "ada",
        "--players",
        "grace",
        "--ranked",
    ]);
    match args.command {
        Command::Board {
            game,
            players,
            all_rows,
            ranked,
            csv,
            ..
        } => {
            assert_eq!(game, "Queens");
            assert_eq!(players, vec!["ada", "grace"]);
            assert!(!all_rows);
            assert!(ranked);
            assert!(!csv);
        }
        _ => panic!("expected board command"),
    }
}

#[test]
fn board_date_range() {
    let args = Args::parse_from([
        "puzzleboard",
        "board",
        "Zip",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-07",
    ]);
    match args.command {
        Command::Board { from, to, .. } => {
            assert_eq!(from, NaiveDate::from_ymd_opt(2025, 6, 1));
            assert_eq!(to, NaiveDate::from_ymd_opt(2025, 6, 7));
        }
        _ => panic!("expected board command"),
    }
}

#[test]
fn delete_requires_player_and_date() {
    let args = Args::parse_from([
        "puzzleboard",
        "delete",
        "--player",
        "ada",
        "--date",
        "2025-06-01",
    ]);
    match args.command {
        Command::Delete { player, date } => {
            assert_eq!(player, "ada");
            assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        }
        _ => panic!("expected delete command"),
    }
    assert!(Args::try_parse_from(["puzzleboard", "delete", "--player", "ada"]).is_err());
}

#[test]
fn global_paths_have_defaults() {
    let args = Args::parse_from(["puzzleboard", "board", "Queens"]);
    assert_eq!(args.config, "puzzleboard.toml");
    assert_eq!(args.data_dir, ".");
}
