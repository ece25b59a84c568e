use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use puzzleboard_core::{
    BoardQuery, Config, DateRange, RecordStore, leaderboard, ranking, summary, to_csv,
};

use crate::commands::{format_scores, paint_player};

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &Config,
    scores: &impl RecordStore,
    game: &str,
    players: Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    all_rows: bool,
    ranked: bool,
    csv: bool,
) -> Result<()> {
    let records = scores.scan_all()?;

    let mut query = BoardQuery::new(game);
    if !players.is_empty() {
        query.players = Some(players);
    }
    query.range = range_from(from, to)?;
    query.best_per_day = !all_rows;

    let rows = if ranked {
        ranking(&records, &query, config)?
    } else {
        leaderboard(&records, &query, config)?
    };

    if csv {
        print!("{}", to_csv(&rows));
        return Ok(());
    }

    if rows.is_empty() {
        println!("No scores for {}.", game);
        return Ok(());
    }

    println!("{}", format!("{} leaderboard", game).bold());
    for (index, row) in rows.iter().enumerate() {
        let rank = if ranked {
            format!("{:>3}. ", index + 1)
        } else {
            String::new()
        };
        println!(
            "{}{}  {:<12}  {}",
            rank,
            row.game_date,
            paint_player(config, &row.player_id),
            format_scores(&row.scores, &row.units)
        );
    }

    let filtered: Vec<_> = records
        .iter()
        .filter(|r| r.game_name == game)
        .cloned()
        .collect();
    let stats = summary(&filtered);
    println!(
        "{}",
        format!(
            "{} submissions, {} players",
            stats.total_rows, stats.unique_players
        )
        .dimmed()
    );
    Ok(())
}

fn range_from(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Option<DateRange>> {
    match (from, to) {
        (None, None) => Ok(None),
        (from, to) => {
            let start = from.unwrap_or(NaiveDate::MIN);
            let end = to.unwrap_or(NaiveDate::MAX);
            Ok(Some(DateRange::new(start, end)?))
        }
    }
}
