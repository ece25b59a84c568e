use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use puzzleboard_core::{Config, DateRange, MetricSlot, RecordStore, progress};

use crate::commands::paint_player;

pub fn run(
    config: &Config,
    scores: &impl RecordStore,
    game: &str,
    players: Vec<String>,
    slot: MetricSlot,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let records = scores.scan_all()?;
    let players = if players.is_empty() {
        config.players.clone()
    } else {
        players
    };
    let range = match (from, to) {
        (None, None) => None,
        (from, to) => Some(DateRange::new(
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        )?),
    };

    let unit = config
        .game(game)
        .and_then(|g| g.unit(slot))
        .unwrap_or_default()
        .to_string();
    let series = progress(&records, game, &players, range, slot, config)?;

    println!("{}", format!("{} progress ({})", game, unit).bold());
    for player_series in &series {
        println!("{}:", paint_player(config, &player_series.player_id));
        if player_series.is_empty() {
            println!("  (no data)");
            continue;
        }
        for point in player_series.iter() {
            println!("  {}  {}", point.date, point.value);
        }
    }
    Ok(())
}
