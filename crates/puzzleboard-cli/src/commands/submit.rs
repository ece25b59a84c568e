use anyhow::{Result, bail};
use chrono::{NaiveDate, Utc};
use puzzleboard_core::{
    Config, Error, PostParser, PostStore, RawPost, RecordStore, ScoreRecord,
};
use std::io::Read;
use tracing::info;

use crate::commands::format_scores;

pub fn run(
    config: &Config,
    scores: &mut impl RecordStore,
    posts: &mut impl PostStore,
    player: &str,
    date: Option<NaiveDate>,
    text: Option<String>,
) -> Result<()> {
    if !config.has_player(player) {
        bail!(Error::UnknownPlayer(player.to_string()));
    }

    let text = match text {
        Some(t) => t,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if text.trim().is_empty() {
        bail!("empty post text");
    }

    let submitted_at = Utc::now();
    let game_date = date.unwrap_or_else(|| submitted_at.date_naive());

    // The verbatim post is kept for audit/replay whether or not it parses.
    posts.put(RawPost::new(player, &text, submitted_at))?;

    let parser = PostParser::new(config)?;
    let parsed = parser.parse(&text)?;
    let record = ScoreRecord::from_parsed(parsed, player, game_date, submitted_at);
    record.validate(config)?;

    info!(
        player = %record.player_id,
        game = %record.game_name,
        number = record.game_number,
        "recording score"
    );
    println!(
        "Saved {} #{} for {}: {}",
        record.game_name,
        record.game_number,
        record.player_id,
        format_scores(&record.scores, &record.units)
    );
    scores.put(record)?;
    Ok(())
}
