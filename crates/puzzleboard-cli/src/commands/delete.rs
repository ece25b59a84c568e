use anyhow::Result;
use chrono::NaiveDate;
use puzzleboard_core::{RecordKey, RecordStore};
use tracing::info;

pub fn run(scores: &mut impl RecordStore, player: &str, date: NaiveDate) -> Result<()> {
    let key = RecordKey {
        player_id: player.to_string(),
        game_date: date,
    };
    let before = scores.scan_all()?.len();
    scores.delete(&key)?;
    let removed = before - scores.scan_all()?.len();
    info!(player = %player, %date, removed, "deleted scores");
    println!("Removed {} score(s) for {} on {}.", removed, player, date);
    Ok(())
}
