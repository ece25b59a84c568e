use anyhow::Result;
use puzzleboard_core::{Config, RecordStore, seed::generate_test_data};

pub fn run(
    config: &Config,
    scores: &mut impl RecordStore,
    game: &str,
    players: Vec<String>,
    start: u32,
    end: u32,
) -> Result<()> {
    let players = if players.is_empty() {
        config.players.clone()
    } else {
        players
    };
    let records = generate_test_data(config, game, &players, start, end)?;
    let count = records.len();
    for record in records {
        scores.put(record)?;
    }
    println!("Seeded {} {} score(s) for {} player(s).", count, game, players.len());
    Ok(())
}
