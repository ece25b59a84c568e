//! Deterministic sample-data generation for demoing boards and series.

use chrono::{Days, Duration, NaiveDate, Utc};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{GameSpec, SecondaryKind};
use crate::record::ScoreRecord;

/// Small multiplicative congruential generator. Sample scores only need to
/// look varied across runs with the same seed, so no RNG crate is pulled in.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let span = (high - low + 1) as u64;
        low + ((self.0 >> 33) % span) as i64
    }
}

/// Generate one record per player per puzzle number in `start_day..=end_day`,
/// dated so the last puzzle lands on today. Output is validated against the
/// roster before it is returned; nothing is persisted here.
pub fn generate_test_data(
    config: &Config,
    game: &str,
    players: &[String],
    start_day: u32,
    end_day: u32,
) -> Result<Vec<ScoreRecord>> {
    let spec = config
        .game(game)
        .ok_or_else(|| Error::UnknownGame(game.to_string()))?;
    if end_day < start_day {
        return Ok(Vec::new());
    }

    let today = Utc::now().date_naive();
    let base_time = Utc::now();
    let mut rng = Lcg::new(u64::from(start_day) << 16 | u64::from(end_day));
    let mut records = Vec::new();

    for game_number in start_day..=end_day {
        let game_date = day_for(today, game_number, end_day);
        for (slot, player) in players.iter().enumerate() {
            let mut scores = vec![primary_sample(spec, &mut rng)];
            let mut units = vec![spec.units.first().cloned().unwrap_or_default()];
            if let Some(kind) = spec.secondary
                && let Some(unit) = spec.units.get(1)
            {
                scores.push(secondary_sample(kind, &mut rng));
                units.push(unit.clone());
            }

            let record = ScoreRecord {
                player_id: player.clone(),
                game_name: spec.name.clone(),
                game_number,
                scores,
                units,
                game_date,
                // Spread timestamps so ordering stays deterministic.
                submitted_at: base_time
                    + Duration::seconds(i64::from(game_number) * 100 + slot as i64),
            };
            record.validate(config)?;
            records.push(record);
        }
    }
    Ok(records)
}

fn day_for(today: NaiveDate, game_number: u32, end_day: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(end_day - game_number)))
        .unwrap_or(today)
}

fn primary_sample(spec: &GameSpec, rng: &mut Lcg) -> i64 {
    match spec.units.first().map(|u| u.as_str()) {
        Some("seconds") => rng.next_in(60, 600),
        Some("guesses") => rng.next_in(3, 10),
        _ => rng.next_in(10, 100),
    }
}

fn secondary_sample(kind: SecondaryKind, rng: &mut Lcg) -> i64 {
    match kind {
        SecondaryKind::Percent => rng.next_in(70, 100),
        SecondaryKind::Backtracks => rng.next_in(0, 20),
    }
}
