//! Leaderboard aggregation: filter stored records, optionally reduce to the
//! best score per player per day, and order for display or ranking. Pure
//! functions over record slices; input records are never mutated.

mod progress;

pub use progress::{PlayerSeries, SeriesPoint, progress};

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{Direction, GameSpec};
use crate::record::ScoreRecord;

/// Inclusive calendar date range. Construction rejects end-before-start, so
/// every value of this type is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One leaderboard query. `best_per_day` folds re-submissions down to each
/// player's best score per calendar day of `game_date`.
#[derive(Debug, Clone)]
pub struct BoardQuery {
    pub game: String,
    pub players: Option<Vec<String>>,
    pub range: Option<DateRange>,
    pub best_per_day: bool,
}

impl BoardQuery {
    pub fn new(game: &str) -> Self {
        Self {
            game: game.to_string(),
            players: None,
            range: None,
            best_per_day: true,
        }
    }

    fn accepts(&self, record: &ScoreRecord) -> bool {
        if record.game_name != self.game {
            return false;
        }
        if let Some(players) = &self.players
            && !players.iter().any(|p| p == &record.player_id)
        {
            return false;
        }
        if let Some(range) = &self.range
            && !range.contains(record.game_date)
        {
            return false;
        }
        true
    }
}

/// One output row: a copy of the record's display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub player_id: String,
    pub scores: Vec<i64>,
    pub units: Vec<String>,
    pub game_date: NaiveDate,
    pub submitted_at: DateTime<Utc>,
}

impl BoardRow {
    pub fn primary(&self) -> i64 {
        self.scores.first().copied().unwrap_or(0)
    }

    fn from_record(record: &ScoreRecord) -> Self {
        Self {
            player_id: record.player_id.clone(),
            scores: record.scores.clone(),
            units: record.units.clone(),
            game_date: record.game_date,
            submitted_at: record.submitted_at,
        }
    }
}

/// Display leaderboard: rows ordered by `game_date` descending, ties broken
/// by `player_id` ascending. Empty input yields an empty board.
pub fn leaderboard(
    records: &[ScoreRecord],
    query: &BoardQuery,
    config: &Config,
) -> Result<Vec<BoardRow>> {
    let spec = lookup_game(config, &query.game)?;
    let mut rows = collect(records, query, spec);
    rows.sort_by(|a, b| {
        b.game_date
            .cmp(&a.game_date)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    Ok(rows)
}

/// Ranking view: best-first by primary score per the game's direction. Ties
/// go to the earliest `submitted_at`, then `player_id` ascending.
pub fn ranking(
    records: &[ScoreRecord],
    query: &BoardQuery,
    config: &Config,
) -> Result<Vec<BoardRow>> {
    let spec = lookup_game(config, &query.game)?;
    let direction = spec.direction;
    let mut rows = collect(records, query, spec);
    rows.sort_by(|a, b| {
        let by_score = match direction {
            Direction::LowerIsBetter => a.primary().cmp(&b.primary()),
            Direction::HigherIsBetter => b.primary().cmp(&a.primary()),
        };
        by_score
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    Ok(rows)
}

fn lookup_game<'a>(config: &'a Config, name: &str) -> Result<&'a GameSpec> {
    config
        .game(name)
        .ok_or_else(|| Error::UnknownGame(name.to_string()))
}

fn collect(records: &[ScoreRecord], query: &BoardQuery, spec: &GameSpec) -> Vec<BoardRow> {
    let matches: Vec<&ScoreRecord> = records.iter().filter(|r| query.accepts(r)).collect();
    if !query.best_per_day {
        return matches.into_iter().map(BoardRow::from_record).collect();
    }

    // Best score per (player, day), by the game's configured direction.
    // Equal scores keep the earlier submission.
    let mut best: HashMap<(String, NaiveDate), &ScoreRecord> = HashMap::new();
    for record in matches {
        let key = (record.player_id.clone(), record.game_date);
        match best.get(&key) {
            Some(incumbent) if !beats(record, incumbent, spec.direction) => {}
            _ => {
                best.insert(key, record);
            }
        }
    }
    best.into_values().map(BoardRow::from_record).collect()
}

fn beats(candidate: &ScoreRecord, incumbent: &ScoreRecord, direction: Direction) -> bool {
    let better = match direction {
        Direction::LowerIsBetter => candidate.primary() < incumbent.primary(),
        Direction::HigherIsBetter => candidate.primary() > incumbent.primary(),
    };
    better
        || (candidate.primary() == incumbent.primary()
            && candidate.submitted_at < incumbent.submitted_at)
}

/// Headline numbers for a filtered record set: row count, distinct players,
/// distinct games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub total_rows: usize,
    pub unique_players: usize,
    pub games_tracked: usize,
}

pub fn summary(records: &[ScoreRecord]) -> BoardStats {
    let players: HashSet<&str> = records.iter().map(|r| r.player_id.as_str()).collect();
    let games: HashSet<&str> = records.iter().map(|r| r.game_name.as_str()).collect();
    BoardStats {
        total_rows: records.len(),
        unique_players: players.len(),
        games_tracked: games.len(),
    }
}

/// Render board rows as CSV. Score slots are zipped with their units and
/// joined with "; " so the column stays comma-free.
pub fn to_csv(rows: &[BoardRow]) -> String {
    let mut out = String::from("date,player,scores,submitted_at\n");
    for row in rows {
        let scores = row
            .scores
            .iter()
            .zip(row.units.iter())
            .map(|(s, u)| format!("{} {}", s, u))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(
            "{},{},{},{}\n",
            row.game_date,
            row.player_id,
            scores,
            row.submitted_at.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}
