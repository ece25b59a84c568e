//! Persisted entities: score records and raw posts, plus their delete keys.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::MetricSlot;
use crate::parse::ParsedPost;

/// The canonical persisted score entity. Immutable once written; corrections
/// are new records, and no uniqueness holds over (player, game, game_number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_id: String,
    pub game_name: String,
    pub game_number: u32,
    /// Extracted values, primary metric first. Aligned with `units`.
    pub scores: Vec<i64>,
    /// Unit label per score slot.
    pub units: Vec<String>,
    /// Calendar date the puzzle corresponds to, not the submission time.
    pub game_date: NaiveDate,
    pub submitted_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Build a record from a parse result plus the caller-supplied identity
    /// fields. `scores.len() == units.len()` holds by construction here.
    pub fn from_parsed(
        parsed: ParsedPost,
        player_id: &str,
        game_date: NaiveDate,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            player_id: player_id.to_string(),
            game_name: parsed.game_name,
            game_number: parsed.game_number,
            scores: parsed.scores,
            units: parsed.units,
            game_date,
            submitted_at,
        }
    }

    pub fn primary(&self) -> i64 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// Value in a metric slot, if the record carries it.
    pub fn metric(&self, slot: MetricSlot) -> Option<i64> {
        let index = match slot {
            MetricSlot::Primary => 0,
            MetricSlot::Secondary => 1,
        };
        self.scores.get(index).copied()
    }

    /// Reject records whose player or game falls outside the configured
    /// sets. Must pass before any write.
    pub fn validate(&self, config: &Config) -> Result<()> {
        if !config.has_player(&self.player_id) {
            return Err(Error::UnknownPlayer(self.player_id.clone()));
        }
        if config.game(&self.game_name).is_none() {
            return Err(Error::UnknownGame(self.game_name.clone()));
        }
        Ok(())
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            player_id: self.player_id.clone(),
            game_date: self.game_date,
        }
    }
}

/// Delete key for score records: one player's scores for one puzzle date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub player_id: String,
    pub game_date: NaiveDate,
}

/// The verbatim pasted text, retained for audit/replay whether or not
/// parsing succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    pub player_id: String,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

impl RawPost {
    pub fn new(player_id: &str, text: &str, submitted_at: DateTime<Utc>) -> Self {
        Self {
            player_id: player_id.to_string(),
            text: text.to_string(),
            submitted_at,
        }
    }

    pub fn key(&self) -> PostKey {
        PostKey {
            player_id: self.player_id.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Delete key for raw posts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostKey {
    pub player_id: String,
    pub submitted_at: DateTime<Utc>,
}
