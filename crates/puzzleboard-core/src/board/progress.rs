//! Per-player progress series for trend display.

use chrono::NaiveDate;

use crate::board::DateRange;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::MetricSlot;
use crate::record::ScoreRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// A finite, restartable series of (date, value) points for one player,
/// ascending by date. Missing days are absent, never zero-filled; empty and
/// singleton series are well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub player_id: String,
    points: Vec<SeriesPoint>,
}

impl PlayerSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Restartable iteration: each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One series per requested player, in the order the players were given.
/// Players with no matching records get an empty series, not an error.
/// Records missing the requested slot (e.g. a secondary the post never
/// carried) contribute no point.
pub fn progress(
    records: &[ScoreRecord],
    game: &str,
    players: &[String],
    range: Option<DateRange>,
    slot: MetricSlot,
    config: &Config,
) -> Result<Vec<PlayerSeries>> {
    if config.game(game).is_none() {
        return Err(Error::UnknownGame(game.to_string()));
    }

    let mut series = Vec::with_capacity(players.len());
    for player in players {
        let mut matched: Vec<&ScoreRecord> = records
            .iter()
            .filter(|r| {
                r.game_name == game
                    && &r.player_id == player
                    && range.is_none_or(|range| range.contains(r.game_date))
            })
            .collect();
        matched.sort_by(|a, b| {
            a.game_date
                .cmp(&b.game_date)
                .then_with(|| a.submitted_at.cmp(&b.submitted_at))
        });

        let points = matched
            .into_iter()
            .filter_map(|r| {
                r.metric(slot).map(|value| SeriesPoint {
                    date: r.game_date,
                    value,
                })
            })
            .collect();
        series.push(PlayerSeries {
            player_id: player.clone(),
            points,
        });
    }
    Ok(series)
}
