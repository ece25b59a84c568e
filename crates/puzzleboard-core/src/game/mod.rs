//! Game metadata: which games are supported, what their metrics mean, and
//! which direction counts as better.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Whether a lower or higher primary score wins for a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[strum(serialize = "lower is better")]
    LowerIsBetter,
    #[strum(serialize = "higher is better")]
    HigherIsBetter,
}

/// Shape of the primary value token in a share post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Bare integer only ("3 guesses").
    Integer,
    /// `mm:ss` / `hh:mm:ss` clock only.
    Clock,
    /// Either form; clock tokens normalize to seconds.
    IntegerOrClock,
}

/// Shape of the optional secondary value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryKind {
    /// Trailing `NN%` (e.g. Pinpoint accuracy).
    Percent,
    /// `<N> backtrack(s)` or a parenthesized retry count.
    Backtracks,
}

/// Which score slot a query is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSlot {
    Primary,
    Secondary,
}

/// One supported game: its name, unit labels (primary first), better-direction
/// and post signature shape. Registration order is the parser's match order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSpec {
    pub name: String,
    /// One label per score slot, primary first. At most two slots.
    pub units: Vec<String>,
    pub direction: Direction,
    pub primary: ValueKind,
    #[serde(default)]
    pub secondary: Option<SecondaryKind>,
}

impl GameSpec {
    pub fn new(
        name: &str,
        units: &[&str],
        direction: Direction,
        primary: ValueKind,
        secondary: Option<SecondaryKind>,
    ) -> Self {
        Self {
            name: name.to_string(),
            units: units.iter().map(|u| u.to_string()).collect(),
            direction,
            primary,
            secondary,
        }
    }

    /// Unit label for a slot, if the game defines it.
    pub fn unit(&self, slot: MetricSlot) -> Option<&str> {
        let index = match slot {
            MetricSlot::Primary => 0,
            MetricSlot::Secondary => 1,
        };
        self.units.get(index).map(|u| u.as_str())
    }
}

/// The stock LinkedIn games table.
pub fn stock_games() -> Vec<GameSpec> {
    vec![
        GameSpec::new(
            "Mini Sudoku",
            &["seconds", "mistakes"],
            Direction::LowerIsBetter,
            ValueKind::IntegerOrClock,
            None,
        ),
        GameSpec::new(
            "Pinpoint",
            &["guesses", "%"],
            Direction::LowerIsBetter,
            ValueKind::Integer,
            Some(SecondaryKind::Percent),
        ),
        GameSpec::new(
            "Queens",
            &["seconds", "mistakes"],
            Direction::LowerIsBetter,
            ValueKind::IntegerOrClock,
            None,
        ),
        GameSpec::new(
            "Crossclimb",
            &["seconds"],
            Direction::LowerIsBetter,
            ValueKind::IntegerOrClock,
            None,
        ),
        GameSpec::new(
            "Tango",
            &["points", "bonus_points"],
            Direction::HigherIsBetter,
            ValueKind::IntegerOrClock,
            None,
        ),
        GameSpec::new(
            "Zip",
            &["seconds", "backtracks"],
            Direction::LowerIsBetter,
            ValueKind::IntegerOrClock,
            Some(SecondaryKind::Backtracks),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_table_has_six_games() {
        let games = stock_games();
        assert_eq!(games.len(), 6);
        assert_eq!(games[0].name, "Mini Sudoku");
        assert_eq!(games[5].name, "Zip");
    }

    #[test]
    fn unit_lookup_per_slot() {
        let games = stock_games();
        let pinpoint = games.iter().find(|g| g.name == "Pinpoint").unwrap();
        assert_eq!(pinpoint.unit(MetricSlot::Primary), Some("guesses"));
        assert_eq!(pinpoint.unit(MetricSlot::Secondary), Some("%"));

        let crossclimb = games.iter().find(|g| g.name == "Crossclimb").unwrap();
        assert_eq!(crossclimb.unit(MetricSlot::Secondary), None);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::LowerIsBetter.to_string(), "lower is better");
        assert_eq!(Direction::HigherIsBetter.to_string(), "higher is better");
    }
}
