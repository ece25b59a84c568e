//! Runtime configuration: the player roster, the supported-games table and
//! presentation colors. Loaded once and passed by reference; never mutated
//! after load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::{GameSpec, stock_games};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Allowed player identifiers. Records for anyone else are rejected
    /// before any write.
    #[serde(default)]
    pub players: Vec<String>,
    /// Supported games, in parser match order.
    #[serde(default = "stock_games")]
    pub games: Vec<GameSpec>,
    /// Optional per-player display color (hex string), for presentation only.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            games: stock_games(),
            colors: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// A small ready-to-use roster with colors, for demos and tests.
    pub fn sample() -> Self {
        let players = ["ada", "grace", "linus", "margaret"];
        let colors = [
            ("ada", "#00ff88"),
            ("grace", "#0077ff"),
            ("linus", "#ff0000"),
            ("margaret", "#cc00ff"),
        ];
        Self {
            players: players.iter().map(|p| p.to_string()).collect(),
            games: stock_games(),
            colors: colors
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
        }
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }

    /// Look up a game by exact name.
    pub fn game(&self, name: &str) -> Option<&GameSpec> {
        self.games.iter().find(|g| g.name == name)
    }

    pub fn game_names(&self) -> Vec<String> {
        self.games.iter().map(|g| g.name.clone()).collect()
    }

    /// Display color for a player, if configured.
    pub fn color(&self, player_id: &str) -> Option<&str> {
        self.colors.get(player_id).map(|c| c.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn parse_minimal_toml() {
        let config = Config::parse(r#"players = ["ada", "grace"]"#).unwrap();
        assert_eq!(config.players, vec!["ada", "grace"]);
        // Games default to the stock table when the file omits them.
        assert_eq!(config.games.len(), 6);
        assert!(config.game("Queens").is_some());
    }

    #[test]
    fn parse_custom_game_entry() {
        let content = r#"
            players = ["ada"]

            [[games]]
            name = "Wordle"
            units = ["guesses"]
            direction = "lower_is_better"
            primary = "integer"
        "#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.games.len(), 1);
        let wordle = config.game("Wordle").unwrap();
        assert_eq!(wordle.direction, Direction::LowerIsBetter);
        assert!(wordle.secondary.is_none());
    }

    #[test]
    fn parse_rejects_bad_toml() {
        assert!(Config::parse("players = not-a-list").is_err());
    }

    #[test]
    fn sample_roster_has_colors() {
        let config = Config::sample();
        assert!(config.has_player("ada"));
        assert!(!config.has_player("unknown"));
        assert_eq!(config.color("ada"), Some("#00ff88"));
        assert_eq!(config.color("nobody"), None);
    }
}
