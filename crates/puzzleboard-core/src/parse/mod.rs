//! Share-post parsing.
//!
//! `PostParser` holds one compiled signature rule per configured game, tried
//! in registration order; the first matching rule wins. A rule extracts the
//! `#<N>` game number and a primary value token (bare integer or clock), plus
//! an optional secondary token for games that define one. Parsing is pure and
//! side-effect free; the caller supplies player, date and timestamp when it
//! builds the persisted record.

mod clock;

pub use clock::clock_to_seconds;

use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{GameSpec, SecondaryKind, ValueKind};

/// The structured result of parsing one post. `scores` and `units` are
/// aligned by position, primary metric first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub game_name: String,
    pub game_number: u32,
    pub scores: Vec<i64>,
    pub units: Vec<String>,
}

struct GameRule {
    name: String,
    header: Regex,
    units: Vec<String>,
    primary: ValueKind,
    secondary: Option<(SecondaryKind, Regex)>,
}

pub struct PostParser {
    rules: Vec<GameRule>,
}

impl PostParser {
    /// Compile one signature rule per configured game, keeping the table's
    /// declared order.
    pub fn new(config: &Config) -> Result<Self> {
        let rules = config
            .games
            .iter()
            .map(GameRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Parse one post. Returns the first matching rule's extraction, or
    /// `Error::UnrecognizedPost` carrying the supported game names.
    pub fn parse(&self, text: &str) -> Result<ParsedPost> {
        let text = text.trim();
        for rule in &self.rules {
            if let Some(parsed) = rule.try_match(text) {
                return Ok(parsed);
            }
        }
        Err(Error::UnrecognizedPost {
            supported: self.rules.iter().map(|r| r.name.clone()).collect(),
        })
    }

    pub fn supported_games(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name.clone()).collect()
    }
}

impl GameRule {
    fn compile(spec: &GameSpec) -> Result<Self> {
        // The value token class is wider than what the rule accepts, so that
        // a fractional token like "2.5" is captured whole and then rejected
        // (the regex crate has no lookahead to exclude it in-pattern).
        let token_class = match spec.primary {
            ValueKind::Integer => "[0-9.]+",
            ValueKind::Clock | ValueKind::IntegerOrClock => "[0-9:.]+",
        };
        let pattern = format!(
            r"(?i){}\s*#(\d+)\s*\|\s*({})",
            regex::escape(&spec.name),
            token_class
        );
        let header = Regex::new(&pattern).map_err(|e| Error::ConfigParse(e.to_string()))?;

        let secondary = match spec.secondary {
            Some(SecondaryKind::Percent) => {
                let re = Regex::new(r"(\d+)\s*%").map_err(|e| Error::ConfigParse(e.to_string()))?;
                Some((SecondaryKind::Percent, re))
            }
            Some(SecondaryKind::Backtracks) => {
                let re = Regex::new(r"(?i)(\d+)\s*backtrack|\((\d+)[^)]*\)")
                    .map_err(|e| Error::ConfigParse(e.to_string()))?;
                Some((SecondaryKind::Backtracks, re))
            }
            None => None,
        };

        Ok(Self {
            name: spec.name.clone(),
            header,
            units: spec.units.clone(),
            primary: spec.primary,
            secondary,
        })
    }

    fn try_match(&self, text: &str) -> Option<ParsedPost> {
        let caps = self.header.captures(text)?;
        let game_number: u32 = caps[1].parse().ok()?;
        let primary = parse_primary(&caps[2], self.primary)?;

        let mut scores = vec![primary];
        let mut units = vec![self.units.first()?.clone()];

        // The secondary token may sit on a trailing line ("With 18
        // backtracks"), so the search runs from the matched header to the end
        // of the text. Text before the header is excluded so decorative
        // numbers there cannot produce a false hit.
        if let Some((_, re)) = &self.secondary
            && let Some(tail) = text.get(caps.get(0)?.end()..)
            && let Some(sec) = re.captures(tail)
        {
            let token = sec.get(1).or_else(|| sec.get(2))?.as_str();
            if let Ok(value) = token.parse::<i64>()
                && let Some(unit) = self.units.get(1)
            {
                scores.push(value);
                units.push(unit.clone());
            }
        }

        Some(ParsedPost {
            game_name: self.name.clone(),
            game_number,
            scores,
            units,
        })
    }
}

/// Parse the captured primary token per the rule's value kind. A token the
/// kind does not accept (decimal, or clock where only integers are allowed)
/// makes the rule non-matching rather than an error.
fn parse_primary(token: &str, kind: ValueKind) -> Option<i64> {
    if token.contains('.') {
        return None;
    }
    match kind {
        ValueKind::Integer => {
            if token.contains(':') {
                None
            } else {
                token.parse().ok()
            }
        }
        ValueKind::Clock => {
            if token.contains(':') {
                clock_to_seconds(token)
            } else {
                None
            }
        }
        ValueKind::IntegerOrClock => clock_to_seconds(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_token_kinds() {
        assert_eq!(parse_primary("45", ValueKind::Integer), Some(45));
        assert_eq!(parse_primary("1:30", ValueKind::Integer), None);
        assert_eq!(parse_primary("1:30", ValueKind::Clock), Some(90));
        assert_eq!(parse_primary("45", ValueKind::Clock), None);
        assert_eq!(parse_primary("1:30", ValueKind::IntegerOrClock), Some(90));
        assert_eq!(parse_primary("45", ValueKind::IntegerOrClock), Some(45));
    }

    #[test]
    fn decimal_token_never_matches() {
        assert_eq!(parse_primary("2.5", ValueKind::Integer), None);
        assert_eq!(parse_primary("2.5", ValueKind::IntegerOrClock), None);
        assert_eq!(parse_primary("1:30.5", ValueKind::Clock), None);
    }
}
