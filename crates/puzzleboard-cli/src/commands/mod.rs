pub mod board;
pub mod delete;
pub mod posts;
pub mod progress;
pub mod seed;
pub mod submit;

use owo_colors::OwoColorize;

/// Colorize a player name with their configured hex color, if any.
pub fn paint_player(config: &puzzleboard_core::Config, player_id: &str) -> String {
    match config.color(player_id).and_then(parse_hex) {
        Some((r, g, b)) => player_id.truecolor(r, g, b).to_string(),
        None => player_id.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Zip score slots with their unit labels for display.
pub fn format_scores(scores: &[i64], units: &[String]) -> String {
    scores
        .iter()
        .zip(units.iter())
        .map(|(s, u)| format!("{} {}", s, u))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex("#00ff88"), Some((0, 255, 136)));
        assert_eq!(parse_hex("00ff88"), None);
        assert_eq!(parse_hex("#zzff88"), None);
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn scores_format_with_units() {
        let units = vec!["seconds".to_string(), "backtracks".to_string()];
        assert_eq!(format_scores(&[135, 3], &units), "135 seconds, 3 backtracks");
    }
}
