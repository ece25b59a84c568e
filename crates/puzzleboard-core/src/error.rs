use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no supported game signature matched; supported games: {}", .supported.join(", "))]
    UnrecognizedPost { supported: Vec<String> },

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
