pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod parse;
pub mod record;
pub mod seed;
pub mod store;

pub use board::{
    BoardQuery, BoardRow, BoardStats, DateRange, PlayerSeries, SeriesPoint, leaderboard, progress,
    ranking, summary, to_csv,
};
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Direction, GameSpec, MetricSlot, SecondaryKind, ValueKind, stock_games};
pub use parse::{ParsedPost, PostParser, clock_to_seconds};
pub use record::{PostKey, RawPost, RecordKey, ScoreRecord};
pub use store::{JsonlStore, MemoryStore, PostStore, RecordStore};
