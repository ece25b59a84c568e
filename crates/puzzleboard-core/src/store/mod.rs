//! Storage seams. Two logical collections sit behind two narrow traits:
//! score records and raw posts. The core never retries, never batches and
//! never coordinates multi-record writes.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::record::{PostKey, RawPost, RecordKey, ScoreRecord};

/// Collection of derived score records.
pub trait RecordStore {
    fn put(&mut self, record: ScoreRecord) -> Result<()>;
    /// Return every stored record; filtering happens caller-side.
    fn scan_all(&self) -> Result<Vec<ScoreRecord>>;
    /// Remove every record for one (player, game_date). Administrative, not
    /// part of normal flow.
    fn delete(&mut self, key: &RecordKey) -> Result<()>;
}

/// Collection of verbatim pasted posts.
pub trait PostStore {
    fn put(&mut self, post: RawPost) -> Result<()>;
    fn scan_all(&self) -> Result<Vec<RawPost>>;
    fn delete(&mut self, key: &PostKey) -> Result<()>;
}
