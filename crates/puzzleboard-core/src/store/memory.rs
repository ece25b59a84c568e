use crate::error::Result;
use crate::record::{PostKey, RawPost, RecordKey, ScoreRecord};
use crate::store::{PostStore, RecordStore};

/// Vec-backed store. The credential-less fallback and the test double are the
/// same type; data lives for the process lifetime only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecordStore for MemoryStore<ScoreRecord> {
    fn put(&mut self, record: ScoreRecord) -> Result<()> {
        self.items.push(record);
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<ScoreRecord>> {
        Ok(self.items.clone())
    }

    fn delete(&mut self, key: &RecordKey) -> Result<()> {
        self.items.retain(|r| &r.key() != key);
        Ok(())
    }
}

impl PostStore for MemoryStore<RawPost> {
    fn put(&mut self, post: RawPost) -> Result<()> {
        self.items.push(post);
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<RawPost>> {
        Ok(self.items.clone())
    }

    fn delete(&mut self, key: &PostKey) -> Result<()> {
        self.items.retain(|p| &p.key() != key);
        Ok(())
    }
}
