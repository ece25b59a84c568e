use std::fs::{self, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Result;
use crate::record::{PostKey, RawPost, RecordKey, ScoreRecord};
use crate::store::{PostStore, RecordStore};

/// Append-oriented JSON-lines file store: one serde_json value per line.
/// A put is a single appended line; delete rewrites the file without the
/// matching items.
#[derive(Debug)]
pub struct JsonlStore<T> {
    path: PathBuf,
    _item: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> JsonlStore<T> {
    /// Open a store at `path`, creating parent directories. The file itself
    /// is created lazily on first put.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            _item: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, item: &T) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(item)?)?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut items = Vec::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(item) => items.push(item),
                Err(e) => {
                    // A torn or hand-edited line loses that item only.
                    warn!("skipping malformed line {} in {:?}: {}", number + 1, self.path, e);
                }
            }
        }
        Ok(items)
    }

    fn rewrite(&self, items: &[T]) -> Result<()> {
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            lines.push(serde_json::to_string(item)?);
        }
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RecordStore for JsonlStore<ScoreRecord> {
    fn put(&mut self, record: ScoreRecord) -> Result<()> {
        self.append(&record)
    }

    fn scan_all(&self) -> Result<Vec<ScoreRecord>> {
        self.read_all()
    }

    fn delete(&mut self, key: &RecordKey) -> Result<()> {
        let kept: Vec<ScoreRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| &r.key() != key)
            .collect();
        self.rewrite(&kept)
    }
}

impl PostStore for JsonlStore<RawPost> {
    fn put(&mut self, post: RawPost) -> Result<()> {
        self.append(&post)
    }

    fn scan_all(&self) -> Result<Vec<RawPost>> {
        self.read_all()
    }

    fn delete(&mut self, key: &PostKey) -> Result<()> {
        let kept: Vec<RawPost> = self
            .read_all()?
            .into_iter()
            .filter(|p| &p.key() != key)
            .collect();
        self.rewrite(&kept)
    }
}
