use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use log::{info, warn};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::game::difficulty::Difficulty;

/// String-keyed, string-valued persistent storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Keeps every entry in a two-column CSV file, rewritten on each `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let mut entries = BTreeMap::new();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            let mut csv_reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(file);
            for record in csv_reader.deserialize() {
                let (key, value): (String, String) = record?;
                entries.insert(key, value);
            }
        }
        Ok(FileStore {
            path: path.to_owned(),
            entries: RwLock::new(entries),
        })
    }

    pub fn default_path() -> Result<PathBuf> {
        let mut path = ProjectDirs::from("", "", "trivia-night")
            .context("could not locate system directories")?
            .data_dir()
            .to_path_buf();
        path.push("high_scores.csv");
        Ok(path)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Could not write {}", self.path.display()))?;
        for entry in entries.iter() {
            csv_writer.serialize(entry)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }
}

pub fn high_score_key(difficulty: Difficulty) -> String {
    format!("highScore_{}", difficulty.label())
}

/// Best number of correct answers per difficulty.
pub struct HighScores<S> {
    store: S,
}

impl<S: KeyValueStore> HighScores<S> {
    pub fn new(store: S) -> Self {
        HighScores { store }
    }

    pub fn best_score(&self, difficulty: Difficulty) -> Result<u32> {
        let key = high_score_key(difficulty);
        let best: u32 = match self.store.get(&key)? {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unreadable high score `{}` for {}", value, key);
                0
            }),
            None => 0,
        };
        Ok(best)
    }

    /// Stores `correct` if it beats the current best, and returns the best
    /// score after the update.
    pub fn record_score(&self, difficulty: Difficulty, correct: u32) -> Result<u32> {
        let best = self.best_score(difficulty)?;
        if correct <= best {
            return Ok(best);
        }
        info!("New {} high score: {}", difficulty, correct);
        self.store
            .set(&high_score_key(difficulty), &correct.to_string())?;
        Ok(correct)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
