use super::DataStore;
use crate::error::{FossleError, Result};
use crate::model::{GuessedNames, StatsRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILENAME: &str = "state.json";
const GUESSES_FILENAME: &str = "guesses.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn guessed_path(&self) -> PathBuf {
        self.root.join(GUESSES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FossleError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(FossleError::Io)?;
        let value = serde_json::from_str(&content).map_err(FossleError::Serialization)?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(FossleError::Serialization)?;

        // Write to a sibling then rename, so a crash never leaves half a file.
        let tmp = self.root.join(format!("{}.tmp", filename));
        fs::write(&tmp, content).map_err(FossleError::Io)?;
        fs::rename(&tmp, self.root.join(filename)).map_err(FossleError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_record(&self) -> Result<Option<StatsRecord>> {
        self.read_json(STATE_FILENAME)
    }

    fn save_record(&mut self, record: &StatsRecord) -> Result<()> {
        self.write_json(STATE_FILENAME, record)
    }

    fn record_path(&self) -> PathBuf {
        self.root.join(STATE_FILENAME)
    }

    fn load_guessed(&self) -> Result<Option<GuessedNames>> {
        self.read_json(GUESSES_FILENAME)
    }

    fn save_guessed(&mut self, guessed: &GuessedNames) -> Result<()> {
        self.write_json(GUESSES_FILENAME, guessed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Histogram;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested"));
        assert!(store.load_record().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested"));

        let record = StatsRecord {
            streak: 3,
            highest_streak: 3,
            stats: Histogram::new([0, 1, 2, 0, 0, 0, 0], 1),
            ..Default::default()
        };
        store.save_record(&record).unwrap();

        assert!(store.record_path().exists());
        assert!(!temp.path().join("nested").join("state.json.tmp").exists());
        assert_eq!(store.load_record().unwrap(), Some(record));
    }

    #[test]
    fn test_stored_file_uses_record_field_names() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save_record(&StatsRecord::new()).unwrap();

        let raw = fs::read_to_string(store.record_path()).unwrap();
        assert!(raw.contains("\"guessState\""));
        assert!(raw.contains("\"highestStreak\""));
        assert!(raw.contains("\"lost\""));
    }

    #[test]
    fn test_guessed_names_live_beside_the_record() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        assert!(store.load_guessed().unwrap().is_none());

        let guessed = GuessedNames::new(830, vec!["vuejs/vue".to_string()]);
        store.save_guessed(&guessed).unwrap();

        assert_eq!(store.load_guessed().unwrap(), Some(guessed));
        assert!(store.guessed_path().exists());
        assert!(!store.record_path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        fs::write(store.record_path(), "{ not json").unwrap();
        assert!(matches!(
            store.load_record(),
            Err(FossleError::Serialization(_))
        ));
    }
}
