use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum HighScoreError {
    IoError(std::io::Error),
    ParseError(String),
}

impl std::fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighScoreError::IoError(e) => write!(f, "IO error: {}", e),
            HighScoreError::ParseError(content) => {
                write!(f, "High score file does not contain a number: {:?}", content)
            }
        }
    }
}

impl std::error::Error for HighScoreError {}

impl From<std::io::Error> for HighScoreError {
    fn from(e: std::io::Error) -> Self {
        HighScoreError::IoError(e)
    }
}

/// Persists the best score as a single integer in a text file.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no score has been saved yet.
    pub fn load(&self) -> Result<Option<i32>, HighScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let trimmed = content.trim();
        let score = trimmed
            .parse::<i32>()
            .map_err(|_| HighScoreError::ParseError(trimmed.to_string()))?;
        Ok(Some(score))
    }

    /// Overwrites any previous score unconditionally.
    pub fn save(&self, score: i32) -> Result<(), HighScoreError> {
        std::fs::write(&self.path, format!("{}\n", score))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> HighScoreStore {
        let suffix: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("snake_high_score_{}_{}", tag, suffix));
        HighScoreStore::new(path)
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("roundtrip");
        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), Some(17));
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_save_overwrites() {
        let store = temp_store("overwrite");
        store.save(3).unwrap();
        store.save(-2).unwrap();
        assert_eq!(store.load().unwrap(), Some(-2));
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let store = temp_store("corrupt");
        std::fs::write(store.path(), "not a score").unwrap();
        assert!(matches!(store.load(), Err(HighScoreError::ParseError(_))));
        let _ = std::fs::remove_file(store.path());
    }
}
