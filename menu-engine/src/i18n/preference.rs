//! Language preference persistence
//!
//! A single key-value pair kept across sessions: `{"language": "fr"}`.

use serde::{Deserialize, Serialize};
use shared::{AppError, ErrorCode, Language};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PreferenceError> for AppError {
    fn from(err: PreferenceError) -> Self {
        let code = match &err {
            PreferenceError::Read(_) => ErrorCode::PreferenceReadFailed,
            PreferenceError::Write(_) => ErrorCode::PreferenceWriteFailed,
            PreferenceError::Json(_) => ErrorCode::PreferenceCorrupted,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// 偏好文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceFile {
    /// Kept as raw text so unknown tags from older builds don't fail the load
    #[serde(default)]
    language: Option<String>,
}

/// File-backed language preference
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    file_path: PathBuf,
}

impl PreferenceStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Stored language, `None` when the file is absent or holds an unsupported tag
    pub fn load(&self) -> Result<Option<Language>, PreferenceError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path).map_err(PreferenceError::Read)?;
        let file: PreferenceFile = serde_json::from_str(&content)?;
        Ok(file.language.as_deref().and_then(Language::parse))
    }

    /// Like [`load`](Self::load), but an unreadable file counts as "nothing stored"
    pub fn load_lenient(&self) -> Option<Language> {
        match self.load() {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "Ignoring unreadable language preference"
                );
                None
            }
        }
    }

    pub fn save(&self, language: Language) -> Result<(), PreferenceError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(PreferenceError::Write)?;
        }
        let file = PreferenceFile {
            language: Some(language.as_str().to_string()),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.file_path, content).map_err(PreferenceError::Write)?;
        tracing::debug!(path = %self.file_path.display(), %language, "Language preference saved");
        Ok(())
    }
}

/// Startup language: stored value → environment locale prefix → `en`
pub fn resolve_initial_language(stored: Option<Language>, env_locale: Option<&str>) -> Language {
    stored
        .or_else(|| env_locale.and_then(Language::from_locale_prefix))
        .unwrap_or(Language::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested/prefs.json"));
        store.save(Language::Ar).unwrap();
        assert_eq!(store.load().unwrap(), Some(Language::Ar));

        store.save(Language::Fr).unwrap();
        assert_eq!(store.load().unwrap(), Some(Language::Fr));
    }

    #[test]
    fn test_unsupported_tag_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"language":"de"}"#).unwrap();
        assert_eq!(PreferenceStore::new(&path).load().unwrap(), None);
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = PreferenceStore::new(&path);

        let err = store.load().unwrap_err();
        assert!(matches!(err, PreferenceError::Json(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::PreferenceCorrupted);
        assert_eq!(store.load_lenient(), None);
    }

    #[test]
    fn test_save_failure_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "plain file").unwrap();
        let store = PreferenceStore::new(blocker.join("prefs.json"));

        let err = store.save(Language::Fr).unwrap_err();
        assert!(matches!(err, PreferenceError::Write(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::PreferenceWriteFailed);
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::create_dir(&path).unwrap();

        let err = PreferenceStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PreferenceError::Read(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::PreferenceReadFailed);
    }

    #[test]
    fn test_resolve_initial_language() {
        assert_eq!(
            resolve_initial_language(Some(Language::Fr), Some("ar-DZ")),
            Language::Fr
        );
        assert_eq!(resolve_initial_language(None, Some("ar-DZ")), Language::Ar);
        assert_eq!(resolve_initial_language(None, Some("de-DE")), Language::En);
        assert_eq!(resolve_initial_language(None, None), Language::En);
    }
}
