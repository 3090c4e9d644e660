//! Chord tables stored on disk as TOML or JSON.
//!
//! ```toml
//! name = "ice"
//! rows = [
//!     [880, 0.5, 1.0, 1320, 0.5, 0.9],
//!     [440, 0.5, 0.5, 660, 0.5, 0.5],
//! ]
//!
//! [settings]
//! data_outlets = 1
//! count_outlet = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use chordstep_types::{ChordTable, StepperSettings};

/// Contents of a chord table file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stepper behavior to use with this table, when the file carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<StepperSettings>,
    pub rows: ChordTable,
}

/// Error type for table file loading.
#[derive(Debug)]
pub enum TableFileError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnknownFormat(String),
}

impl From<std::io::Error> for TableFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for TableFileError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for TableFileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for TableFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Toml(e) => write!(f, "TOML error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::UnknownFormat(ext) => {
                write!(f, "unsupported table format '{}' (expected .toml or .json)", ext)
            }
        }
    }
}

impl std::error::Error for TableFileError {}

impl TableFile {
    pub fn from_toml_str(s: &str) -> Result<Self, TableFileError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, TableFileError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a table, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, TableFileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self, TableFileError> = match ext.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(TableFileError::UnknownFormat(ext)),
        };
        let contents = std::fs::read_to_string(path)?;
        let file = parse(&contents)?;
        log::info!(
            "loaded {} chords from {}",
            file.rows.len(),
            path.display()
        );
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ICE_TOML: &str = r#"
name = "ice"
rows = [
    [880, 0.5, 1.0, 1320, 0.5, 0.9],
    [440, 0.5, 0.5],
]

[settings]
data_outlets = 1
count_outlet = true
"#;

    #[test]
    fn parses_toml_with_settings() {
        let file = TableFile::from_toml_str(ICE_TOML).unwrap();
        assert_eq!(file.name.as_deref(), Some("ice"));
        assert_eq!(file.rows.len(), 2);
        assert_eq!(file.rows.rows()[0].len(), 2);
        let settings = file.settings.unwrap();
        assert!(settings.count_outlet);
        assert!(!settings.requires_init);
    }

    #[test]
    fn partial_settings_use_defaults() {
        let file =
            TableFile::from_toml_str("rows = [[440, 0.5, 0.5]]\n\n[settings]\ncount_outlet = true\n")
                .unwrap();
        let settings = file.settings.unwrap();
        assert_eq!(settings.data_outlets.get(), 1);
        assert!(settings.count_outlet);
        assert!(!settings.drain_past_end);
        assert_eq!(settings.wrap_to, 0);
    }

    #[test]
    fn parses_json_without_settings() {
        let file = TableFile::from_json_str(r#"{"rows": [[660, 0.5, 0.5]]}"#).unwrap();
        assert!(file.settings.is_none());
        assert!(file.name.is_none());
        assert_eq!(file.rows.len(), 1);
    }

    #[test]
    fn rejects_ragged_row() {
        let err = TableFile::from_toml_str("rows = [[440, 0.5]]").unwrap_err();
        assert!(matches!(err, TableFileError::Toml(_)));
    }

    #[test]
    fn rejects_empty_table() {
        let err = TableFile::from_json_str(r#"{"rows": []}"#).unwrap_err();
        assert!(err.to_string().contains("no rows"), "{}", err);
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ice.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(ICE_TOML.as_bytes()).unwrap();
        drop(f);

        let file = TableFile::load(&path).unwrap();
        assert_eq!(file.rows.len(), 2);
    }

    #[test]
    fn load_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chords.txt");
        std::fs::write(&path, "rows = []").unwrap();
        assert!(matches!(
            TableFile::load(&path),
            Err(TableFileError::UnknownFormat(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableFile::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TableFileError::Io(_)));
    }
}
