use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Which physical side of a folio an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Recto,
    Verso,
}

impl Side {
    /// The side occupying zero-based position `index` when the first
    /// entry of the sorted listing is `first_side`.
    pub fn at_index(index: usize, first_side: Self) -> Self {
        let even = index % 2 == 0;
        match first_side {
            Self::Recto => {
                if even {
                    Self::Recto
                } else {
                    Self::Verso
                }
            },
            Self::Verso => {
                if even {
                    Self::Verso
                } else {
                    Self::Recto
                }
            },
        }
    }

}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recto => write!(f, "recto"),
            Self::Verso => write!(f, "verso"),
        }
    }
}

/// The kind of directory entry a run operates on. A run always processes
/// exactly one kind; files and folders are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Files,
    Folders,
}

/// Fully-typed renaming rules, constructed once per run by the caller and
/// passed by value into plan computation. The caller is responsible for
/// parsing raw text input; this struct only re-checks structural
/// invariants via [`RenameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Text placed before the folio number, typically a shelfmark
    /// (e.g. "Paris, BnF, lat. 16480, fol. ").
    pub prefix: String,
    /// Folio number assigned to the first entry of the sorted listing.
    pub start_folio: u32,
    /// Zero-padding width for the folio number. Padding never truncates:
    /// a number wider than this keeps its full width.
    pub folio_digits: usize,
    /// Suffix appended to the folio number on recto sides.
    pub recto_suffix: String,
    /// Suffix appended to the folio number on verso sides.
    pub verso_suffix: String,
    /// Side shown by the first entry of the sorted listing.
    pub first_side: Side,
    /// Fixed text appended after the side suffix.
    pub general_suffix: String,
    /// Whether the run renames files or folders.
    pub kind: EntryKind,
    /// Drop file extensions instead of carrying them over. Folders never
    /// have an extension either way.
    #[serde(default)]
    pub ignore_extension: bool,
}

impl RenameConfig {
    /// Check structural invariants. Called by `compute_plan` before any
    /// filesystem access.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.folio_digits == 0 {
            return Err(ConfigError::InvalidDigits);
        }
        Ok(())
    }

    /// The side suffix configured for `side`.
    pub fn side_suffix(&self, side: Side) -> &str {
        match side {
            Side::Recto => &self.recto_suffix,
            Side::Verso => &self.verso_suffix,
        }
    }
}

/// Invalid configuration or an unusable target folder. Fatal to the run;
/// surfaced before any filesystem mutation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("folio digit count must be greater than zero")]
    InvalidDigits,
    #[error("not a readable directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory {path}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> RenameConfig {
        RenameConfig {
            prefix: String::new(),
            start_folio: 1,
            folio_digits: 3,
            recto_suffix: "r".to_string(),
            verso_suffix: "v".to_string(),
            first_side: Side::Recto,
            general_suffix: String::new(),
            kind: EntryKind::Files,
            ignore_extension: false,
        }
    }

    #[test]
    fn test_validate_accepts_positive_digits() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_digits() {
        let config = RenameConfig {
            folio_digits: 0,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDigits)
        ));
    }

    #[test]
    fn test_side_at_index_recto_first() {
        assert_eq!(Side::at_index(0, Side::Recto), Side::Recto);
        assert_eq!(Side::at_index(1, Side::Recto), Side::Verso);
        assert_eq!(Side::at_index(2, Side::Recto), Side::Recto);
        assert_eq!(Side::at_index(3, Side::Recto), Side::Verso);
    }

    #[test]
    fn test_side_at_index_verso_first() {
        assert_eq!(Side::at_index(0, Side::Verso), Side::Verso);
        assert_eq!(Side::at_index(1, Side::Verso), Side::Recto);
        assert_eq!(Side::at_index(2, Side::Verso), Side::Verso);
    }

    #[test]
    fn test_side_suffix_lookup() {
        let config = base_config();
        assert_eq!(config.side_suffix(Side::Recto), "r");
        assert_eq!(config.side_suffix(Side::Verso), "v");
    }
}
