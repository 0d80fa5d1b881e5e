use crate::config::{ConfigError, EntryKind, RenameConfig};
use crate::sequence::{base_name, extension_of, folio_step};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// One planned rename: the entry's current path and the path it will be
/// renamed to, both inside the scanned folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// An ordered renaming plan for one folder, produced once per run and
/// then either displayed or applied exactly once. Pair order follows the
/// sorted entry listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub id: String,
    pub created_at: String,
    pub folder: PathBuf,
    pub config: RenameConfig,
    pub renames: Vec<PlannedRename>,
}

impl RenamePlan {
    /// Target paths that more than one entry maps to. A non-empty result
    /// indicates a configuration or logic bug; such a plan must never be
    /// applied silently.
    pub fn duplicate_targets(&self) -> Vec<&Path> {
        let mut counts: BTreeMap<&Path, usize> = BTreeMap::new();
        for rename in &self.renames {
            *counts.entry(rename.to.as_path()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .filter_map(|(path, count)| (count > 1).then_some(path))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }
}

/// Compute the renaming plan for `folder` under `config`.
///
/// Validates the configuration first (fail fast, before any filesystem
/// access beyond the listing), reads the folder's immediate entries,
/// keeps only entries of the configured kind, sorts them by name with a
/// total byte-wise ordering, then threads the folio counter through the
/// sequence generator. Deterministic: identical directory contents and
/// configuration always yield an identical plan.
pub fn compute_plan(folder: &Path, config: &RenameConfig) -> Result<RenamePlan, ConfigError> {
    config.validate()?;

    if !folder.is_dir() {
        return Err(ConfigError::NotADirectory(folder.to_path_buf()));
    }

    let names = list_entry_names(folder, config.kind)?;

    let mut folio = config.start_folio;
    let mut renames = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        // The one shared increment rule, applied before use.
        folio += folio_step(index, config.first_side);

        let mut new_name = base_name(config, index, folio);
        if config.kind == EntryKind::Files && !config.ignore_extension {
            new_name.push_str(&extension_of(name));
        }

        renames.push(PlannedRename {
            from: folder.join(name),
            to: folder.join(new_name),
        });
    }

    Ok(RenamePlan {
        id: generate_plan_id(folder, config, &names),
        created_at: chrono::Local::now().to_rfc3339(),
        folder: folder.to_path_buf(),
        config: config.clone(),
        renames,
    })
}

/// Immediate entries of `folder` matching `kind`, sorted by name. The
/// sort key is the raw file-name bytes, a total ordering independent of
/// any locale.
fn list_entry_names(folder: &Path, kind: EntryKind) -> Result<Vec<String>, ConfigError> {
    let read_error = |source| ConfigError::ReadFolder {
        path: folder.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let file_type = entry.file_type().map_err(read_error)?;
        let keep = match kind {
            EntryKind::Files => file_type.is_file(),
            EntryKind::Folders => file_type.is_dir(),
        };
        if keep {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names
        .into_iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect())
}

/// Deterministic plan id: a truncated digest over the folder, the
/// configuration and the sorted entry names. Identical inputs hash to
/// the identical id, so repeated plan computations are comparable.
fn generate_plan_id(folder: &Path, config: &RenameConfig, names: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(folder.to_string_lossy().as_bytes());
    hasher.update(format!("{:?}", config).as_bytes());
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update([0]);
    }
    let digest = hasher.finalize();
    let mut id = String::with_capacity(16);
    for byte in &digest[..8] {
        write!(id, "{byte:02x}").unwrap();
    }
    id
}
