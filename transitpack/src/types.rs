//! The project model produced by a package import.
//!
//! Built once per import and handed to the caller for read-only use; nothing
//! in the crate retains a reference to it afterwards.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{error::Error, tm::TmId};

/// A reconstructed translation project: its name (when the descriptor
/// declares one) and one language pair per target locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectModel {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub language_pairs: Vec<LanguagePair>,
}

impl ProjectModel {
    /// Caches the model to a JSON file.
    pub fn cache_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = File::create(path)?;
        serde_json::to_writer(&mut writer, self).map_err(Error::Parse)?;
        Ok(())
    }

    /// Loads a model from a JSON cache file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut reader = File::open(path)?;
        serde_json::from_reader(&mut reader).map_err(Error::Parse)
    }
}

/// One source-language/target-language association with its files and TM
/// entries.
///
/// All pairs of a model share identical source-side data; each pair owns an
/// independent target-side list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguagePair {
    pub source_language: Option<LanguageIdentifier>,
    /// Unset until a target locale is assigned to this pair.
    pub target_language: Option<LanguageIdentifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub target_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub tm_metadata: Vec<TmMetadata>,
}

impl LanguagePair {
    /// True iff this pair carries translation-memory entries. Derived from
    /// the TM list, never stored independently.
    pub fn has_tm(&self) -> bool {
        !self.tm_metadata.is_empty()
    }
}

/// One translation memory of a pair: its identifier and the source-side
/// file it was found in. `target_file` is set only after a target-side TM
/// with the same identifier is matched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TmMetadata {
    pub id: TmId,
    pub source_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target_file: Option<PathBuf>,
}
