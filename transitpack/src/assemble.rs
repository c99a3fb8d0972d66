//! Merging one target locale's files and TMs with the shared source side.

use std::path::PathBuf;

use unic_langid::LanguageIdentifier;

use crate::{
    tm::TmId,
    types::{LanguagePair, TmMetadata},
};

/// Assembles one language pair from source-side and target-side data.
///
/// Each target TM is matched against the source TM list by identifier; the
/// first source entry with an equal id receives the target file path. A
/// target TM whose identifier has no source counterpart is dropped
/// silently. Plain target files are appended unconditionally.
///
/// Pure single-pass transformation: the returned pair owns everything it
/// holds, and no state survives the call.
pub fn assemble(
    source_files: Vec<PathBuf>,
    source_tms: Vec<TmMetadata>,
    target_files: Vec<PathBuf>,
    target_tms: Vec<(TmId, PathBuf)>,
    source_language: Option<LanguageIdentifier>,
    target_language: Option<LanguageIdentifier>,
) -> LanguagePair {
    let mut tm_metadata = source_tms;
    for (id, path) in target_tms {
        if let Some(entry) = tm_metadata.iter_mut().find(|entry| entry.id == id) {
            entry.target_file = Some(path);
        }
    }

    LanguagePair {
        source_language,
        target_language,
        source_files,
        target_files,
        tm_metadata,
    }
}
