//! Builds the project model from a parsed descriptor and an extraction root.
//!
//! All intermediate state is local to one `build_model` call, so any number
//! of imports can run concurrently without sharing anything.

use std::path::{Path, PathBuf};

use crate::{
    assemble::assemble,
    descriptor::Descriptor,
    error::Error,
    locale::{LanguageResolver, ResolvedLocale},
    scan::files_with_extension,
    tm::{TmId, classify},
    types::{ProjectModel, TmMetadata},
};

/// Target locale codes are joined by this character in the descriptor.
const TARGET_LANGUAGE_SEPARATOR: char = '|';

/// Builds a [`ProjectModel`] from a parsed descriptor and the directory the
/// package was extracted into.
///
/// The `Admin` and `Languages` sections are optional: a missing section (or
/// key) leaves the corresponding model part unset and skips that side's
/// file scan, rather than failing. Everything else in the error taxonomy
/// aborts the build with no partial model.
pub fn build_model<R>(
    descriptor: &Descriptor,
    extraction_root: &Path,
    resolver: &R,
) -> Result<ProjectModel, Error>
where
    R: LanguageResolver + ?Sized,
{
    let name = descriptor
        .section("Admin")
        .and_then(|s| s.last_value("ProjectName"))
        .map(str::to_owned);

    let languages = descriptor.section("Languages");
    let source_locale = languages
        .and_then(|s| s.last_value("SourceLanguage"))
        .map(|token| resolve_code(resolver, token.trim()))
        .transpose()?;
    let target_locales = match languages.and_then(|s| s.last_value("TargetLanguages")) {
        Some(value) => value
            .split(TARGET_LANGUAGE_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| resolve_code(resolver, token))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let (source_files, source_tms) = match &source_locale {
        Some(locale) => {
            let scanned = files_with_extension(extraction_root, &locale.extension)?;
            split_source_side(scanned)?
        }
        None => (Vec::new(), Vec::new()),
    };
    let source_language = source_locale.as_ref().map(|l| l.language.clone());

    let mut language_pairs = Vec::new();
    if target_locales.is_empty() {
        // A project without target locales still carries its source side;
        // the target language stays unset until one is assigned.
        if source_locale.is_some() {
            language_pairs.push(assemble(
                source_files,
                source_tms,
                Vec::new(),
                Vec::new(),
                source_language,
                None,
            ));
        }
    } else {
        for target in &target_locales {
            let scanned = files_with_extension(extraction_root, &target.extension)?;
            let (target_files, target_tms) = split_target_side(scanned)?;
            language_pairs.push(assemble(
                source_files.clone(),
                source_tms.clone(),
                target_files,
                target_tms,
                source_language.clone(),
                Some(target.language.clone()),
            ));
        }
    }

    Ok(ProjectModel {
        name,
        language_pairs,
    })
}

fn resolve_code<R>(resolver: &R, token: &str) -> Result<ResolvedLocale, Error>
where
    R: LanguageResolver + ?Sized,
{
    token
        .parse::<u32>()
        .ok()
        .and_then(|code| resolver.resolve(code))
        .ok_or_else(|| Error::InvalidLanguageCode(token.to_string()))
}

/// Splits scanned source-side files into plain files and TM entries.
/// Duplicate TM identifiers keep their first file, preserving id uniqueness
/// within a pair.
fn split_source_side(paths: Vec<PathBuf>) -> Result<(Vec<PathBuf>, Vec<TmMetadata>), Error> {
    let mut files = Vec::new();
    let mut tms: Vec<TmMetadata> = Vec::new();
    for path in paths {
        match classify(&path)? {
            Some(id) => {
                if tms.iter().all(|entry| entry.id != id) {
                    tms.push(TmMetadata {
                        id,
                        source_file: path,
                        target_file: None,
                    });
                }
            }
            None => files.push(path),
        }
    }
    Ok((files, tms))
}

fn split_target_side(paths: Vec<PathBuf>) -> Result<(Vec<PathBuf>, Vec<(TmId, PathBuf)>), Error> {
    let mut files = Vec::new();
    let mut tms = Vec::new();
    for path in paths {
        match classify(&path)? {
            Some(id) => tms.push((id, path)),
            None => files.push(path),
        }
    }
    Ok((files, tms))
}
