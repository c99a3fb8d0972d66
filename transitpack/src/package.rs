//! Opening a translation package end to end.
//!
//! The archive container itself is handled by the `zip` crate; this module
//! extracts every entry under a destination root, locates the project
//! descriptor, and hands off to the builder.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use zip::ZipArchive;

use crate::{
    builder::build_model, descriptor::Descriptor, error::Error, locale::LanguageResolver,
    types::ProjectModel,
};

/// Opens a package, extracts its contents under `destination`, and builds
/// the project model.
///
/// Entry paths are preserved relative to `destination`, with directories
/// created as needed. Entries whose names would escape the destination are
/// skipped. The descriptor is the last entry whose name ends in `.PRJ`
/// (case-insensitive); a package without one fails with
/// [`Error::MissingDescriptor`].
///
/// Cleanup of partially extracted output on failure is the caller's
/// responsibility.
pub fn open_package<P, Q, R>(
    package: P,
    destination: Q,
    resolver: &R,
) -> Result<ProjectModel, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: LanguageResolver + ?Sized,
{
    let destination = destination.as_ref();
    let file = File::open(package.as_ref())
        .map_err(|e| Error::ArchiveUnreadable(zip::result::ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(file)?;

    let mut descriptor_path: Option<PathBuf> = None;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let out_path = destination.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;

        // Last entry with the suffix wins; uniqueness is not validated.
        if entry.name().to_ascii_lowercase().ends_with(".prj") {
            descriptor_path = Some(out_path);
        }
    }

    let descriptor_path = descriptor_path.ok_or(Error::MissingDescriptor)?;
    let descriptor = Descriptor::read_from(&descriptor_path)?;
    build_model(&descriptor, destination, resolver)
}
