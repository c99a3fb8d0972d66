#![forbid(unsafe_code)]
//! Translation package import toolkit for Rust.
//!
//! Opens StarTransit-style project packages and rebuilds a structured
//! project model: which files belong to which source/target language, and
//! which of them are translation-memory (TM) descriptors rather than plain
//! translatable content.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use transitpack::{WindowsLocaleResolver, open_package};
//!
//! let model = open_package("demo.ppf", "extracted", &WindowsLocaleResolver)?;
//! for pair in &model.language_pairs {
//!     println!(
//!         "{:?} -> {:?}: {} target files, TM: {}",
//!         pair.source_language,
//!         pair.target_language,
//!         pair.target_files.len(),
//!         pair.has_tm(),
//!     );
//! }
//! # Ok::<(), transitpack::Error>(())
//! ```
//!
//! # Pipeline
//!
//! extraction → descriptor parse → locale resolution → file scan and
//! classification → language-pair assembly. Each step threads its state as
//! explicit inputs and outputs; nothing is shared between imports, so
//! independent imports can run concurrently.

pub mod assemble;
pub mod builder;
pub mod descriptor;
pub mod error;
pub mod locale;
pub mod package;
pub mod scan;
pub mod tm;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    assemble::assemble,
    builder::build_model,
    descriptor::{Descriptor, Section},
    error::Error,
    locale::{LanguageResolver, ResolvedLocale, WindowsLocaleResolver},
    package::open_package,
    tm::{TmId, classify},
    types::{LanguagePair, ProjectModel, TmMetadata},
};
