//! Locale-code resolution.
//!
//! Package descriptors identify languages by numeric Windows locale codes
//! (LCIDs). The builder only needs two facts about a code: the language it
//! denotes and the canonical three-letter tag its files carry as an
//! extension. [`LanguageResolver`] is the seam for that lookup;
//! [`WindowsLocaleResolver`] is the built-in table-backed implementation.

use std::collections::HashMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

/// A resolved locale: the numeric code, its language, and the lowercase
/// three-letter tag used as a file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub code: u32,
    pub language: LanguageIdentifier,
    pub extension: String,
}

/// Maps a numeric locale code to a language and its file-extension tag.
///
/// Injected into the builder so callers can substitute their own lookup
/// (a platform culture service, a project-specific table, a test stub).
pub trait LanguageResolver {
    fn resolve(&self, code: u32) -> Option<ResolvedLocale>;
}

lazy_static! {
    /// Windows LCID → (BCP 47 tag, three-letter Windows language name).
    static ref LCID_TABLE: HashMap<u32, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        for &(code, tag, extension) in &[
            (1025u32, "ar-SA", "ara"),
            (1028, "zh-TW", "cht"),
            (1029, "cs-CZ", "csy"),
            (1030, "da-DK", "dan"),
            (1031, "de-DE", "deu"),
            (1032, "el-GR", "ell"),
            (1033, "en-US", "enu"),
            (1034, "es-ES", "esp"),
            (1035, "fi-FI", "fin"),
            (1036, "fr-FR", "fra"),
            (1037, "he-IL", "heb"),
            (1038, "hu-HU", "hun"),
            (1040, "it-IT", "ita"),
            (1041, "ja-JP", "jpn"),
            (1042, "ko-KR", "kor"),
            (1043, "nl-NL", "nld"),
            (1044, "nb-NO", "nor"),
            (1045, "pl-PL", "plk"),
            (1046, "pt-BR", "ptb"),
            (1048, "ro-RO", "rom"),
            (1049, "ru-RU", "rus"),
            (1050, "hr-HR", "hrv"),
            (1051, "sk-SK", "sky"),
            (1053, "sv-SE", "sve"),
            (1055, "tr-TR", "trk"),
            (1058, "uk-UA", "ukr"),
            (1060, "sl-SI", "slv"),
            (1061, "et-EE", "eti"),
            (1062, "lv-LV", "lvi"),
            (1063, "lt-LT", "lth"),
            (1066, "vi-VN", "vit"),
            (1081, "hi-IN", "hin"),
            (1086, "ms-MY", "msl"),
            (2052, "zh-CN", "chs"),
            (2057, "en-GB", "eng"),
            (2070, "pt-PT", "ptg"),
            (3082, "es-ES", "esn"),
        ] {
            m.insert(code, (tag, extension));
        }
        m
    };
}

/// Resolver backed by the static Windows LCID table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsLocaleResolver;

impl LanguageResolver for WindowsLocaleResolver {
    fn resolve(&self, code: u32) -> Option<ResolvedLocale> {
        let &(tag, extension) = LCID_TABLE.get(&code)?;
        let language = tag.parse::<LanguageIdentifier>().ok()?;
        Some(ResolvedLocale {
            code,
            language,
            extension: extension.to_string(),
        })
    }
}
