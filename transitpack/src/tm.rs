//! Translation-memory file classification.
//!
//! Every extracted file matching a locale's extension is either plain
//! translatable content or a TM descriptor. A TM descriptor is an XML
//! document whose root element carries an `ExtFileType` attribute; its
//! identity is the `GUID` attribute of the first descendant element named
//! `FFD`.

use std::{
    fmt::{self, Display},
    fs::File,
    io::BufReader,
    path::Path,
    str::FromStr,
};

use quick_xml::{Reader, events::{BytesStart, Event}};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// 128-bit translation-memory identifier.
///
/// Parses the usual GUID spellings (hyphenated, with or without braces);
/// hyphens and braces are cosmetic. Displays in canonical lowercase
/// hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TmId(u128);

impl TmId {
    /// The all-zero identifier. A nil id appearing in a document is a real
    /// identifier; "not a TM" is expressed as `Option::None`, never as nil.
    pub const fn nil() -> Self {
        TmId(0)
    }

    pub fn is_nil(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for TmId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);
        let digits: String = inner.chars().filter(|c| *c != '-').collect();
        if digits.len() != 32 {
            return Err(format!("invalid TM identifier: {}", s));
        }
        u128::from_str_radix(&digits, 16)
            .map(TmId)
            .map_err(|_| format!("invalid TM identifier: {}", s))
    }
}

impl Display for TmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (self.0 >> 96) as u32,
            (self.0 >> 80) as u16,
            (self.0 >> 64) as u16,
            (self.0 >> 48) as u16,
            self.0 & 0xffff_ffff_ffff
        )
    }
}

impl Serialize for TmId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TmId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Classifies one extracted file.
///
/// Returns `Some(id)` for a TM descriptor, `None` for plain content. A
/// document that declares `ExtFileType` but has no `FFD` descendant carries
/// no identifier to match against and is treated as plain content. An `FFD`
/// without a parseable `GUID` fails with [`Error::MalformedDescriptor`].
pub fn classify<P: AsRef<Path>>(path: P) -> Result<Option<TmId>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut root_seen = false;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if !root_seen {
                    root_seen = true;
                    if attribute_value(e, b"ExtFileType", path)?.is_none() {
                        return Ok(None);
                    }
                } else if e.name().as_ref() == b"FFD" {
                    let guid = attribute_value(e, b"GUID", path)?.ok_or_else(|| {
                        malformed(path, "FFD element missing GUID attribute")
                    })?;
                    let id = guid.parse::<TmId>().map_err(|e| malformed(path, e))?;
                    return Ok(Some(id));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(path, e)),
        }
        buf.clear();
    }

    Ok(None)
}

fn attribute_value(
    element: &BytesStart,
    name: &[u8],
    path: &Path,
) -> Result<Option<String>, Error> {
    for attr in element.attributes().with_checks(false) {
        let attr = attr.map_err(|e| malformed(path, e))?;
        if attr.key.as_ref() == name {
            let value = attr.unescape_value().map_err(|e| malformed(path, e))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn malformed(path: &Path, message: impl ToString) -> Error {
    Error::MalformedDescriptor {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
