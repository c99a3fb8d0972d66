//! Parser for the sectioned key/value project descriptor (`.PRJ`).
//!
//! The descriptor is a line-oriented text format: `[Name]` opens a section,
//! every other non-empty line is a `key=value` pair belonging to the most
//! recently opened section. Keys may repeat within a section; when a single
//! value is expected, the last occurrence is authoritative.

use std::{fs::File, io::Read, path::Path, str::FromStr};

use crate::error::Error;

/// A parsed project descriptor: the ordered list of its sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub sections: Vec<Section>,
}

/// One named descriptor section and its key/value pairs, in file order.
///
/// Section names are case-sensitive and may be empty (`[]` is a valid
/// header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub pairs: Vec<(String, String)>,
}

impl Section {
    /// Returns the value of the last occurrence of `key`.
    ///
    /// All pairs are scanned; later duplicates overwrite earlier ones. This
    /// is the documented semantic, not an accident of loop order.
    pub fn last_value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .next_back()
    }
}

impl Descriptor {
    /// Parses descriptor text into its sections.
    ///
    /// A line whose trimmed form starts with `[` and ends with `]` opens a
    /// section; any other non-empty line must contain a `=` and is split at
    /// the first one. Blank lines are skipped. Pairs before the first
    /// section header belong to no section and are discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transitpack::Descriptor;
    ///
    /// let descriptor = Descriptor::parse("[Admin]\nProjectName=Demo")?;
    /// let admin = descriptor.section("Admin").unwrap();
    /// assert_eq!(admin.last_value("ProjectName"), Some("Demo"));
    /// # Ok::<(), transitpack::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut sections = Vec::new();
        let mut current: Option<Section> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                current = Some(Section {
                    name: line[1..line.len() - 1].to_string(),
                    pairs: Vec::new(),
                });
            } else if let Some(pos) = line.find('=') {
                if let Some(section) = current.as_mut() {
                    section
                        .pairs
                        .push((line[..pos].to_string(), line[pos + 1..].to_string()));
                }
            } else {
                return Err(Error::MalformedLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
        }

        // The last section has no following header to trigger its flush.
        if let Some(section) = current.take() {
            sections.push(section);
        }

        Ok(Self { sections })
    }

    /// Parse from any reader.
    pub fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let content = reader.lines().collect::<Result<Vec<_>, _>>()?.join("\n");
        Self::parse(&content)
    }

    /// Parse from a file path, decoding BOM-marked text automatically and
    /// falling back to Windows-1252 (descriptors are ANSI text).
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::WINDOWS_1252))
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;

        Self::parse(&decoded)
    }

    /// Looks up a section by name.
    ///
    /// When a name is declared more than once, the last declaration wins,
    /// consistent with the key lookup policy.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().rev().find(|s| s.name == name)
    }
}

impl FromStr for Descriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn parses_sections_in_order() {
        let text = indoc! {"
            [Admin]
            ProjectName=Demo
            [Languages]
            SourceLanguage=1033
            TargetLanguages=1036|1031
        "};
        let descriptor = Descriptor::parse(text).unwrap();

        assert_eq!(descriptor.sections.len(), 2);
        assert_eq!(descriptor.sections[0].name, "Admin");
        assert_eq!(descriptor.sections[1].name, "Languages");
        assert_eq!(
            descriptor.section("Languages").unwrap().last_value("SourceLanguage"),
            Some("1033")
        );
    }

    // The last section has no following header to trigger its flush; it
    // must be flushed at end-of-input.
    #[test]
    fn final_section_flushed_at_end_of_input() {
        let text = "[Admin]\nProjectName=Demo\n[Languages]\nSourceLanguage=1033";
        let descriptor = Descriptor::parse(text).unwrap();

        let languages = descriptor.section("Languages").unwrap();
        assert_eq!(languages.last_value("SourceLanguage"), Some("1033"));
    }

    #[test]
    fn line_without_separator_is_malformed_not_a_crash() {
        let err = Descriptor::parse("[Admin]\nProjectName").unwrap_err();
        match err {
            Error::MalformedLine { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "ProjectName");
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn value_keeps_everything_after_first_separator() {
        let descriptor = Descriptor::parse("[Files]\nPath=C:=mounted").unwrap();
        assert_eq!(
            descriptor.section("Files").unwrap().last_value("Path"),
            Some("C:=mounted")
        );
    }

    #[test]
    fn duplicate_keys_last_occurrence_wins() {
        let text = indoc! {"
            [Admin]
            ProjectName=First
            ProjectName=Second
        "};
        let descriptor = Descriptor::parse(text).unwrap();
        assert_eq!(
            descriptor.section("Admin").unwrap().last_value("ProjectName"),
            Some("Second")
        );
    }

    #[test]
    fn empty_section_is_still_declared() {
        let descriptor = Descriptor::parse("[Empty]\n[Admin]\nProjectName=Demo").unwrap();
        let empty = descriptor.section("Empty").unwrap();
        assert!(empty.pairs.is_empty());
    }

    #[test]
    fn empty_section_name_is_allowed() {
        let descriptor = Descriptor::parse("[]\nkey=value").unwrap();
        assert_eq!(descriptor.section("").unwrap().last_value("key"), Some("value"));
    }

    #[test]
    fn pairs_before_first_header_are_discarded() {
        let descriptor = Descriptor::parse("orphan=value\n[Admin]\nProjectName=Demo").unwrap();
        assert_eq!(descriptor.sections.len(), 1);
        assert!(descriptor.section("Admin").unwrap().last_value("orphan").is_none());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let descriptor = Descriptor::parse("[Admin]\n\nProjectName=Demo\n\n").unwrap();
        assert_eq!(
            descriptor.section("Admin").unwrap().last_value("ProjectName"),
            Some("Demo")
        );
    }

    #[test]
    fn duplicate_section_names_last_declaration_wins() {
        let text = indoc! {"
            [Admin]
            ProjectName=First
            [Admin]
            ProjectName=Second
        "};
        let descriptor = Descriptor::parse(text).unwrap();
        assert_eq!(descriptor.sections.len(), 2);
        assert_eq!(
            descriptor.section("Admin").unwrap().last_value("ProjectName"),
            Some("Second")
        );
    }

    #[test]
    fn reads_windows_1252_descriptor_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.PRJ");
        // "Caf\xe9" is Windows-1252 for "Café"
        std::fs::write(&path, b"[Admin]\nProjectName=Caf\xe9\n").unwrap();

        let descriptor = Descriptor::read_from(&path).unwrap();
        assert_eq!(
            descriptor.section("Admin").unwrap().last_value("ProjectName"),
            Some("Café")
        );
    }
}
