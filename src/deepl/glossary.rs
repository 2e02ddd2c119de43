//! Glossary metadata, TSV entry parsing and pre-upload validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A glossary as returned by the DeepL API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    pub glossary_id: String,
    pub name: String,
    pub ready: bool,
    pub source_lang: String,
    pub target_lang: String,
    pub creation_time: DateTime<Utc>,
    pub entry_count: u64,
}

impl Glossary {
    /// Whether this glossary fits a translation from `source_lang` to
    /// `target_lang`.
    ///
    /// An empty source matches any source. Targets are compared on their
    /// primary subtag, so a glossary for `en` serves `EN-GB` and `EN-US`.
    pub fn matches(&self, source_lang: Option<&str>, target_lang: Option<&str>) -> bool {
        let source = source_lang.filter(|s| !s.is_empty());
        let target = target_lang.filter(|t| !t.is_empty());

        if source.is_none() && target.is_none() {
            return true;
        }

        let source_matches = source.is_none_or(|s| self.source_lang.eq_ignore_ascii_case(s));
        let target_matches = target.is_none_or(|t| {
            let primary = t.split('-').next().unwrap_or(t).to_uppercase();
            self.target_lang.to_uppercase().starts_with(&primary)
        });

        source_matches && target_matches
    }

    pub const fn status_label(&self) -> &'static str {
        if self.ready { "Ready" } else { "Processing" }
    }
}

/// One source → target term pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub source: String,
    pub target: String,
}

impl GlossaryEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Parses tab-separated glossary entries, one per non-empty line.
///
/// Parsing never fails: a line without a tab yields an empty target. Lines
/// are checked for a separator before upload by [`validate_glossary`].
pub fn parse_entries(tsv: &str) -> Vec<GlossaryEntry> {
    tsv.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((source, target)) => {
                // Only the first two columns carry the pair.
                let target = target.split('\t').next().unwrap_or(target);
                GlossaryEntry::new(source, target)
            }
            None => GlossaryEntry::new(line, ""),
        })
        .collect()
}

/// Serializes entries back to the TSV wire format.
pub fn entries_to_tsv(entries: &[GlossaryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}\t{}", e.source, e.target))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Form field a validation problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossaryField {
    Name,
    Entries,
}

impl fmt::Display for GlossaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Entries => f.write_str("entries"),
        }
    }
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: GlossaryField,
    pub message: String,
}

/// All problems found in a glossary before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_issues(.issues))]
pub struct GlossaryValidationError {
    pub issues: Vec<FieldIssue>,
}

impl GlossaryValidationError {
    pub fn issue_for(&self, field: GlossaryField) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.message.as_str())
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Checks the name and TSV payload of a new glossary.
///
/// Every field is checked so all problems are reported at once.
pub fn validate_glossary(name: &str, entries_tsv: &str) -> Result<(), GlossaryValidationError> {
    let mut issues = Vec::new();

    if name.trim().is_empty() {
        issues.push(FieldIssue {
            field: GlossaryField::Name,
            message: "Name is required".to_string(),
        });
    }

    if entries_tsv.trim().is_empty() {
        issues.push(FieldIssue {
            field: GlossaryField::Entries,
            message: "Entries required".to_string(),
        });
    } else if let Some((index, _)) = entries_tsv
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .find(|(_, line)| !line.contains('\t'))
    {
        issues.push(FieldIssue {
            field: GlossaryField::Entries,
            message: format!(
                "Each line must have source<TAB>target format (line {})",
                index + 1
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(GlossaryValidationError { issues })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn glossary(source: &str, target: &str) -> Glossary {
        Glossary {
            glossary_id: "id".to_string(),
            name: "Test".to_string(),
            ready: true,
            source_lang: source.to_string(),
            target_lang: target.to_string(),
            creation_time: "2024-05-01T10:00:00Z".parse().unwrap(),
            entry_count: 2,
        }
    }

    #[test]
    fn test_parse_entries_scenario() {
        let entries = parse_entries("cat\tkatze\ndog\thund\n");
        assert_eq!(
            entries,
            vec![
                GlossaryEntry::new("cat", "katze"),
                GlossaryEntry::new("dog", "hund"),
            ]
        );
    }

    #[test]
    fn test_parse_entries_skips_blank_lines_and_crlf() {
        let entries = parse_entries("\r\nhello\thallo\r\n\n\nbye\ttschüss\n\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], GlossaryEntry::new("hello", "hallo"));
        assert_eq!(entries[1], GlossaryEntry::new("bye", "tschüss"));
    }

    #[test]
    fn test_parse_entries_without_tab_is_not_an_error() {
        let entries = parse_entries("catkatze");
        assert_eq!(entries, vec![GlossaryEntry::new("catkatze", "")]);
    }

    #[test]
    fn test_entries_to_tsv_round_trip() {
        let entries = vec![GlossaryEntry::new("a", "b"), GlossaryEntry::new("c d", "e f")];
        assert_eq!(parse_entries(&entries_to_tsv(&entries)), entries);
    }

    #[test]
    fn test_validate_accepts_well_formed_entries() {
        assert!(validate_glossary("Pets", "cat\tKatze\ndog\tHund\n").is_ok());
    }

    #[test]
    fn test_validate_rejects_line_without_tab() {
        let err = validate_glossary("Pets", "catkatze").unwrap_err();
        let message = err.issue_for(GlossaryField::Entries).unwrap();
        assert!(message.contains("source<TAB>target"));
        assert!(err.issue_for(GlossaryField::Name).is_none());
    }

    #[test]
    fn test_validate_reports_every_field() {
        let err = validate_glossary("  ", "\n \n").unwrap_err();
        assert_eq!(err.issue_for(GlossaryField::Name), Some("Name is required"));
        assert_eq!(err.issue_for(GlossaryField::Entries), Some("Entries required"));
        assert!(err.to_string().contains("name: Name is required"));
    }

    #[test]
    fn test_validate_points_at_offending_line() {
        let err = validate_glossary("Pets", "cat\tKatze\ndog Hund").unwrap_err();
        assert!(err.issue_for(GlossaryField::Entries).unwrap().contains("line 2"));
    }

    #[test]
    fn test_line_number_counts_leading_blank_lines() {
        let err = validate_glossary("Pets", "\n\ncat\tKatze\ndog Hund").unwrap_err();
        let message = err.issue_for(GlossaryField::Entries).unwrap();
        assert!(message.ends_with("(line 4)"), "{message}");
    }

    #[test]
    fn test_matches_target_by_primary_subtag() {
        let g = glossary("en", "de");
        assert!(g.matches(None, Some("DE")));
        assert!(g.matches(Some("EN"), Some("de")));
        assert!(!g.matches(Some("FR"), Some("DE")));
        assert!(!g.matches(None, Some("ES")));

        let g = glossary("de", "en");
        assert!(g.matches(Some("de"), Some("EN-GB")));
        assert!(g.matches(None, None));
        assert!(g.matches(Some(""), None));
    }

    #[test]
    fn test_glossary_deserializes_api_payload() {
        let json = r#"{
            "glossary_id": "def3a26b-3e84-45b3-84ae-0c0aaf3525f7",
            "name": "My Glossary",
            "ready": true,
            "source_lang": "en",
            "target_lang": "de",
            "creation_time": "2021-08-03T14:16:18.329Z",
            "entry_count": 1
        }"#;
        let g: Glossary = serde_json::from_str(json).unwrap();
        assert_eq!(g.name, "My Glossary");
        assert_eq!(g.entry_count, 1);
        assert_eq!(g.status_label(), "Ready");
    }
}
