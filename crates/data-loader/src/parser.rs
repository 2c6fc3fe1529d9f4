//! Parser for the interaction data files.
//!
//! Both files use `::` as the field separator, one record per line:
//! - items.dat: itemId::type::title::createdAt
//! - interactions.dat: interactionId::learnerId::itemId::kind
//!
//! Blank lines and lines starting with `#` are skipped. Whitespace around
//! each field is dropped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::{FromStr, Split};

pub const ITEMS_FILE: &str = "items.dat";
pub const INTERACTIONS_FILE: &str = "interactions.dat";

const FIELD_SEPARATOR: &str = "::";

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Cursor over the fields of one line, carrying enough context to report
/// where a bad field came from.
struct Fields<'a> {
    parts: Split<'a, &'static str>,
    file: &'static str,
    line: usize,
    expected: usize,
}

impl<'a> Fields<'a> {
    fn new(line_str: &'a str, file: &'static str, line: usize, expected: usize) -> Self {
        Self {
            parts: line_str.split(FIELD_SEPARATOR),
            file,
            line,
            expected,
        }
    }

    /// Next field with surrounding whitespace removed
    fn next_str(&mut self, name: &str) -> Result<&'a str> {
        self.parts
            .next()
            .map(str::trim)
            .ok_or_else(|| DataLoadError::ParseError {
                file: self.file.to_string(),
                line: self.line,
                reason: format!("Missing {}", name),
            })
    }

    fn next_parsed<T>(&mut self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.next_str(name)?;
        raw.parse().map_err(|e| DataLoadError::ParseError {
            file: self.file.to_string(),
            line: self.line,
            reason: format!("Invalid {}: {}", name, e),
        })
    }

    /// Fails if the line has fields left over
    fn finish(mut self) -> Result<()> {
        let extra = self.parts.by_ref().count();
        if extra > 0 {
            return Err(DataLoadError::FieldCountMismatch {
                expected: self.expected,
                found: self.expected + extra,
                line: self.line,
            });
        }
        Ok(())
    }
}

/// Yields (line number, trimmed line) for every line holding a record
fn records(lines: &[String]) -> impl Iterator<Item = (usize, &str)> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse a single items.dat line
pub fn parse_item_line(line: &str, line_no: usize) -> Result<Item> {
    let mut fields = Fields::new(line, ITEMS_FILE, line_no, 4);

    let item = Item {
        id: fields.next_parsed("itemId")?,
        item_type: fields.next_str("type")?.to_string(),
        title: fields.next_str("title")?.to_string(),
        created_at: fields.next_str("createdAt")?.to_string(),
    };
    fields.finish()?;

    Ok(item)
}

/// Parse a single interactions.dat line
pub fn parse_interaction_line(line: &str, line_no: usize) -> Result<InteractionLog> {
    let mut fields = Fields::new(line, INTERACTIONS_FILE, line_no, 4);

    let log = InteractionLog {
        id: fields.next_parsed("interactionId")?,
        learner_id: fields.next_parsed("learnerId")?,
        item_id: fields.next_parsed("itemId")?,
        kind: fields.next_str("kind")?.to_string(),
    };
    fields.finish()?;

    Ok(log)
}

/// Parse the items.dat file
pub fn parse_items(path: &Path) -> Result<Vec<Item>> {
    let lines = read_lines(path)?;
    records(&lines)
        .map(|(line_no, line)| parse_item_line(line, line_no))
        .collect()
}

/// Parse the interactions.dat file, preserving file order
pub fn parse_interactions(path: &Path) -> Result<Vec<InteractionLog>> {
    let lines = read_lines(path)?;
    records(&lines)
        .map(|(line_no, line)| parse_interaction_line(line, line_no))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_interaction_line() {
        let log = parse_interaction_line("7::3::-2::attempt", 1).unwrap();
        assert_eq!(log, InteractionLog::attempt(7, 3, -2));
    }

    #[test]
    fn test_parse_item_line_keeps_timestamp_verbatim() {
        let item = parse_item_line("1::lab::Lab 01 - Intro::2025-01-15 10:00:00", 1).unwrap();
        assert_eq!(item.item_type, "lab");
        assert_eq!(item.title, "Lab 01 - Intro");
        assert_eq!(item.created_at, "2025-01-15 10:00:00");
    }

    #[test]
    fn test_extra_fields_rejected() {
        let item = parse_item_line("1::lab::Lab 01 :: Intro::2025-01-15T10:00:00", 1);
        assert!(matches!(
            item,
            Err(DataLoadError::FieldCountMismatch { expected: 4, found: 5, line: 1 })
        ));
    }

    #[test]
    fn test_padded_fields_are_trimmed() {
        let log = parse_interaction_line("1 :: 2 :: 3 :: attempt", 1).unwrap();
        assert_eq!(log, InteractionLog::attempt(1, 2, 3));

        let item = parse_item_line("4 ::  lab :: Lab 02 ::2025-01-22 10:00:00 ", 1).unwrap();
        assert_eq!(item.item_type, "lab");
        assert_eq!(item.title, "Lab 02");
        assert_eq!(item.created_at, "2025-01-22 10:00:00");
    }

    #[test]
    fn test_extra_interaction_field_rejected() {
        let log = parse_interaction_line("1::1::1::attempt::x", 9);
        assert!(matches!(
            log,
            Err(DataLoadError::FieldCountMismatch { expected: 4, found: 5, line: 9 })
        ));
    }

    #[test]
    fn test_missing_field_reports_line() {
        let err = parse_interaction_line("1::2::3", 42).unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, INTERACTIONS_FILE);
                assert_eq!(line, 42);
                assert_eq!(reason, "Missing kind");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_id_names_the_field() {
        let err = parse_interaction_line("1::two::3::attempt", 5).unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 5);
                assert!(reason.starts_with("Invalid learnerId"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_interactions_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# id::learner::item::kind").unwrap();
        writeln!(file, "1::1::1::attempt").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2::2::0::view").unwrap();

        let logs = parse_interactions(file.path()).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].id, 1);
        assert_eq!(logs[1].item_id, 0);
        assert_eq!(logs[1].kind, "view");
    }

    #[test]
    fn test_error_line_numbers_count_skipped_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1::1::1::attempt").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "broken").unwrap();

        let err = parse_interactions(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_items(&dir.path().join(ITEMS_FILE)).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // Reading a directory as a file fails with something other than NotFound
        let dir = tempfile::tempdir().unwrap();
        let err = parse_interactions(dir.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::IoError(_)), "{err}");
    }
}
