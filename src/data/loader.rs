use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::model::{ParsedTable, SourceRow};
use crate::error::LoadError;

/// Media type accepted in place of a `.csv` extension.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

// ---------------------------------------------------------------------------
// File acceptance
// ---------------------------------------------------------------------------

/// A file is accepted when its name ends in `.csv` (any case) or its media
/// type is `text/csv`.
pub fn accepts_file(name: &str, media_type: Option<&str>) -> bool {
    media_type == Some(CSV_MEDIA_TYPE) || name.to_ascii_lowercase().ends_with(".csv")
}

pub fn check_file_type(name: &str, media_type: Option<&str>) -> Result<(), LoadError> {
    if accepts_file(name, media_type) {
        Ok(())
    } else {
        Err(LoadError::FileType {
            name: name.to_string(),
        })
    }
}

/// Last path component, for messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read a file as text, see [`decode_bytes`].
pub fn read_path(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        name: display_name(path),
        source,
    })?;
    Ok(decode_bytes(&bytes))
}

/// UTF-8 (BOM stripped), falling back to Latin-1 when the bytes are not
/// valid UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
        Err(_) => {
            log::debug!("File is not valid UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| b as char).collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

/// How a line is cut into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiting {
    /// Split on every `,`. A comma inside quotes still separates fields.
    Naive,
    /// Quoted fields may contain commas, doubled quotes and newlines.
    QuoteAware,
}

/// Turn raw file text into a [`ParsedTable`].
///
/// The text is trimmed and split on `\r?\n`. Fewer than two lines is a
/// [`LoadError::Structure`]. Whitespace-only data lines are dropped and do
/// not count as rows at all.
pub fn tokenize(text: &str, delimiting: Delimiting) -> Result<ParsedTable, LoadError> {
    let text = text.trim();
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= 1 {
        return Err(LoadError::Structure);
    }

    match delimiting {
        Delimiting::Naive => Ok(split_lines(&lines)),
        Delimiting::QuoteAware => read_records(text),
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

fn split_lines(lines: &[&str]) -> ParsedTable {
    let header = split_fields(lines[0]);
    let rows = lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| SourceRow {
            line: idx + 1,
            fields: split_fields(line),
        })
        .collect();

    ParsedTable { header, rows }
}

fn read_records(text: &str) -> Result<ParsedTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV record {}", idx + 1))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        let fields: Vec<String> = record.iter().map(str::to_string).collect();

        if header.is_none() {
            header = Some(fields);
            continue;
        }
        if fields.len() == 1 && fields[0].trim().is_empty() {
            continue;
        }
        rows.push(SourceRow { line, fields });
    }

    // A quoted newline can make several lines a single header record.
    match header {
        Some(header) if !rows.is_empty() => Ok(ParsedTable { header, rows }),
        _ => Err(LoadError::Structure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_by_extension_or_media_type() {
        assert!(accepts_file("data.csv", None));
        assert!(accepts_file("DATA.CSV", None));
        assert!(accepts_file("export", Some("text/csv")));
        assert!(!accepts_file("data.txt", Some("text/plain")));
        assert!(!accepts_file("data.csv.bak", None));
        assert!(matches!(
            check_file_type("notes.json", None),
            Err(LoadError::FileType { .. })
        ));
    }

    #[test]
    fn header_only_is_a_structure_error() {
        assert!(matches!(
            tokenize("a,b,c\n", Delimiting::Naive),
            Err(LoadError::Structure)
        ));
        assert!(matches!(tokenize("   \n\n", Delimiting::Naive), Err(LoadError::Structure)));
        assert!(matches!(tokenize("", Delimiting::QuoteAware), Err(LoadError::Structure)));
    }

    #[test]
    fn splits_rows_and_records_source_lines() {
        let table = tokenize("a,b,c\r\n1,2,3\r\n\r\n   \n4,5\n", Delimiting::Naive).unwrap();
        assert_eq!(table.header, vec!["a", "b", "c"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[0].fields, vec!["1", "2", "3"]);
        assert_eq!(table.rows[1].line, 5);
        assert_eq!(table.rows[1].fields, vec!["4", "5"]);
    }

    #[test]
    fn naive_split_ignores_quotes() {
        let table = tokenize("name,value\n\"a,b\",3\n", Delimiting::Naive).unwrap();
        assert_eq!(table.rows[0].fields, vec!["\"a", "b\"", "3"]);
    }

    #[test]
    fn quote_aware_keeps_quoted_commas() {
        let table = tokenize("name,value\n\"a,b\",3\n\n  \n\"c\",4\n", Delimiting::QuoteAware).unwrap();
        assert_eq!(table.header, vec!["name", "value"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].fields, vec!["a,b", "3"]);
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[1].fields, vec!["c", "4"]);
        assert_eq!(table.rows[1].line, 5);
    }

    #[test]
    fn multi_line_quoted_header_alone_has_no_data_rows() {
        assert!(matches!(
            tokenize("\"a\nb\",c\n", Delimiting::QuoteAware),
            Err(LoadError::Structure)
        ));
        let table = tokenize("\"a\nb\",c\n1,2\n", Delimiting::QuoteAware).unwrap();
        assert_eq!(table.header, vec!["a\nb", "c"]);
        assert_eq!(table.rows[0].line, 3);
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        assert_eq!(decode_bytes(b"\xef\xbb\xbfa,b"), "a,b");
        assert_eq!(decode_bytes(&[b'x', 0xE9]), "x\u{e9}");
    }

    #[test]
    fn read_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.csv");
        match read_path(&missing) {
            Err(LoadError::Read { name, .. }) => assert_eq!(name, "gone.csv"),
            other => panic!("expected read error, got {other:?}"),
        }

        let path = dir.path().join("ok.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "a\n1").unwrap();
        assert_eq!(read_path(&path).unwrap(), "a\n1\n");
    }
}
