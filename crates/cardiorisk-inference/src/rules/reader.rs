//! Two-column delimited file reader for rule and test files.
//!
//! Comma separated, first non-blank line is a header, no quoting. A row with
//! more fields than the header is malformed and skipped; missing fields read
//! as empty strings and are rejected later by the parser.

use std::path::Path;

const DELIMITER: char = ',';

/// Column 0 and column 1 of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    pub antecedent: String,
    pub consequent: String,
}

impl RawRecord {
    pub fn new(antecedent: impl Into<String>, consequent: impl Into<String>) -> Self {
        Self {
            line: 0,
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        }
    }
}

/// Parse delimited text into records.
pub fn parse_delimited(text: &str) -> Vec<RawRecord> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Vec::new();
    };
    let width = header.split(DELIMITER).count().max(2);

    let mut records = Vec::new();
    for (line, row) in lines {
        let fields: Vec<&str> = row.split(DELIMITER).collect();
        if fields.len() > width {
            tracing::trace!(line, fields = fields.len(), width, "skipping malformed row");
            continue;
        }
        records.push(RawRecord {
            line,
            antecedent: fields.first().copied().unwrap_or_default().to_string(),
            consequent: fields.get(1).copied().unwrap_or_default().to_string(),
        });
    }
    records
}

/// Read and parse a delimited file.
pub fn read_delimited(path: &Path) -> std::io::Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_delimited(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_blank_lines() {
        let text = "Antecedent,Consequent\n\nAge=Old,HighRisk\r\nAge=Young,Healthy\n";
        let records = parse_delimited(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 3);
        assert_eq!(records[0].antecedent, "Age=Old");
        assert_eq!(records[1].consequent, "Healthy");
    }

    #[test]
    fn overlong_rows_are_skipped_short_rows_kept() {
        let text = "a,b\nAge=Old,HighRisk,extra\nAge=Mid\n";
        let records = parse_delimited(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].antecedent, "Age=Mid");
        assert_eq!(records[0].consequent, "");
    }

    #[test]
    fn wider_header_allows_extra_columns() {
        let text = "a,b,note\nAge=Old,HighRisk,checked\n";
        let records = parse_delimited(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].consequent, "HighRisk");
    }

    #[test]
    fn empty_text_has_no_records() {
        assert!(parse_delimited("").is_empty());
        assert!(parse_delimited("header,only\n").is_empty());
    }
}
