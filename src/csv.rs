//! Minimal CSV/TSV and JSON readers that produce raw job rows.
//!
//! Rows come back unvalidated; [`crate::types::validate_jobs`] decides which
//! ones survive.

use std::fs;
use std::path::Path;

use crate::error::{Result, StickerError};
use crate::types::{RawJob, RawValue};

/// Delimiter for parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

/// Input formats for job lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobFormat {
    Delimited(Delimiter),
    Json,
}

impl JobFormat {
    /// Guess the format from a file extension; defaults to CSV.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "tsv" | "tab" => Self::Delimited(Delimiter::Tab),
            _ => Self::Delimited(Delimiter::Comma),
        }
    }
}

/// Read a job file, picking the format from its extension.
///
/// # Errors
/// [`StickerError::Io`] if the file cannot be read, otherwise any parse error.
pub fn read_jobs_file(path: &Path) -> Result<Vec<RawJob>> {
    let data = fs::read(path)?;
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(JobFormat::Delimited(Delimiter::Comma), JobFormat::from_extension);
    tracing::debug!(path = %path.display(), ?format, "reading job file");
    parse_jobs(&data, format)
}

/// Parse job rows in the given format.
pub fn parse_jobs(data: &[u8], format: JobFormat) -> Result<Vec<RawJob>> {
    match format {
        JobFormat::Delimited(delim) => parse_jobs_delimited(data, delim),
        JobFormat::Json => parse_jobs_json(data),
    }
}

/// Parse a JSON array of `{ "top", "bottom", "count" }` objects.
pub fn parse_jobs_json(data: &[u8]) -> Result<Vec<RawJob>> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse CSV/TSV bytes with a header row naming `top`, `bottom` and `count`.
///
/// Header names are matched case-insensitively and may appear in any order;
/// extra columns are ignored. Blank lines are skipped.
pub fn parse_jobs_delimited(data: &[u8], delim: Delimiter) -> Result<Vec<RawJob>> {
    let text = String::from_utf8_lossy(data);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let sep = match delim {
        Delimiter::Comma => ',',
        Delimiter::Tab => '\t',
    };

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| StickerError::Csv("empty job file".to_string()))?;
    let columns = HeaderColumns::find(&split_csv_line(header, sep))?;

    let jobs = lines
        .map(|line| {
            let fields = split_csv_line(line, sep);
            let field = |idx: usize| {
                fields
                    .get(idx)
                    .map(|f| f.trim())
                    .filter(|f| !f.is_empty())
                    .map(|f| RawValue::Text(f.to_string()))
            };
            RawJob {
                top: field(columns.top),
                bottom: field(columns.bottom),
                count: field(columns.count),
            }
        })
        .collect();
    Ok(jobs)
}

struct HeaderColumns {
    top: usize,
    bottom: usize,
    count: usize,
}

impl HeaderColumns {
    fn find(header: &[String]) -> Result<Self> {
        let position = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| StickerError::Csv(format!("missing \"{name}\" column in header")))
        };
        Ok(Self {
            top: position("top")?,
            bottom: position("bottom")?,
            count: position("count")?,
        })
    }
}

/// Split a CSV line respecting quoted fields.
fn split_csv_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::validate_jobs;

    #[test]
    fn test_parse_csv_basic() {
        let data = b"top,bottom,count\n5001,19608,2\n5002,19609,1\n";
        let raw = parse_jobs_delimited(data, Delimiter::Comma).unwrap();
        assert_eq!(raw.len(), 2);
        let jobs = validate_jobs(&raw);
        assert_eq!(jobs[0].pair(), ("5001", "19608"));
        assert_eq!(jobs[0].count(), 2);
    }

    #[test]
    fn test_header_any_order_and_case() {
        let data = b"Count,Notes,BOTTOM,Top\n3,ignored,B,A\n";
        let jobs = validate_jobs(&parse_jobs_delimited(data, Delimiter::Comma).unwrap());
        assert_eq!(jobs[0].pair(), ("A", "B"));
        assert_eq!(jobs[0].count(), 3);
    }

    #[test]
    fn test_parse_tsv() {
        let data = b"top\tbottom\tcount\n\nA\t1\t4\n";
        let raw = parse_jobs_delimited(data, Delimiter::Tab).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(validate_jobs(&raw)[0].count(), 4);
    }

    #[test]
    fn test_quoted_csv() {
        let data = b"top,bottom,count\n\"Lot, 7\",\"She said \"\"hi\"\"\",1";
        let jobs = validate_jobs(&parse_jobs_delimited(data, Delimiter::Comma).unwrap());
        assert_eq!(jobs[0].top(), "Lot, 7");
        assert_eq!(jobs[0].bottom(), "She said \"hi\"");
    }

    #[test]
    fn test_short_rows_are_dropped_by_validation() {
        let data = b"top,bottom,count\nA,1\nB,2,x\nC,3,2\n";
        let raw = parse_jobs_delimited(data, Delimiter::Comma).unwrap();
        assert_eq!(raw.len(), 3);
        let jobs = validate_jobs(&raw);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].top(), "C");
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = parse_jobs_delimited(b"top,bottom\nA,1\n", Delimiter::Comma).unwrap_err();
        assert!(err.to_string().contains("count"));
        assert!(parse_jobs_delimited(b"", Delimiter::Comma).is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(JobFormat::from_extension("JSON"), JobFormat::Json);
        assert_eq!(
            JobFormat::from_extension("tsv"),
            JobFormat::Delimited(Delimiter::Tab)
        );
        assert_eq!(
            JobFormat::from_extension("csv"),
            JobFormat::Delimited(Delimiter::Comma)
        );
    }

    #[test]
    fn test_read_jobs_file() {
        let name = format!("stickersheet-jobs-{}.tsv", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "top\tbottom\tcount\nA\t1\t2\n").unwrap();
        let raw = read_jobs_file(&path);
        fs::remove_file(&path).unwrap();
        let jobs = validate_jobs(&raw.unwrap());
        assert_eq!(jobs[0].pair(), ("A", "1"));
        assert_eq!(jobs[0].count(), 2);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_jobs_file(Path::new("/nonexistent/stickersheet/jobs.csv")).unwrap_err();
        assert!(matches!(err, StickerError::Io(_)));
    }

    #[test]
    fn test_parse_json() {
        let raw = parse_jobs(
            br#"[{"top": "A", "bottom": "1", "count": 2}]"#,
            JobFormat::Json,
        )
        .unwrap();
        assert_eq!(validate_jobs(&raw)[0].count(), 2);
        assert!(parse_jobs(b"{", JobFormat::Json).is_err());
    }
}
