//! Release list reader.
//!
//! Input is line-oriented text, one release per line:
//!
//! ```text
//! <deliveryDay> <timeToTest>
//! ```
//!
//! Values are whitespace-separated integers. Blank lines are skipped and
//! do not consume a label.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::label::labels;
use crate::error::{Error, Result};
use crate::models::{Day, Release};
use crate::validation::validate_releases;

/// Parses releases from text and labels them in input order.
///
/// # Errors
/// - [`Error::Parse`] for a line that is not exactly two integers
/// - [`Error::Validation`] for non-positive days or time to test
pub fn parse_releases(input: &str) -> Result<Vec<Release>> {
    let mut releases = Vec::new();
    let mut ids = labels();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (delivery_day, time_to_test) = parse_line(line, idx + 1)?;
        let id = ids.next().unwrap_or_default();
        releases.push(Release::new(delivery_day, time_to_test).with_id(id));
    }

    validate_releases(&releases).map_err(Error::Validation)?;
    Ok(releases)
}

/// Reads and parses a release file.
pub fn read_releases(path: impl AsRef<Path>) -> Result<Vec<Release>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let releases = parse_releases(&text)?;
    debug!(path = %path.display(), count = releases.len(), "releases read");
    Ok(releases)
}

fn parse_line(line: &str, line_no: usize) -> Result<(Day, Day)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [delivery, time_to_test] = parts.as_slice() else {
        return Err(Error::Parse {
            line: line_no,
            message: format!("expected 2 values, found {}", parts.len()),
        });
    };

    Ok((
        parse_day(delivery, "delivery day", line_no)?,
        parse_day(time_to_test, "time to test", line_no)?,
    ))
}

fn parse_day(token: &str, what: &str, line_no: usize) -> Result<Day> {
    token.parse().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid {what} '{token}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use std::io::Write;

    #[test]
    fn test_parse_releases() {
        let releases = parse_releases("1 1\n2 1\n4 5\n").unwrap();
        assert_eq!(releases.len(), 3);
        assert_eq!(releases[0].id(), "A");
        assert_eq!(releases[2].id(), "C");
        assert_eq!(releases[2].delivery_day(), 4);
        assert_eq!(releases[2].time_to_test(), 5);
        assert_eq!(releases[2].start_testing_day(), 4);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let releases = parse_releases("\n1 1\n\n  \n3 2\r\n").unwrap();
        let ids: Vec<&str> = releases.iter().map(Release::id).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let releases = parse_releases("  7\t 2  ").unwrap();
        assert_eq!(releases[0].delivery_day(), 7);
        assert_eq!(releases[0].time_to_test(), 2);
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = parse_releases("1 1\n5\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("found 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse_releases("1 2 3"),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = parse_releases("1 x").unwrap_err();
        assert!(err.to_string().contains("invalid time to test 'x'"));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        let err = parse_releases("0 1\n2 -3\n").unwrap_err();
        match err {
            Error::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_unrepresentable_end_day() {
        let err = parse_releases("1 1\n2 9223372036854775807\n").unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::DayOutOfRange);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_releases("").unwrap().is_empty());
    }

    #[test]
    fn test_read_releases_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 1").unwrap();
        writeln!(file, "10 4").unwrap();

        let releases = read_releases(file.path()).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[1].id(), "B");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_releases(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
