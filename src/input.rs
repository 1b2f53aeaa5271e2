//! Parsing for the two-line input format consumed by the CLI driver.

use crate::error::InputError;

/// Parses a whitespace-separated list of integers.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, InputError> {
    line.split_ascii_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<i64>()
                .map_err(|source| InputError::InvalidInteger {
                    token: token.to_string(),
                    position: index + 1,
                    source,
                })
        })
        .collect()
}

/// Parses a single target integer, ignoring surrounding whitespace.
pub fn parse_target(line: &str) -> Result<i64, InputError> {
    let token = line.trim();
    if token.is_empty() {
        return Err(InputError::MissingTarget);
    }

    token
        .parse::<i64>()
        .map_err(|source| InputError::InvalidTarget {
            token: token.to_string(),
            source,
        })
}

/// Splits document-style input into its number list and optional target.
///
/// The first non-blank line holds the whitespace-separated sequence; the
/// second, when present, holds the target. Anything after the target line is
/// ignored.
pub fn parse_document(content: &str) -> Result<(Vec<i64>, Option<i64>), InputError> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let numbers_line = lines.next().ok_or(InputError::MissingNumbers)?;
    let nums = parse_numbers(numbers_line)?;

    let target = lines.next().map(parse_target).transpose()?;

    Ok((nums, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_whitespace_separated_list() {
        assert_eq!(
            parse_numbers("2 7\t11  15").unwrap(),
            vec![2, 7, 11, 15]
        );
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(parse_numbers("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_numbers("   ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn bad_token_reports_its_position() {
        let err = parse_numbers("1 two 3").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidInteger { ref token, position: 2, .. } if token == "two"
        ));
    }

    #[test]
    fn target_parses_with_surrounding_whitespace() {
        assert_eq!(parse_target("  9\n").unwrap(), 9);
        assert_eq!(parse_target("-42").unwrap(), -42);
    }

    #[test]
    fn blank_target_line_is_missing() {
        assert!(matches!(
            parse_target("  \n").unwrap_err(),
            InputError::MissingTarget
        ));
    }

    #[test]
    fn non_numeric_target_is_invalid() {
        let err = parse_target("nine").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidTarget { ref token, .. } if token == "nine"
        ));
    }

    #[test]
    fn document_yields_sequence_and_target() {
        let (nums, target) = parse_document("2 7 11 15\n9\n").unwrap();
        assert_eq!(nums, vec![2, 7, 11, 15]);
        assert_eq!(target, Some(9));
    }

    #[test]
    fn document_skips_blank_lines() {
        let (nums, target) = parse_document("\n3 2 4\n\n6\n").unwrap();
        assert_eq!(nums, vec![3, 2, 4]);
        assert_eq!(target, Some(6));
    }

    #[test]
    fn document_target_line_is_optional() {
        let (nums, target) = parse_document("1 2 3\n").unwrap();
        assert_eq!(nums, vec![1, 2, 3]);
        assert_eq!(target, None);
    }

    #[test]
    fn empty_document_is_missing_numbers() {
        assert!(matches!(
            parse_document("").unwrap_err(),
            InputError::MissingNumbers
        ));
    }
}
