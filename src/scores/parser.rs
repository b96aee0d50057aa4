//! Parser for literal score lists such as `[0.61, 0.58, 0.63]`.
//!
//! Accepted shapes:
//! - bracketed `[...]` or parenthesized `(...)` sequences
//! - bare values with no enclosing delimiters
//!
//! Values are separated by commas and/or whitespace, and one trailing comma
//! is tolerated.

use crate::errors::{Error, Result};

/// Parse a literal score list into its values, preserving order.
///
/// An empty sequence (`[]`) parses to an empty vector; rejecting empty
/// histories is the caller's decision.
pub fn parse_scores(text: &str) -> Result<Vec<f64>> {
    let body = strip_delimiters(text.trim())?;
    let segments: Vec<&str> = body.split(',').collect();
    let last = segments.len() - 1;

    let mut scores = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            // `[]`, or a single trailing comma after at least one value
            if index == last && (index == 0 || !scores.is_empty()) {
                continue;
            }
            return Err(Error::parse(scores.len() + 1, "", "empty entry between commas"));
        }

        for token in segment.split_whitespace() {
            let position = scores.len() + 1;
            scores.push(parse_value(token, position)?);
        }
    }

    Ok(scores)
}

fn strip_delimiters(text: &str) -> Result<&str> {
    let pairs = [('[', ']'), ('(', ')')];
    for (open, close) in pairs {
        if let Some(rest) = text.strip_prefix(open) {
            return rest.strip_suffix(close).ok_or_else(|| {
                Error::invalid_input(format!("score list opened with '{open}' is not closed with '{close}'"))
            });
        }
    }

    if let Some(stray) = text.chars().find(|c| matches!(c, '[' | ']' | '(' | ')')) {
        return Err(Error::invalid_input(format!(
            "unexpected '{stray}' in score list"
        )));
    }
    Ok(text)
}

fn parse_value(token: &str, position: usize) -> Result<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| Error::parse(position, token, "not a number"))?;

    if !value.is_finite() {
        return Err(Error::parse(position, token, "scores must be finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_bracketed_list() {
        let scores = parse_scores("[0.3625, 0.4, 0.55]").unwrap();
        assert_eq!(scores, vec![0.3625, 0.4, 0.55]);
    }

    #[test]
    fn test_parses_tuple_and_bare_forms() {
        assert_eq!(parse_scores("(1, 2.5)").unwrap(), vec![1.0, 2.5]);
        assert_eq!(parse_scores("0.1, 0.2").unwrap(), vec![0.1, 0.2]);
        assert_eq!(parse_scores("0.1\n0.2\n0.3\n").unwrap(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_accepts_multiline_trailing_comma_and_exponents() {
        let text = "[\n  0.5,\n  -1e-2,\n  +3,\n]\n";
        assert_eq!(parse_scores(text).unwrap(), vec![0.5, -0.01, 3.0]);
    }

    #[test]
    fn test_empty_list_is_empty() {
        assert!(parse_scores("[]").unwrap().is_empty());
        assert!(parse_scores("  ").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_token_with_position() {
        let err = parse_scores("[0.1, 0.2, abc]").unwrap_err();
        match err {
            Error::Parse {
                position, token, ..
            } => {
                assert_eq!(position, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(matches!(parse_scores("[nan]"), Err(Error::Parse { .. })));
        assert!(matches!(parse_scores("[1, inf]"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_rejects_malformed_structure() {
        assert!(parse_scores("[0.1, 0.2").is_err());
        assert!(parse_scores("[0.1,, 0.2]").is_err());
        assert!(parse_scores("[,]").is_err());
        assert!(parse_scores("0.1 ] 0.2").is_err());
    }
}
