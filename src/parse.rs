//! Relation sentence parsing.
//!
//! Input files hold one relation per line:
//!
//! ```text
//! Jaime Lannister is friends with Cersei Lannister
//! Varys is plotting against Jaime Lannister
//! ```
//!
//! Lines are trimmed and blank lines skipped. Any other line that does not
//! match the expected sentence is an error. A name must start with a
//! non-space character and may contain spaces.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::types::RelationKind;

/// Error type for sentence parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input holds no lines at all.
    #[error("Empty {kind} input")]
    EmptyInput {
        /// Relation the input was expected to hold.
        kind: RelationKind,
    },
    /// A non-blank line is not a valid relation sentence.
    #[error("Invalid format in {kind} input at line {line_number}: {line}")]
    InvalidLine {
        /// Relation the input was expected to hold.
        kind: RelationKind,
        /// 1-based line number.
        line_number: usize,
        /// The trimmed offending line.
        line: String,
    },
}

/// First character of a name: anything but whitespace.
///
/// `regex_lite` classes are ASCII-only, so the Unicode space separators are
/// listed explicitly, along with the `\x1c`-`\x1f` separators.
const NAME_START: &str = r"[^\s\x{1c}-\x{1f}\x{85}\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}]";

fn sentence_regex(kind: RelationKind) -> &'static Regex {
    static FRIENDS: OnceLock<Regex> = OnceLock::new();
    static PLOTS: OnceLock<Regex> = OnceLock::new();

    let cell = match kind {
        RelationKind::Friendship => &FRIENDS,
        RelationKind::Conspiracy => &PLOTS,
    };
    cell.get_or_init(|| {
        let pattern = format!(
            "^({NAME_START}.*) {} ({NAME_START}.*)$",
            kind.connective()
        );
        Regex::new(&pattern).expect("static sentence pattern is valid")
    })
}

/// Parse one trimmed line into a `(left, right)` name pair.
pub fn parse_line(line: &str, kind: RelationKind) -> Option<(String, String)> {
    let caps = sentence_regex(kind).captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

/// Parse a whole input into name pairs, in file order.
pub fn parse_pairs(input: &str, kind: RelationKind) -> Result<Vec<(String, String)>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput { kind });
    }

    let mut pairs = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let pair = parse_line(line, kind).ok_or_else(|| ParseError::InvalidLine {
            kind,
            line_number: index + 1,
            line: line.to_string(),
        })?;
        pairs.push(pair);
    }
    Ok(pairs)
}

/// Parse `"<a> is friends with <b>"` lines.
pub fn parse_friendships(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    parse_pairs(input, RelationKind::Friendship)
}

/// Parse `"<a> is plotting against <b>"` lines.
pub fn parse_conspiracies(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    parse_pairs(input, RelationKind::Conspiracy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_parse_friendships() {
        let input = "Jaime Lannister is friends with Cersei Lannister\n\n  Tyrion is friends with Bronn  \n";

        let pairs = parse_friendships(input).unwrap();
        assert_eq!(
            pairs,
            vec![pair("Jaime Lannister", "Cersei Lannister"), pair("Tyrion", "Bronn")]
        );
    }

    #[test]
    fn test_parse_conspiracies() {
        let pairs = parse_conspiracies("Varys is plotting against Jaime\n").unwrap();
        assert_eq!(pairs, vec![pair("Varys", "Jaime")]);
    }

    #[test]
    fn test_wrong_sentence_rejected() {
        let err = parse_conspiracies("Varys is friends with Jaime").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLine {
                kind: RelationKind::Conspiracy,
                line_number: 1,
                line: "Varys is friends with Jaime".to_string(),
            }
        );
    }

    #[test]
    fn test_line_number_counts_blank_lines() {
        let err = parse_friendships("A is friends with B\n\nnonsense\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line_number: 3, .. }));
    }

    #[test]
    fn test_missing_name_rejected() {
        assert_eq!(parse_line("is friends with B", RelationKind::Friendship), None);
        assert_eq!(parse_line("A is friends with ", RelationKind::Friendship), None);
    }

    #[test]
    fn test_unicode_space_before_name_rejected() {
        let err = parse_friendships("A is friends with \u{2003}B\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLine {
                kind: RelationKind::Friendship,
                line_number: 1,
                line: "A is friends with \u{2003}B".to_string(),
            }
        );
        assert_eq!(
            parse_line("Varys is plotting against \u{a0}Jaime", RelationKind::Conspiracy),
            None
        );
    }

    #[test]
    fn test_connective_inside_name_backtracks_past_unicode_space() {
        let pairs = parse_friendships("A is friends with B is friends with \u{2003}C").unwrap();
        assert_eq!(pairs, vec![pair("A", "B is friends with \u{2003}C")]);
    }

    #[test]
    fn test_unicode_names_accepted() {
        let pairs = parse_friendships("Daenerys Targaryen is friends with Jorah Mormont\u{e9}\n").unwrap();
        assert_eq!(pairs, vec![pair("Daenerys Targaryen", "Jorah Mormont\u{e9}")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_friendships(""),
            Err(ParseError::EmptyInput { kind: RelationKind::Friendship })
        );
        // Whitespace-only input has lines, just no pairs.
        assert_eq!(parse_friendships("\n  \n"), Ok(vec![]));
    }
}
