//! Line classification for descriptor files using `nom`.
//!
//! Descriptor files are line-oriented: each line is blank, a comment, a
//! meta-directive, a `name = value` / `name: value` property, or something
//! the grammar does not recognize. Continuation handling needs the previous
//! line's state and lives in the parser.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{one_of, space0},
    combinator::rest,
};

/// A classified descriptor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line whose first non-whitespace character is `#`.
    Comment,
    /// Meta-directive such as `@include file`, without the leading `@`.
    Meta(&'a str),
    /// A property assignment. `value` is trimmed but still carries any
    /// trailing comment.
    Property {
        /// Property name.
        name: &'a str,
        /// Raw property value.
        value: &'a str,
    },
    /// Anything else. Ignored by the parser.
    Malformed,
}

const fn is_property_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Parses `<name> [:=] <value>`, with optional whitespace around the separator.
fn property(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (_, name, _, _, value)) = (
        space0,
        take_while1(is_property_char),
        space0,
        one_of(":="),
        rest,
    )
        .parse(input)?;
    Ok((input, (name, value.trim())))
}

/// Classifies a single line of descriptor text.
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }
    if let Some(directive) = trimmed.strip_prefix('@') {
        return Line::Meta(directive);
    }
    match property(trimmed) {
        Ok((_, (name, value))) => Line::Property { name, value },
        Err(_) => Line::Malformed,
    }
}

/// Whether a line continues the preceding property's value.
#[must_use]
pub fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Removes a trailing comment from a value and trims it.
///
/// A `#` preceded by a backslash is kept as a literal `#`; the backslash is
/// dropped. Other backslashes are left untouched.
#[must_use]
pub fn strip_comment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                out.push('#');
                let _ = chars.next();
            }
            '#' => break,
            _ => out.push(c),
        }
    }
    out.trim().to_owned()
}

/// Whether the text references a positional parameter (`$` followed by
/// at least one digit).
#[must_use]
pub fn has_parameter_placeholder(text: &str) -> bool {
    text.match_indices('$')
        .any(|(idx, _)| text[idx + 1..].starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t "), Line::Blank);
    }

    #[test]
    fn comment_lines() {
        assert_eq!(classify("# a comment"), Line::Comment);
        assert_eq!(classify("    # indented comment"), Line::Comment);
    }

    #[test]
    fn meta_directive() {
        assert_eq!(classify("@include common"), Line::Meta("include common"));
    }

    #[test]
    fn property_with_equals() {
        assert_eq!(
            classify("depends-on = network"),
            Line::Property {
                name: "depends-on",
                value: "network"
            }
        );
    }

    #[test]
    fn property_with_colon_and_no_spaces() {
        assert_eq!(
            classify("type:scripted"),
            Line::Property {
                name: "type",
                value: "scripted"
            }
        );
    }

    #[test]
    fn property_name_allows_dots_and_underscores() {
        assert_eq!(
            classify("  waits-for.d =  boot.d  "),
            Line::Property {
                name: "waits-for.d",
                value: "boot.d"
            }
        );
        assert!(matches!(
            classify("load_options = sub-vars"),
            Line::Property {
                name: "load_options",
                ..
            }
        ));
    }

    #[test]
    fn empty_value_is_still_a_property() {
        assert_eq!(
            classify("after ="),
            Line::Property {
                name: "after",
                value: ""
            }
        );
    }

    #[test]
    fn line_without_separator_is_malformed() {
        assert_eq!(classify("just some words"), Line::Malformed);
        assert_eq!(classify("= value"), Line::Malformed);
    }

    #[test]
    fn continuation_requires_leading_blank() {
        assert!(is_continuation("  more"));
        assert!(is_continuation("\tmore"));
        assert!(!is_continuation("more"));
        assert!(!is_continuation(""));
    }

    #[test]
    fn strip_comment_cuts_trailing_comment() {
        assert_eq!(strip_comment("network # needed for dhcp"), "network");
        assert_eq!(strip_comment("# all comment"), "");
    }

    #[test]
    fn strip_comment_keeps_escaped_hash() {
        assert_eq!(strip_comment(r"echo \#1 # real comment"), "echo #1");
        assert_eq!(strip_comment(r"C:\path"), r"C:\path");
    }

    #[test]
    fn parameter_placeholder_detection() {
        assert!(has_parameter_placeholder("command = /bin/run $1"));
        assert!(has_parameter_placeholder("x=$12y"));
        assert!(!has_parameter_placeholder("command = echo $HOME"));
        assert!(!has_parameter_placeholder("cost = 5$"));
        assert!(!has_parameter_placeholder("plain"));
    }
}
