use std::fmt::{self, Display};

use crate::token::TokenKind;

/// Why a token stream could not be turned into a tree. Any of these aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} at token {position}, found {}", describe(.found))]
    UnexpectedToken {
        position: usize,
        expected: Expected,
        /// `None` when the stream ran out before an end-of-input marker
        found: Option<TokenKind>,
    },
    #[error("closing tag </{name}> at token {position} {}", describe_innermost(.innermost))]
    UnmatchedCloseTag {
        position: usize,
        name: String,
        /// Innermost element open when the tag was seen
        innermost: Option<String>,
    },
    #[error("input ended with unclosed elements: {}", .open.join(" > "))]
    UnexpectedEndOfInput {
        /// Outermost first
        open: Vec<String>,
    },
}

/// What the builder was prepared to accept at the failing position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Text, a tag, or the end of input
    Content,
    EndOfInput,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Content => f.write_str("text, a tag or end of input"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

fn describe(found: &Option<TokenKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => String::from("end of token stream"),
    }
}

fn describe_innermost(innermost: &Option<String>) -> String {
    match innermost {
        Some(name) => format!("does not close open element <{}>", name),
        None => String::from("has no open element to close"),
    }
}

#[cfg(test)]
#[test]
fn test_messages() {
    let err = ParseError::UnexpectedToken {
        position: 3,
        expected: Expected::Content,
        found: Some(TokenKind::Attribute),
    };
    assert_eq!(
        err.to_string(),
        "expected text, a tag or end of input at token 3, found attribute"
    );
    let err = ParseError::UnmatchedCloseTag {
        position: 1,
        name: "b".into(),
        innermost: Some("a".into()),
    };
    assert_eq!(
        err.to_string(),
        "closing tag </b> at token 1 does not close open element <a>"
    );
    let err = ParseError::UnexpectedEndOfInput {
        open: vec!["html".into(), "body".into()],
    };
    assert_eq!(err.to_string(), "input ended with unclosed elements: html > body");
}
