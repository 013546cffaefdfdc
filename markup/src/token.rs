use std::fmt::{self, Display};

/// A single classified unit of markup, as produced by a lexer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    TagOpen(String),
    /// Only valid directly after a [`Token::TagOpen`] or another attribute.
    /// A missing value marks a valueless attribute such as `hidden`.
    Attribute {
        name: String,
        value: Option<String>,
    },
    TagClose(String),
    Text(String),
    EndOfInput,
}

/// The payload-free kind of a [`Token`], used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    TagOpen,
    Attribute,
    TagClose,
    Text,
    EndOfInput,
}

impl Token {
    pub fn open(name: impl Into<String>) -> Self {
        Self::TagOpen(name.into())
    }

    pub fn close(name: impl Into<String>) -> Self {
        Self::TagClose(name.into())
    }

    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A valueless attribute
    pub fn flag(name: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::TagOpen(_) => TokenKind::TagOpen,
            Token::Attribute { .. } => TokenKind::Attribute,
            Token::TagClose(_) => TokenKind::TagClose,
            Token::Text(_) => TokenKind::Text,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::TagOpen => "tag open",
            TokenKind::Attribute => "attribute",
            TokenKind::TagClose => "tag close",
            TokenKind::Text => "text",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TagOpen(name) => write!(f, "TAG_OPEN {}", name),
            Token::Attribute { name, value: None } => write!(f, "ATTR {}", name),
            Token::Attribute {
                name,
                value: Some(value),
            } => write!(f, "ATTR {}={:?}", name, value),
            Token::TagClose(name) => write!(f, "TAG_CLOSE {}", name),
            Token::Text(data) => write!(f, "TEXT {:?}", data),
            Token::EndOfInput => f.write_str("EOF"),
        }
    }
}

#[cfg(test)]
#[test]
fn test_token_display() {
    assert_eq!(Token::open("h1").to_string(), "TAG_OPEN h1");
    assert_eq!(Token::attr("style", "color:blue").to_string(), r#"ATTR style="color:blue""#);
    assert_eq!(Token::flag("hidden").to_string(), "ATTR hidden");
    assert_eq!(Token::text("a\nb").to_string(), r#"TEXT "a\nb""#);
    assert_eq!(Token::EndOfInput.to_string(), "EOF");
}
