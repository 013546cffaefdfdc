//! Builds a forest of markup nodes from an already tokenized document.
//!
//! The token stream comes from an external lexer and must end with
//! [`Token::EndOfInput`]. [`parse`] turns it into the root-level [`Node`]s,
//! or fails with a [`ParseError`] without returning any partial tree.

/// Build a `Vec<Attribute>` from `"name" => "value"` pairs and bare `"name"` flags
#[macro_export]
macro_rules! attributes {
    (@value) => {
        None
    };
    (@value $value:literal) => {
        Some(String::from($value))
    };
    ($($name:literal $(=> $value:literal)?),* $(,)?) => {
        vec![$($crate::Attribute {
            name: String::from($name),
            value: $crate::attributes!(@value $($value)?),
        }),*]
    };
}

/// The open-element stack machine that turns tokens into nodes
mod builder;
/// Node types produced by the builder
mod dom;
mod error;
/// Tokens consumed by the builder
mod token;


pub use builder::{parse, parse_with, ClosePolicy, ParseOptions, TreeBuilder, UnclosedPolicy};
pub use dom::{Attribute, Element, Node};
pub use error::{Expected, ParseError};
pub use token::{Token, TokenKind};
