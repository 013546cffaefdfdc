//! Splits markup text into the [`Token`]s consumed by [`markup::parse`].
//!
//! This is a small, forgiving lexer: comments, declarations and processing
//! instructions are dropped, and anything that does not form a tag is text.
//! Character references are decoded in text and attribute values, but not inside
//! `script` or `style`. The output always ends with exactly one
//! [`Token::EndOfInput`].

use markup::Token;
use tracing::{span, trace, Level};

use crate::entities::decode_entities;
use crate::parsing::{parse_item, raw_text, Item};

/// Character reference decoding
mod entities;
mod parsing;

#[cfg(test)]
mod tests;

/// Elements whose content is taken verbatim up to their closing tag
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

pub fn tokenize(input: &str) -> Vec<Token> {
    let span = span!(Level::DEBUG, "Tokenizing", bytes = input.len());
    let _enter = span.enter();

    let mut tokens = Tokens::default();
    let mut rest = input;
    while !rest.is_empty() {
        let (remaining, item) = match parse_item(rest) {
            Ok(parsed) => parsed,
            // `parse_item` accepts any non-empty input; keep whatever is left as text
            Err(_) => ("", Item::Text(rest)),
        };
        trace!(?item);
        rest = remaining;

        match item {
            Item::Skipped => tokens.flush_text(),
            Item::Text(data) => tokens.text.push_str(&decode_entities(data)),
            Item::CloseTag(name) => tokens.push(Token::close(name.to_ascii_lowercase())),
            Item::OpenTag {
                name,
                attributes,
                self_closing,
            } => {
                let name = name.to_ascii_lowercase();
                tokens.push(Token::open(name.as_str()));
                for (attr, value) in attributes {
                    tokens.push(Token::Attribute {
                        name: attr.to_ascii_lowercase(),
                        value: value.map(|value| decode_entities(value).into_owned()),
                    });
                }
                if self_closing {
                    tokens.push(Token::close(name));
                } else if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    let (remaining, content) = raw_text(rest, &name);
                    tokens.text.push_str(content);
                    tokens.flush_text();
                    rest = remaining;
                }
            }
        }
    }
    tokens.flush_text();
    tokens.tokens.push(Token::EndOfInput);
    tokens.tokens
}

/// Output buffer that merges neighbouring runs of text into a single token
#[derive(Default)]
struct Tokens {
    tokens: Vec<Token>,
    text: String,
}

impl Tokens {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }
}
