use tracing::{debug, span, trace, Level};

use crate::dom::{Attribute, Element, Node};
use crate::error::{Expected, ParseError};
use crate::token::{Token, TokenKind};

/// How a closing tag is matched against the open-element stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// Close the nearest open element with the same name, implicitly closing every
    /// element opened inside it
    #[default]
    AutoCloseOnMismatch,
    /// Only the innermost open element may be closed
    Strict,
}

/// What happens to elements still open when the input ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnclosedPolicy {
    /// Treat them as closed at the end of input
    #[default]
    Accept,
    /// Fail with [`ParseError::UnexpectedEndOfInput`]
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub close_policy: ClosePolicy,
    pub unclosed_policy: UnclosedPolicy,
}

impl ParseOptions {
    /// Reject both implicit closes and unclosed elements
    pub fn strict() -> Self {
        Self {
            close_policy: ClosePolicy::Strict,
            unclosed_policy: UnclosedPolicy::Reject,
        }
    }

    pub fn with_close_policy(self, close_policy: ClosePolicy) -> Self {
        Self {
            close_policy,
            ..self
        }
    }

    pub fn with_unclosed_policy(self, unclosed_policy: UnclosedPolicy) -> Self {
        Self {
            unclosed_policy,
            ..self
        }
    }
}

/// Parse a token stream into its root nodes using the default [`ParseOptions`]
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, ParseError> {
    parse_with(tokens, ParseOptions::default())
}

pub fn parse_with(tokens: &[Token], options: ParseOptions) -> Result<Vec<Node>, ParseError> {
    TreeBuilder::new(tokens, options).build()
}

/// Single-use builder holding the state of one parse.
///
/// Elements live on the open stack until they are closed, at which point they are
/// appended to their parent (or the roots). Their parent is necessarily still open, so
/// children end up in document order without any back-references.
pub struct TreeBuilder<'t> {
    tokens: &'t [Token],
    position: usize,
    /// Innermost last
    open: Vec<Element>,
    roots: Vec<Node>,
    options: ParseOptions,
}

impl<'t> TreeBuilder<'t> {
    pub fn new(tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            tokens,
            position: 0,
            open: Vec::new(),
            roots: Vec::new(),
            options,
        }
    }

    pub fn build(mut self) -> Result<Vec<Node>, ParseError> {
        let span = span!(Level::DEBUG, "Building tree", tokens = self.tokens.len());
        let _enter = span.enter();

        loop {
            let token = self.current();
            if let Some(token) = token {
                trace!(position = self.position, %token, depth = self.open.len());
            }
            match token {
                Some(Token::Text(data)) => self.consume_text(data),
                Some(Token::TagOpen(name)) => self.consume_open_tag(name),
                Some(Token::TagClose(name)) => self.consume_close_tag(name)?,
                Some(Token::EndOfInput) => return self.finish(),
                Some(token @ Token::Attribute { .. }) => {
                    return Err(self.unexpected(Expected::Content, Some(token.kind())))
                }
                None => return Err(self.unexpected(Expected::EndOfInput, None)),
            }
        }
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn unexpected(&self, expected: Expected, found: Option<TokenKind>) -> ParseError {
        ParseError::UnexpectedToken {
            position: self.position,
            expected,
            found,
        }
    }

    /// Append a finished node to the innermost open element, or to the roots
    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    /// Pop the innermost open element and attach it to its parent
    fn close_innermost(&mut self) {
        if let Some(elt) = self.open.pop() {
            self.attach(elt.into());
        }
    }

    fn consume_text(&mut self, data: &str) {
        self.attach(Node::text(data));
        self.advance();
    }

    fn consume_open_tag(&mut self, name: &str) {
        self.advance();
        let mut attributes = Vec::new();
        while let Some(Token::Attribute { name, value }) = self.current() {
            attributes.push(Attribute::new(name.as_str(), value.clone()));
            self.advance();
        }
        self.open.push(Element::new(name, Some(attributes), Vec::new()));
    }

    fn consume_close_tag(&mut self, name: &str) -> Result<(), ParseError> {
        let matched = match self.options.close_policy {
            ClosePolicy::AutoCloseOnMismatch => {
                self.open.iter().rposition(|elt| elt.name == name)
            }
            ClosePolicy::Strict => self
                .open
                .last()
                .filter(|elt| elt.name == name)
                .map(|_| self.open.len() - 1),
        };
        let index = matched.ok_or_else(|| ParseError::UnmatchedCloseTag {
            position: self.position,
            name: name.to_string(),
            innermost: self.open.last().map(|elt| elt.name.clone()),
        })?;

        while self.open.len() > index + 1 {
            if let Some(elt) = self.open.last() {
                debug!(element = %elt.name, closed_by = name, "Implicitly closing element");
            }
            self.close_innermost();
        }
        self.close_innermost();
        self.advance();
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Node>, ParseError> {
        if !self.open.is_empty() {
            if self.options.unclosed_policy == UnclosedPolicy::Reject {
                return Err(ParseError::UnexpectedEndOfInput {
                    open: self.open.iter().map(|elt| elt.name.clone()).collect(),
                });
            }
            debug!(count = self.open.len(), "Closing elements left open at end of input");
            while !self.open.is_empty() {
                self.close_innermost();
            }
        }
        Ok(self.roots)
    }
}
