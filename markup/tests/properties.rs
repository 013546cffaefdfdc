//! Property-based tests for tree building
//!
//! Well-formed token streams are generated from random trees, so every tag
//! open has a properly nested close with the same name.

use markup::{parse, parse_with, ParseOptions, Token};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Shape {
    Text(String),
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Shape>,
    },
}

fn attribute_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    ("[a-z][a-z-]{0,6}", proptest::option::of("[ -~]{0,8}"))
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = "[ -~]{0,12}".prop_map(Shape::Text);
    leaf.prop_recursive(6, 48, 5, |inner| {
        (
            "[a-z][a-z0-9]{0,5}",
            prop::collection::vec(attribute_strategy(), 0..3),
            prop::collection::vec(inner, 0..5),
        )
            .prop_map(|(name, attributes, children)| Shape::Element {
                name,
                attributes,
                children,
            })
    })
}

fn forest_strategy() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(shape_strategy(), 0..4)
}

fn emit(shape: &Shape, tokens: &mut Vec<Token>) {
    match shape {
        Shape::Text(data) => tokens.push(Token::text(data.as_str())),
        Shape::Element {
            name,
            attributes,
            children,
        } => {
            tokens.push(Token::open(name.as_str()));
            for (attr, value) in attributes {
                tokens.push(Token::Attribute {
                    name: attr.clone(),
                    value: value.clone(),
                });
            }
            for child in children {
                emit(child, tokens);
            }
            tokens.push(Token::close(name.as_str()));
        }
    }
}

fn to_tokens(forest: &[Shape]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for shape in forest {
        emit(shape, &mut tokens);
    }
    tokens.push(Token::EndOfInput);
    tokens
}

proptest! {
    #[test]
    fn node_count_matches_open_and_text_tokens(forest in forest_strategy()) {
        let tokens = to_tokens(&forest);
        let expected = tokens
            .iter()
            .filter(|token| matches!(token, Token::TagOpen(_) | Token::Text(_)))
            .count();

        let roots = parse(&tokens).expect("well-formed input should parse");
        let total: usize = roots.iter().map(|node| node.node_count()).sum();
        prop_assert_eq!(total, expected);
        prop_assert_eq!(roots.len(), forest.len());
    }

    #[test]
    fn well_formed_input_parses_under_strict_options(forest in forest_strategy()) {
        let tokens = to_tokens(&forest);
        prop_assert_eq!(parse_with(&tokens, ParseOptions::strict()), parse(&tokens));
    }

    #[test]
    fn parsing_is_repeatable(forest in forest_strategy()) {
        let tokens = to_tokens(&forest);
        prop_assert_eq!(parse(&tokens), parse(&tokens));
    }
}
