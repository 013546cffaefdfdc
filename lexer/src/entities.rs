use std::borrow::Cow;

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{alphanumeric1, char};
use nom::combinator::map_opt;
use nom::sequence::{delimited, preceded};
use nom::IResult;

/// Named references that are decoded; anything else is left as written
const NAMED_REFERENCES: [(&str, char); 10] = [
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{00A0}'),
    ("copy", '\u{00A9}'),
    ("reg", '\u{00AE}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
];

/// Replace character references (`&amp;`, `&#169;`, `&#xA9;`) with the characters they
/// stand for. References must end with `;`. Unknown names, malformed numbers and code
/// points that are not Unicode scalar values are kept unchanged.
pub(crate) fn decode_entities(input: &str) -> Cow<str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match parse_reference(rest) {
            Ok((remaining, decoded)) => {
                out.push(decoded);
                rest = remaining;
            }
            Err(_) => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn parse_reference(input: &str) -> IResult<&str, char> {
    delimited(
        char('&'),
        alt((parse_hex_reference, parse_decimal_reference, parse_named_reference)),
        char(';'),
    )(input)
}

fn parse_hex_reference(input: &str) -> IResult<&str, char> {
    map_opt(
        preceded(
            tag_no_case("#x"),
            take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
        ),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )(input)
}

fn parse_decimal_reference(input: &str) -> IResult<&str, char> {
    map_opt(
        preceded(char('#'), take_while_m_n(1, 7, |c: char| c.is_ascii_digit())),
        |dec: &str| dec.parse::<u32>().ok().and_then(char::from_u32),
    )(input)
}

fn parse_named_reference(input: &str) -> IResult<&str, char> {
    map_opt(alphanumeric1, |name: &str| {
        NAMED_REFERENCES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, decoded)| *decoded)
    })(input)
}

#[cfg(test)]
#[test]
fn test_decode_named() {
    assert_eq!(decode_entities("a &amp; b"), "a & b");
    assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
    assert_eq!(decode_entities("&copy; 2024"), "\u{00A9} 2024");
}

#[cfg(test)]
#[test]
fn test_decode_numeric() {
    assert_eq!(decode_entities("&#169;&#65;"), "\u{00A9}A");
    assert_eq!(decode_entities("&#xA9;&#X1F600;"), "\u{00A9}\u{1F600}");
}

#[cfg(test)]
#[test]
fn test_decode_keeps_malformed() {
    assert_eq!(decode_entities("fish & chips"), "fish & chips");
    assert_eq!(decode_entities("&amp"), "&amp");
    assert_eq!(decode_entities("&bogus;"), "&bogus;");
    assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    assert_eq!(decode_entities("&#12345678;"), "&#12345678;");
    assert_eq!(decode_entities("&&amp;"), "&&");
    assert_eq!(decode_entities("120×32"), "120×32");
}
