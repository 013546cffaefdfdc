use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until, take_while};
use nom::character::complete::{char, multispace0, multispace1, satisfy};
use nom::combinator::{map, not, opt, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

/// Something recognised at the front of the input
#[derive(Debug, PartialEq)]
pub(crate) enum Item<'a> {
    /// Comments, declarations and processing instructions
    Skipped,
    OpenTag {
        name: &'a str,
        attributes: Vec<(&'a str, Option<&'a str>)>,
        self_closing: bool,
    },
    CloseTag(&'a str),
    Text(&'a str),
}

/// Parse the next item. Never fails on non-empty input, as a lone `<` is text.
pub(crate) fn parse_item(input: &str) -> IResult<&str, Item> {
    alt((
        parse_comment,
        parse_declaration,
        parse_close_tag,
        parse_open_tag,
        parse_text,
        parse_stray_angle,
    ))(input)
}

/// Split off the content of a raw text element such as `<script>`, up to (not including) its
/// closing tag. Without a closing tag the rest of the input is content.
pub(crate) fn raw_text<'a>(input: &'a str, name: &str) -> (&'a str, &'a str) {
    let closer = format!("</{}", name);
    // Lowercasing ASCII keeps byte offsets intact
    let lowered = input.to_ascii_lowercase();
    let end = lowered.match_indices(&closer).map(|(start, _)| start).find(|start| {
        // `</scripts>` does not close `<script>`
        matches!(
            lowered[start + closer.len()..].chars().next(),
            Some(c) if c.is_ascii_whitespace() || c == '/' || c == '>'
        )
    });
    match end {
        Some(end) => (&input[end..], &input[..end]),
        None => ("", input),
    }
}

fn parse_comment(input: &str) -> IResult<&str, Item> {
    let (remaining, _) = delimited(tag("<!--"), take_until("-->"), tag("-->"))(input)?;
    Ok((remaining, Item::Skipped))
}

#[cfg(test)]
#[test]
fn test_parse_comment() {
    assert_eq!(parse_comment("<!-- a <b> -->c"), Ok(("c", Item::Skipped)));
    assert!(parse_comment("<!-- unterminated").is_err());
}

/// `<!DOCTYPE ...>` and `<?xml ...>`. An unterminated comment is not a declaration.
fn parse_declaration(input: &str) -> IResult<&str, Item> {
    let (remaining, _) = alt((
        preceded(not(tag("<!--")), delimited(tag("<!"), take_until(">"), char('>'))),
        delimited(tag("<?"), take_until(">"), char('>')),
    ))(input)?;
    Ok((remaining, Item::Skipped))
}

/// A tag name must start with a letter and runs up to whitespace, `/` or `>`
fn parse_tag_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| !c.is_whitespace() && c != '/' && c != '>'),
    ))(input)
}

/// Parse a tag in the form `</name>`, returning `name`. Anything between the name and the
/// `>` is ignored.
fn parse_close_tag(input: &str) -> IResult<&str, Item> {
    let (remaining, (_, name, _, _)) = tuple((
        tag("</"),
        parse_tag_name,
        take_while(|c: char| c != '>' && c != '<'),
        char('>'),
    ))(input)?;
    Ok((remaining, Item::CloseTag(name)))
}

#[cfg(test)]
#[test]
fn test_parse_close_tag() {
    assert_eq!(parse_close_tag("</div>x"), Ok(("x", Item::CloseTag("div"))));
    assert_eq!(parse_close_tag("</P  >"), Ok(("", Item::CloseTag("P"))));
    assert_eq!(parse_close_tag("</script/>"), Ok(("", Item::CloseTag("script"))));
    assert!(parse_close_tag("</ div>").is_err());
    assert!(parse_close_tag("</a <b>").is_err());
}

#[cfg(test)]
#[test]
fn test_parse_declaration() {
    assert_eq!(parse_declaration("<!DOCTYPE html>x"), Ok(("x", Item::Skipped)));
    assert_eq!(parse_declaration("<?xml version=\"1.0\"?>"), Ok(("", Item::Skipped)));
    assert!(parse_declaration("<!-- x > y").is_err());
}

/// Parse a tag in the form `<name attr=value ...>` or `<name ... />`
fn parse_open_tag(input: &str) -> IResult<&str, Item> {
    let (remaining, (_, name, attributes, _, slash, _)) = tuple((
        char('<'),
        parse_tag_name,
        many0(preceded(multispace1, parse_attribute)),
        multispace0,
        opt(char('/')),
        char('>'),
    ))(input)?;
    Ok((
        remaining,
        Item::OpenTag {
            name,
            attributes,
            self_closing: slash.is_some(),
        },
    ))
}

#[cfg(test)]
#[test]
fn test_parse_open_tag() {
    let data = r#"<div attr1 attr2=two attr3='three' attr4="number four">"#;
    let target = Item::OpenTag {
        name: "div",
        attributes: vec![
            ("attr1", None),
            ("attr2", Some("two")),
            ("attr3", Some("three")),
            ("attr4", Some("number four")),
        ],
        self_closing: false,
    };
    assert_eq!(parse_open_tag(data), Ok(("", target)));

    let target = Item::OpenTag {
        name: "br",
        attributes: vec![],
        self_closing: true,
    };
    assert_eq!(parse_open_tag("<br/>"), Ok(("", target)));

    let target = Item::OpenTag {
        name: "input",
        attributes: vec![("value", Some("")), ("checked", None)],
        self_closing: true,
    };
    assert_eq!(parse_open_tag(r#"<input value = "" checked />"#), Ok(("", target)));

    assert!(parse_open_tag("< div>").is_err());
    assert!(parse_open_tag(r#"<div class="x"#).is_err());
}

// Attribute parsing below

fn parse_attribute(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(
        name_parser,
        opt(preceded(
            tuple((multispace0, char('='), multispace0)),
            value_parser,
        )),
    )(input)
}

fn name_parser(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n\x0C\"'>/=")(input)
}

fn value_parser(input: &str) -> IResult<&str, &str> {
    alt((parse_single_quoted, parse_double_quoted, parse_unquoted))(input)
}

fn parse_single_quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_while(|c: char| c != '\''), char('\''))(input)
}

fn parse_double_quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))(input)
}

fn parse_unquoted(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n\x0C\"'=<>`")(input)
}

#[cfg(test)]
#[test]
fn test_parse_attribute() {
    assert_eq!(parse_attribute("a=b c"), Ok((" c", ("a", Some("b")))));
    assert_eq!(parse_attribute("a = 'x y'"), Ok(("", ("a", Some("x y")))));
    assert_eq!(
        parse_attribute(r#"style="color:blue">"#),
        Ok((">", ("style", Some("color:blue"))))
    );
    assert_eq!(parse_attribute("hidden>"), Ok((">", ("hidden", None))));
}

fn parse_text(input: &str) -> IResult<&str, Item> {
    map(is_not("<"), Item::Text)(input)
}

/// A `<` that does not start a tag, along with the text after it
fn parse_stray_angle(input: &str) -> IResult<&str, Item> {
    map(recognize(pair(char('<'), opt(is_not("<")))), Item::Text)(input)
}

#[cfg(test)]
#[test]
fn test_parse_item_falls_back_to_text() {
    assert_eq!(parse_item("a < b"), Ok(("< b", Item::Text("a "))));
    assert_eq!(parse_item("< b"), Ok(("", Item::Text("< b"))));
    assert_eq!(parse_item("<"), Ok(("", Item::Text("<"))));
    assert_eq!(parse_item("<!-- x"), Ok(("", Item::Text("<!-- x"))));
    assert_eq!(parse_item("<!-- x > y"), Ok(("", Item::Text("<!-- x > y"))));
}

#[cfg(test)]
#[test]
fn test_raw_text() {
    assert_eq!(
        raw_text("if (a <b) {}</SCRIPT>rest", "script"),
        ("</SCRIPT>rest", "if (a <b) {}")
    );
    assert_eq!(raw_text("body { }", "style"), ("", "body { }"));
    assert_eq!(
        raw_text("a = '</scripts>';</script >", "script"),
        ("</script >", "a = '</scripts>';")
    );
    assert_eq!(raw_text("x</script", "script"), ("", "x</script"));
}
