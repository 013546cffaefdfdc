use super::*;
use markup::{attributes, Element, Node};

#[test]
fn test_tokenize_sentence() {
    let i = r#"<p>My mother has <span style="color:blue">blue</span> eyes.</p>"#;
    let target = vec![
        Token::open("p"),
        Token::text("My mother has "),
        Token::open("span"),
        Token::attr("style", "color:blue"),
        Token::text("blue"),
        Token::close("span"),
        Token::text(" eyes."),
        Token::close("p"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_skips_comments_and_declarations() {
    let i = "<!DOCTYPE html><?xml version=\"1.0\"?>a<!-- note -->b";
    let target = vec![Token::text("a"), Token::text("b"), Token::EndOfInput];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_lowercases_names() {
    let i = r#"<DIV Class=Box HIDDEN></Div>"#;
    let target = vec![
        Token::open("div"),
        Token::attr("class", "Box"),
        Token::flag("hidden"),
        Token::close("div"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_self_closing() {
    let i = "a<br/>b<img src=x.png />";
    let target = vec![
        Token::text("a"),
        Token::open("br"),
        Token::close("br"),
        Token::text("b"),
        Token::open("img"),
        Token::attr("src", "x.png"),
        Token::close("img"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_merges_stray_angles_into_text() {
    let i = "<b>1 < 2 <3</b>";
    let target = vec![
        Token::open("b"),
        Token::text("1 < 2 <3"),
        Token::close("b"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_raw_text() {
    let i = "<script>if (a<b) { x = '</p>'; }</script><style></style>";
    let target = vec![
        Token::open("script"),
        Token::text("if (a<b) { x = '</p>'; }"),
        Token::close("script"),
        Token::open("style"),
        Token::close("style"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_raw_text_needs_exact_closer() {
    let i = "<script>a = '</scripts>';</script\n></p>";
    let target = vec![
        Token::open("script"),
        Token::text("a = '</scripts>';"),
        Token::close("script"),
        Token::close("p"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_decodes_character_references() {
    let i = r#"<p title="a &amp; b" data-x=&lt;>&lt;x&gt; &#169; &#xA9; &bogus;</p>"#;
    let target = vec![
        Token::open("p"),
        Token::attr("title", "a & b"),
        Token::attr("data-x", "<"),
        Token::text("<x> \u{00A9} \u{00A9} &bogus;"),
        Token::close("p"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_raw_text_keeps_references() {
    let i = "<style>a::after { content: '&amp;' }</style>";
    let target = vec![
        Token::open("style"),
        Token::text("a::after { content: '&amp;' }"),
        Token::close("style"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_unterminated_comment_is_text() {
    let i = "<b>x</b><!-- x > y";
    let target = vec![
        Token::open("b"),
        Token::text("x"),
        Token::close("b"),
        Token::text("<!-- x > y"),
        Token::EndOfInput,
    ];
    assert_eq!(tokenize(i), target);
}

#[test]
fn test_tokenize_empty() {
    assert_eq!(tokenize(""), vec![Token::EndOfInput]);
}

#[test]
fn test_document() {
    let i = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"/><title>The minimal, valid HTML5 document</title></head>
<body>
<!-- User-visible content goes in the body -->
<p>Some paragraph</p>
Some untagged text
</body>
</html>"#;
    let target: Vec<Node> = vec![
        "\n".into(),
        Node::element(
            "html",
            attributes!("lang" => "en"),
            vec![
                "\n".into(),
                Element::new(
                    "head",
                    None,
                    vec![
                        Node::element("meta", attributes!("charset" => "utf-8"), vec![]),
                        Element::new(
                            "title",
                            None,
                            vec!["The minimal, valid HTML5 document".into()],
                        )
                        .into(),
                    ],
                )
                .into(),
                "\n".into(),
                Element::new(
                    "body",
                    None,
                    vec![
                        "\n".into(),
                        "\n".into(),
                        Element::new("p", None, vec!["Some paragraph".into()]).into(),
                        "\nSome untagged text\n".into(),
                    ],
                )
                .into(),
                "\n".into(),
            ],
        ),
    ];
    assert_eq!(markup::parse(&tokenize(i)), Ok(target));
}
