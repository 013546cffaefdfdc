use std::io::{self, Write};

use markup::Node;

/// Write one line per node, children indented two spaces under their element
pub fn write_outline(out: &mut impl Write, roots: &[Node]) -> io::Result<()> {
    let mut pending: Vec<(usize, &Node)> = roots.iter().rev().map(|node| (0, node)).collect();
    while let Some((depth, node)) = pending.pop() {
        writeln!(out, "{:indent$}{}", "", node, indent = depth * 2)?;
        if let Node::Element(elt) = node {
            pending.extend(elt.children.iter().rev().map(|child| (depth + 1, child)));
        }
    }
    Ok(())
}

#[cfg(test)]
#[test]
fn test_write_outline() {
    use markup::{attributes, Element};

    let roots = vec![
        Node::element(
            "p",
            attributes!("class" => "intro", "hidden"),
            vec![
                "a".into(),
                Element::new("b", None, vec!["c\n".into()]).into(),
            ],
        ),
        "tail".into(),
    ];
    let mut out = Vec::new();
    write_outline(&mut out, &roots).unwrap();
    let expected = r#"p class="intro" hidden
  "a"
  b
    "c\n"
"tail"
"#;
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
