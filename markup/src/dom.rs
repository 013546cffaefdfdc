use std::fmt::{self, Display};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Dropping and comparing elements walk the subtree with a heap work-list, so arbitrarily
/// deep trees do not exhaust the call stack.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    /// In source order; duplicate names are kept as given
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Node {
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text(data.into())
    }

    pub fn element(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element(Element::new(name, Some(attributes), children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elt) => Some(elt),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(data) => Some(data),
            Node::Element(_) => None,
        }
    }

    /// Number of nodes in this subtree, counting itself
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let Node::Element(elt) = node {
                pending.extend(&elt.children);
            }
        }
        count
    }
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attributes: Option<Vec<Attribute>>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.unwrap_or_default(),
            children,
        }
    }

    /// The first attribute called `name`, if any
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Child elements called `name`, searching the whole subtree in document order when
    /// `recursive` is set
    pub fn elements_by_name(&self, name: &str, recursive: bool) -> Vec<&Element> {
        let mut found = Vec::new();
        // Reversed so that popping yields document order
        let mut pending: Vec<&Element> = self.child_elements().rev().collect();
        while let Some(elt) = pending.pop() {
            if elt.name == name {
                found.push(elt);
            }
            if recursive {
                pending.extend(elt.child_elements().rev());
            }
        }
        found
    }

    fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut elt) = node {
                pending.append(&mut elt.children);
            }
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.name != right.name
                || left.attributes != right.attributes
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for pair in left.children.iter().zip(&right.children) {
                match pair {
                    (Node::Element(l), Node::Element(r)) => pending.push((l, r)),
                    (Node::Text(l), Node::Text(r)) if l == r => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Element {}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<Element> for Node {
    fn from(elt: Element) -> Self {
        Node::Element(elt)
    }
}

impl From<&str> for Node {
    fn from(data: &str) -> Self {
        Node::text(data)
    }
}

impl From<String> for Node {
    fn from(data: String) -> Self {
        Node::Text(data)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={:?}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Only the element's own tag, without its children
impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(elt) => Display::fmt(elt, f),
            Node::Text(data) => write!(f, "{:?}", data),
        }
    }
}

#[cfg(test)]
#[test]
fn test_elements_by_name() {
    let list = Element::new(
        "ul",
        None,
        vec![
            Element::new("li", None, vec!["one".into()]).into(),
            Element::new(
                "li",
                None,
                vec![Element::new("ul", None, vec![Element::new("li", None, vec![]).into()]).into()],
            )
            .into(),
        ],
    );
    assert_eq!(list.elements_by_name("li", false).len(), 2);
    assert_eq!(list.elements_by_name("li", true).len(), 3);
    assert_eq!(list.elements_by_name("ul", true).len(), 1);
    assert_eq!(Node::from(list).node_count(), 6);
}

#[cfg(test)]
#[test]
fn test_display() {
    let elt = Element::new(
        "input",
        Some(crate::attributes!("type" => "checkbox", "checked")),
        vec![],
    );
    assert_eq!(elt.to_string(), r#"input type="checkbox" checked"#);
    assert_eq!(elt.get_attribute("checked"), Some(&Attribute::new("checked", None)));
    assert_eq!(elt.get_attribute("name"), None);
    assert_eq!(Node::text("a \"b\"").to_string(), r#""a \"b\"""#);
}
