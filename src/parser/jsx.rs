use tree_sitter::Node;

use crate::element::{Attribute, AttributeValue, OpeningElement};
use crate::utils::{decode_character_reference, unescape_js_string, unquote_string};

const OPENING_ELEMENT_KINDS: [&str; 2] = ["jsx_opening_element", "jsx_self_closing_element"];

pub fn is_opening_element(node: &Node) -> bool {
    OPENING_ELEMENT_KINDS.contains(&node.kind())
}

/// Build an [`OpeningElement`] from a `jsx_opening_element` or
/// `jsx_self_closing_element` node.
///
/// Returns `None` for other node kinds and for fragments (`<>`), which have
/// no name. Spread attributes are skipped.
pub fn opening_element_from_node(node: &Node, source: &[u8]) -> Option<OpeningElement> {
    if !is_opening_element(node) {
        return None;
    }

    let name_node = node.child_by_field_name("name")?;
    let name: String = node_text(&name_node, source)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut cursor = node.walk();
    let attributes = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "jsx_attribute")
        .filter_map(|child| attribute_from_node(&child, source))
        .collect();

    Some(OpeningElement { name, attributes })
}

fn attribute_from_node(node: &Node, source: &[u8]) -> Option<Attribute> {
    let mut cursor = node.walk();
    let mut parts = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment");

    let name = node_text(&parts.next()?, source);
    let value = match parts.next() {
        Some(value_node) => attribute_value(&value_node, source),
        None => AttributeValue::Absent,
    };

    Some(Attribute { name, value })
}

fn attribute_value(node: &Node, source: &[u8]) -> AttributeValue {
    match node.kind() {
        "string" => AttributeValue::Literal(jsx_string_value(node, source)),
        "jsx_expression" => expression_value(node, source),
        _ => AttributeValue::Expression,
    }
}

/// Text of a quoted JSX attribute string with its HTML character references
/// decoded. JSX strings take no backslash escapes.
fn jsx_string_value(node: &Node, source: &[u8]) -> String {
    let (start, end) = (node.start_byte(), node.end_byte());
    if end - start < 2 {
        return unquote_string(&node_text(node, source));
    }
    let content_end = end - 1;

    let mut value = String::new();
    let mut offset = start + 1;
    let mut cursor = node.walk();
    for reference in node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "html_character_reference")
    {
        value.push_str(&String::from_utf8_lossy(&source[offset..reference.start_byte()]));
        let raw = node_text(&reference, source);
        match decode_character_reference(&raw) {
            Some(c) => value.push(c),
            None => value.push_str(&raw),
        }
        offset = reference.end_byte();
    }
    value.push_str(&String::from_utf8_lossy(&source[offset..content_end]));
    value
}

fn expression_value(node: &Node, source: &[u8]) -> AttributeValue {
    let mut cursor = node.walk();
    let inner: Vec<Node> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();

    let [expression] = inner.as_slice() else {
        return AttributeValue::Expression;
    };

    match expression.kind() {
        "string" => AttributeValue::Literal(unescape_js_string(&node_text(expression, source))),
        "template_string" if !has_substitution(expression) => {
            AttributeValue::Literal(unescape_js_string(&node_text(expression, source)))
        }
        _ => AttributeValue::Expression,
    }
}

fn has_substitution(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "template_substitution");
    found
}

fn node_text(node: &Node, source: &[u8]) -> String {
    String::from_utf8_lossy(&source[node.start_byte()..node.end_byte()]).to_string()
}
