//! JSX opening-tag model handed to the resolver.
//!
//! Nodes are produced by the tree-sitter adapter in [`crate::parser`] or
//! built directly with [`OpeningElement::new`] and the `with_*` helpers.

use serde::Serialize;

/// Value of a single JSX attribute, as far as it is statically known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// A string written directly in source: `as="h1"`, `as={"h1"}` or `` as={`h1`} ``.
    Literal(String),
    /// Any value only known at runtime: `as={tag}`, `as={cond ? "a" : "b"}`.
    Expression,
    /// Attribute written without a value: `<Slot asChild />`.
    Absent,
}

impl AttributeValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Literal(value.into()),
        }
    }

    pub fn expression(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Expression,
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningElement {
    /// Tag name as written: `input`, `CustomButton`, `Foo.Bar`, `svg:path`.
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl OpeningElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_literal(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attribute(Attribute::literal(name, value))
    }

    /// First attribute with exactly this name, in source order.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn literal_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(|a| a.value.as_literal())
    }
}
