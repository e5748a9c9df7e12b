//! Parsed message tree

use crate::er7::Delimiters;

/// A parsed message: the tree root plus the delimiters it was written with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub root: Node,
    pub delimiters: Delimiters,
}

impl Message {
    /// Message control id (MSH-10)
    pub fn control_id(&self) -> Option<&str> {
        self.root
            .child("MSH")?
            .child("MSH_10")?
            .leaf_value()
            .filter(|id| !id.is_empty())
    }

    /// Message structure, e.g. `ADT_A01`
    pub fn structure(&self) -> &str {
        &self.root.name
    }
}

/// A node of a parsed message: message, segment, field, component or subcomponent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub long_name: Option<String>,
    pub content: Content,
}

/// Node content: literal text or ordered children
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Leaf(String),
    Branch(Vec<Node>),
}

impl Node {
    /// Create a leaf node holding literal text
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            long_name: None,
            content: Content::Leaf(text.into()),
        }
    }

    /// Create a branch node from its children
    pub fn branch(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            long_name: None,
            content: Content::Branch(children),
        }
    }

    /// Attach a long (human readable) name
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Branch(children) => children,
            Content::Leaf(_) => &[],
        }
    }

    pub fn leaf_value(&self) -> Option<&str> {
        match &self.content {
            Content::Leaf(text) => Some(text),
            Content::Branch(_) => None,
        }
    }

    /// First direct child with the given short name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Number of leaf nodes in this subtree
    pub fn leaf_count(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 1,
            Content::Branch(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}
