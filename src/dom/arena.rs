//! Arena-allocated XML document.
//!
//! The crate's default [`DomBuilder`](super::DomBuilder) implementation. All
//! nodes live in a contiguous vector for cache-friendly traversal;
//! parent/child/sibling links are indices into that vector.

use crate::error::{Error, Result};

use super::DomBuilder;

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Character content.
    Text(String),
    /// CDATA section.
    Cdata(String),
    /// Comment.
    Comment(String),
}

/// A node in the arena document.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Arena-based XML document tree.
pub struct Document {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Document {
    /// Create an empty document with a document root node.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        doc.document = doc.alloc(Node::new(NodeData::Document));
        doc
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Create an unattached element node.
    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Element {
            name: name.into(),
            attrs: Vec::new(),
        }))
    }

    /// Create an unattached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Text(content.into())))
    }

    /// Create an unattached CDATA node.
    pub fn create_cdata(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Cdata(content.into())))
    }

    /// Create an unattached comment node.
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(content.into())))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes[parent.0 as usize].last_child;

        if last.is_some() {
            self.nodes[last.0 as usize].next_sibling = child;
            self.nodes[child.0 as usize].prev_sibling = last;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
        self.nodes[child.0 as usize].parent = parent;
    }

    /// Child IDs of a node, in document order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = match self.get(id) {
            Some(node) => node.first_child,
            None => return out,
        };
        while let Some(node) = self.get(current) {
            out.push(current);
            current = node.next_sibling;
        }
        out
    }

    /// Serialize the document to compact XML text.
    ///
    /// Childless elements render self-closed; text and attribute values are
    /// escaped, CDATA and comments are copied verbatim.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.document) {
            self.serialize(child, &mut out);
        }
        out
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {}
            NodeData::Element { name, attrs } => {
                out.push('<');
                out.push_str(name);
                for (attr_name, attr_value) in attrs {
                    out.push(' ');
                    out.push_str(attr_name);
                    out.push_str("=\"");
                    push_escaped(out, attr_value, true);
                    out.push('"');
                }
                let children = self.children(id);
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        self.serialize(child, out);
                    }
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
            }
            NodeData::Text(content) => push_escaped(out, content, false),
            NodeData::Cdata(content) => {
                out.push_str("<![CDATA[");
                out.push_str(content);
                out.push_str("]]>");
            }
            NodeData::Comment(content) => {
                out.push_str("<!--");
                out.push_str(content);
                out.push_str("-->");
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn push_escaped(out: &mut String, content: &str, attr: bool) {
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl DomBuilder for Document {
    type Node = NodeId;

    fn new_element(&mut self, parent: Option<NodeId>, name: &str) -> Result<NodeId> {
        let id = self.create_element(name);
        self.append(parent.unwrap_or(self.document), id);
        Ok(id)
    }

    fn new_attribute(&mut self, node: NodeId, name: &str, value: Option<&str>) -> Result<()> {
        match self.nodes.get_mut(node.0 as usize).map(|n| &mut n.data) {
            Some(NodeData::Element { attrs, .. }) => {
                attrs.push((name.to_string(), value.unwrap_or("").to_string()));
                Ok(())
            }
            _ => Err(Error::Dom(format!(
                "attribute {name:?} attached to a non-element node"
            ))),
        }
    }

    fn new_text(&mut self, node: NodeId, content: &str) -> Result<()> {
        let id = self.create_text(content);
        self.append(node, id);
        Ok(())
    }

    fn new_cdata(&mut self, node: NodeId, content: &str) -> Result<()> {
        let id = self.create_cdata(content);
        self.append(node, id);
        Ok(())
    }

    fn new_comment(&mut self, node: NodeId, content: &str) -> Result<()> {
        let id = self.create_comment(content);
        self.append(node, id);
        Ok(())
    }
}
