//! DOM emission engine.
//!
//! Runs the same traversal as the text backend, but materializes the result
//! through opaque node constructors supplied by a [`DomBuilder`]. No escaping
//! happens here: the DOM layer owns text-safety at serialization time.

pub mod arena;

use crate::config::Config;
use crate::emit::{Emitter, Sink};
use crate::error::{Error, Result};
use crate::value::Value;

pub use arena::{Document, Node, NodeData, NodeId};

/// Node construction primitives of an external DOM library.
///
/// `Node` is an opaque handle; ownership of the constructed nodes stays with
/// the builder's document and outlives the conversion call.
pub trait DomBuilder {
    type Node: Copy;

    /// Create an element under `parent`, or under the document root for
    /// `None`.
    fn new_element(&mut self, parent: Option<Self::Node>, name: &str) -> Result<Self::Node>;
    /// Attach an attribute to an element. `None` means an empty value.
    fn new_attribute(&mut self, node: Self::Node, name: &str, value: Option<&str>) -> Result<()>;
    /// Append a text child.
    fn new_text(&mut self, node: Self::Node, content: &str) -> Result<()>;
    /// Append a CDATA child.
    fn new_cdata(&mut self, node: Self::Node, content: &str) -> Result<()>;
    /// Append a comment child.
    fn new_comment(&mut self, node: Self::Node, content: &str) -> Result<()>;
}

/// Convert a value tree into DOM nodes, returning the root element handle.
///
/// Same traversal and classification as [`to_xml_text`](crate::to_xml_text);
/// only the destination differs.
pub fn to_xml_dom<B: DomBuilder>(
    value: &Value,
    config: &Config,
    builder: &mut B,
) -> Result<B::Node> {
    config.validate()?;

    let mut writer = DomWriter {
        builder,
        stack: Vec::new(),
        root: None,
    };
    Emitter::new(config, &mut writer).emit_root(value)?;
    writer
        .root
        .ok_or_else(|| Error::Dom("traversal created no root element".to_string()))
}

/// Convert a value tree into the crate's own arena [`Document`].
///
/// # Example
///
/// ```
/// use xylem::{Config, Value, to_document};
///
/// let value = Value::mapping([("greeting", Value::from("hi"))]);
/// let config = Config::new().with_xml_decl(false);
/// let doc = to_document(&value, &config).unwrap();
/// assert_eq!(doc.to_xml(), "<root><greeting>hi</greeting></root>");
/// ```
pub fn to_document(value: &Value, config: &Config) -> Result<Document> {
    let mut doc = Document::new();
    to_xml_dom(value, config, &mut doc)?;
    Ok(doc)
}

/// Sink implementation that drives a [`DomBuilder`].
struct DomWriter<'a, B: DomBuilder> {
    builder: &'a mut B,
    /// Open elements, innermost last. Attributes and content attach to the
    /// top entry.
    stack: Vec<B::Node>,
    /// First element created, i.e. the document root.
    root: Option<B::Node>,
}

impl<B: DomBuilder> DomWriter<'_, B> {
    fn open(&mut self, name: &str) -> Result<()> {
        let parent = self.stack.last().copied();
        let node = self.builder.new_element(parent, name)?;
        self.root.get_or_insert(node);
        self.stack.push(node);
        Ok(())
    }

    fn current(&self) -> Result<B::Node> {
        self.stack
            .last()
            .copied()
            .ok_or_else(|| Error::Dom("no open element".to_string()))
    }
}

impl<B: DomBuilder> Sink for DomWriter<'_, B> {
    fn start_node(&mut self, name: &str) -> Result<()> {
        self.open(name)
    }

    fn start_tag(&mut self, name: &str) -> Result<()> {
        self.open(name)
    }

    fn close_tag(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_node(&mut self, _name: &str) -> Result<()> {
        self.stack.pop();
        Ok(())
    }

    fn empty_node(&mut self, name: &str) -> Result<()> {
        let parent = self.stack.last().copied();
        let node = self.builder.new_element(parent, name)?;
        self.root.get_or_insert(node);
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let node = self.current()?;
        self.builder.new_attribute(node, name, value)
    }

    fn text(&mut self, content: &str, _raw: bool) -> Result<()> {
        let node = self.current()?;
        self.builder.new_text(node, content)
    }

    fn cdata(&mut self, content: &str) -> Result<()> {
        let node = self.current()?;
        self.builder.new_cdata(node, content)
    }

    fn comment(&mut self, content: &str) -> Result<()> {
        let node = self.current()?;
        self.builder.new_comment(node, content)
    }
}
