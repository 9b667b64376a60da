//! The shared traversal engine.
//!
//! One recursive walk decides, for every key/value pair, whether it becomes an
//! element, an attribute, text content, a CDATA section, or a comment. The
//! decisions are identical for both output backends; only the [`Sink`] they
//! drive differs. Classification precedence for reserved names is fixed:
//! CDATA key > text key > comment key > attribute prefix > plain element.

use std::borrow::Cow;

use crate::config::Config;
use crate::error::Result;
use crate::value::{Value, resolve};

/// Destination capability set consumed by the traversal.
///
/// The operations mirror what an XML writer needs: `start_tag`/`close_tag`
/// bracket an attribute pass when an attribute prefix is configured, while
/// `start_node` opens an element in one step when no attribute pass runs.
pub(crate) trait Sink {
    /// Open an element and its content in one step: `<name>`.
    fn start_node(&mut self, name: &str) -> Result<()>;
    /// Open an element but leave the tag unfinished for attributes: `<name`.
    fn start_tag(&mut self, name: &str) -> Result<()>;
    /// Finish an opening tag after its attributes: `>`.
    fn close_tag(&mut self) -> Result<()>;
    /// Close an element: `</name>`.
    fn end_node(&mut self, name: &str) -> Result<()>;
    /// Emit a childless element: `<name/>`.
    fn empty_node(&mut self, name: &str) -> Result<()>;
    /// Emit one attribute inside an open tag. `None` means an empty value.
    fn attribute(&mut self, name: &str, value: Option<&str>) -> Result<()>;
    /// Emit character content. `raw` content bypasses escaping.
    fn text(&mut self, content: &str, raw: bool) -> Result<()>;
    /// Emit a CDATA section.
    fn cdata(&mut self, content: &str) -> Result<()>;
    /// Emit a comment.
    fn comment(&mut self, content: &str) -> Result<()>;
}

/// XML names cannot start with a digit; such names get a leading underscore.
pub(crate) fn guard_name(name: &str) -> Cow<'_, str> {
    match name.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => Cow::Owned(format!("_{name}")),
        _ => Cow::Borrowed(name),
    }
}

/// Sort mapping entries byte-wise ascending by key.
///
/// Only called for canonical mode on mappings with more than one entry; a
/// single-entry mapping is trivially ordered. Keys are unique, so ties
/// cannot occur.
pub(crate) fn canonical_order(pairs: &[(String, Value)]) -> Vec<&(String, Value)> {
    let mut sorted: Vec<&(String, Value)> = pairs.iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    sorted
}

/// One traversal over one value tree, driving one sink.
pub(crate) struct Emitter<'a, S: Sink> {
    config: &'a Config,
    sink: &'a mut S,
}

impl<'a, S: Sink> Emitter<'a, S> {
    pub(crate) fn new(config: &'a Config, sink: &'a mut S) -> Self {
        Self { config, sink }
    }

    /// Emit the synthetic root element around the top-level value.
    ///
    /// The root always stays a single element: a top-level sequence flattens
    /// inside it instead of repeating it, since repetition would produce
    /// multiple document roots.
    pub(crate) fn emit_root(&mut self, value: &Value) -> Result<()> {
        let (value, raw) = resolve(value)?;
        let config = self.config;
        let name = guard_name(&config.root_name);
        match value.as_ref() {
            Value::Null => self.sink.empty_node(&name),
            other => self.element_body(&name, other, raw),
        }
    }

    /// Classify one `(key, value)` pair inside a mapping and emit it.
    fn emit_pair(&mut self, key: &str, value: &Value, attrs_only: bool) -> Result<()> {
        let (value, raw) = resolve(value)?;
        let config = self.config;

        if !config.cdata_key.is_empty() && key == config.cdata_key {
            if attrs_only {
                return Ok(());
            }
            // Null and aggregates produce nothing here.
            if let Value::Scalar(content) = value.as_ref() {
                let content = self.trimmed(content);
                self.sink.cdata(content)?;
            }
        } else if !config.text_key.is_empty() && key == config.text_key {
            if attrs_only {
                return Ok(());
            }
            if let Value::Scalar(content) = value.as_ref() {
                let content = self.trimmed(content);
                self.sink.text(content, raw)?;
            }
        } else if !config.comm_key.is_empty() && key == config.comm_key {
            if attrs_only {
                return Ok(());
            }
            match value.as_ref() {
                // Unlike the text and CDATA keys, a null comment is emitted.
                Value::Null => self.sink.comment("")?,
                Value::Scalar(content) => {
                    let content = self.trimmed(content);
                    self.sink.comment(content)?;
                }
                _ => {}
            }
        } else if !config.attr_prefix.is_empty() {
            if let Some(attr_name) = key.strip_prefix(config.attr_prefix.as_str()) {
                if !attrs_only {
                    return Ok(());
                }
                let attr_name = guard_name(attr_name);
                match value.as_ref() {
                    Value::Null => self.sink.attribute(&attr_name, None)?,
                    Value::Scalar(content) => {
                        self.sink.attribute(&attr_name, Some(content.as_str()))?
                    }
                    _ => {}
                }
            } else {
                if attrs_only {
                    return Ok(());
                }
                self.emit_element(key, value.as_ref(), raw)?;
            }
        } else {
            self.emit_element(key, value.as_ref(), raw)?;
        }
        Ok(())
    }

    /// Emit an element named `name` holding an already-resolved value.
    ///
    /// A sequence repeats the name once per entry as sibling elements; it
    /// never introduces a wrapping element of its own.
    fn emit_element(&mut self, name: &str, value: &Value, raw: bool) -> Result<()> {
        match value {
            Value::Null => self.sink.empty_node(&guard_name(name)),
            Value::Sequence(items) => {
                for item in items {
                    let (item, item_raw) = resolve(item)?;
                    self.emit_element(name, item.as_ref(), item_raw)?;
                }
                Ok(())
            }
            other => self.element_body(&guard_name(name), other, raw),
        }
    }

    /// Open, fill, and close one element around a non-null, non-sequence
    /// value. With an attribute prefix configured the element's mapping is
    /// walked twice: once collecting attributes into the open tag, once
    /// emitting content.
    fn element_body(&mut self, name: &str, value: &Value, raw: bool) -> Result<()> {
        if self.config.attr_prefix.is_empty() {
            self.sink.start_node(name)?;
            self.emit_resolved(value, false, raw)?;
            self.sink.end_node(name)
        } else {
            self.sink.start_tag(name)?;
            self.emit_resolved(value, true, raw)?;
            self.sink.close_tag()?;
            self.emit_resolved(value, false, raw)?;
            self.sink.end_node(name)
        }
    }

    /// Emit a value reached without a key: the content of an element, or an
    /// attribute-collection pass over it.
    fn emit_value(&mut self, value: &Value, attrs_only: bool) -> Result<()> {
        let (value, raw) = resolve(value)?;
        self.emit_resolved(value.as_ref(), attrs_only, raw)
    }

    fn emit_resolved(&mut self, value: &Value, attrs_only: bool, raw: bool) -> Result<()> {
        match value {
            Value::Null => {}
            Value::Scalar(content) => {
                if !attrs_only {
                    let content = self.trimmed(content);
                    self.sink.text(content, raw)?;
                }
            }
            Value::Sequence(items) => {
                // A bare sequence flattens; keyed repetition happens one
                // level up in emit_element.
                for item in items {
                    self.emit_value(item, attrs_only)?;
                }
            }
            Value::Mapping(pairs) => {
                if self.config.canonical && pairs.len() > 1 {
                    for (key, value) in canonical_order(pairs) {
                        self.emit_pair(key, value, attrs_only)?;
                    }
                } else {
                    for (key, value) in pairs {
                        self.emit_pair(key, value, attrs_only)?;
                    }
                }
            }
            // resolve() never returns a foreign value.
            Value::Foreign(_) => {}
        }
        Ok(())
    }

    fn trimmed<'v>(&self, content: &'v str) -> &'v str {
        if self.config.trim {
            content.trim_matches(|c: char| c.is_ascii_whitespace())
        } else {
            content
        }
    }
}
