//! Text emission engine: the streaming XML writer.
//!
//! The writer owns a growable output buffer and follows a reserve-then-write
//! discipline: before each logical write it reserves the exact worst case
//! (content length times the escape expansion factor plus tag framing), then
//! writes exactly the bytes produced. The buffer is handed to the caller only
//! after the traversal completes.

mod escape;

use crate::config::Config;
use crate::emit::{Emitter, Sink};
use crate::error::Result;
use crate::value::Value;
use escape::{ATTR_EXPANSION, TEXT_EXPANSION, escape_attr_into, escape_text_into};

/// Indentation is capped at this many columns no matter how deep the tree
/// nests, bounding per-line whitespace.
pub const MAX_INDENT_WIDTH: usize = 60;

/// Convert a value tree to XML text.
///
/// Wraps `value` in a root element named `config.root_name` and returns the
/// finished document. When `config.xml_decl` is set the output starts with an
/// XML declaration carrying `config.version` and `config.encoding`.
///
/// # Example
///
/// ```
/// use xylem::{Config, Value, to_xml_text};
///
/// let value = Value::mapping([
///     ("-id", Value::from(7)),
///     ("name", Value::from("widget")),
/// ]);
/// let config = Config::new().with_xml_decl(false);
/// let xml = to_xml_text(&value, &config).unwrap();
/// assert_eq!(xml, r#"<root id="7"><name>widget</name></root>"#);
/// ```
pub fn to_xml_text(value: &Value, config: &Config) -> Result<String> {
    config.validate()?;

    let mut writer = TextWriter::new(config);
    if config.xml_decl {
        writer.write_decl(&config.version, &config.encoding);
    }
    Emitter::new(config, &mut writer).emit_root(value)?;
    Ok(writer.into_string())
}

/// Sink implementation that streams XML text into an owned buffer.
pub(crate) struct TextWriter<'a> {
    config: &'a Config,
    out: String,
    depth: usize,
}

impl<'a> TextWriter<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }

    /// `<?xml version="…" encoding="…"?>` with both values escaped as
    /// attribute values.
    pub(crate) fn write_decl(&mut self, version: &str, encoding: &str) {
        self.out.reserve(
            "<?xml version=\"\" encoding=\"\"?>\n".len()
                + version.len() * ATTR_EXPANSION
                + encoding.len() * ATTR_EXPANSION,
        );
        self.out.push_str("<?xml version=\"");
        escape_attr_into(&mut self.out, version);
        self.out.push_str("\" encoding=\"");
        escape_attr_into(&mut self.out, encoding);
        self.out.push_str("\"?>\n");
    }

    fn indenting(&self) -> bool {
        self.config.indent > 0
    }

    fn indent_width(&self) -> usize {
        (self.depth * self.config.indent).min(MAX_INDENT_WIDTH)
    }

    fn push_indent(&mut self) {
        if self.indenting() {
            let width = self.indent_width();
            self.out.reserve(width);
            self.out.extend(std::iter::repeat_n(' ', width));
        }
    }

    fn push_newline(&mut self) {
        if self.indenting() {
            self.out.push('\n');
        }
    }
}

impl Sink for TextWriter<'_> {
    fn start_node(&mut self, name: &str) -> Result<()> {
        self.push_indent();
        self.out.reserve(name.len() + 3);
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        self.push_newline();
        self.depth += 1;
        Ok(())
    }

    fn start_tag(&mut self, name: &str) -> Result<()> {
        self.push_indent();
        self.out.reserve(name.len() + 1);
        self.out.push('<');
        self.out.push_str(name);
        Ok(())
    }

    fn close_tag(&mut self) -> Result<()> {
        self.out.reserve(2);
        self.out.push('>');
        self.push_newline();
        self.depth += 1;
        Ok(())
    }

    fn end_node(&mut self, name: &str) -> Result<()> {
        self.depth -= 1;
        self.push_indent();
        self.out.reserve(name.len() + 4);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        self.push_newline();
        Ok(())
    }

    fn empty_node(&mut self, name: &str) -> Result<()> {
        self.push_indent();
        self.out.reserve(name.len() + 4);
        self.out.push('<');
        self.out.push_str(name);
        self.out.push_str("/>");
        self.push_newline();
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let value = value.unwrap_or("");
        self.out
            .reserve(name.len() + value.len() * ATTR_EXPANSION + 4);
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        escape_attr_into(&mut self.out, value);
        self.out.push('"');
        Ok(())
    }

    fn text(&mut self, content: &str, raw: bool) -> Result<()> {
        self.push_indent();
        self.out.reserve(if raw {
            content.len()
        } else {
            content.len() * TEXT_EXPANSION
        });
        if raw {
            self.out.push_str(content);
        } else {
            escape_text_into(&mut self.out, content);
        }
        self.push_newline();
        Ok(())
    }

    fn cdata(&mut self, content: &str) -> Result<()> {
        self.push_indent();
        self.out.reserve(content.len() + 12);
        self.out.push_str("<![CDATA[");
        self.out.push_str(content);
        self.out.push_str("]]>");
        self.push_newline();
        Ok(())
    }

    fn comment(&mut self, content: &str) -> Result<()> {
        self.push_indent();
        self.out.reserve(content.len() + 7);
        self.out.push_str("<!--");
        self.out.push_str(content);
        self.out.push_str("-->");
        self.push_newline();
        Ok(())
    }
}
