//! Conversion configuration.

use crate::error::{Error, Result};

/// Configuration for one conversion, immutable during traversal.
///
/// The string options are the naming conventions that let a plain tree express
/// XML constructs: keys starting with `attr_prefix` become attributes of the
/// enclosing element, and a key equal to `text_key`, `cdata_key`, or
/// `comm_key` makes its value element text, a CDATA section, or a comment.
/// Setting any of them to the empty string disables that convention.
///
/// # Example
///
/// ```
/// use xylem::{Config, Value, to_xml_text};
///
/// let config = Config::new().with_root_name("report").with_indent(2);
/// let value = Value::mapping([("title", Value::from("Q3"))]);
/// let xml = to_xml_text(&value, &config).unwrap();
/// assert!(xml.contains("<report>"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the synthetic root element wrapping the top-level value.
    pub root_name: String,
    /// Version written into the XML declaration.
    pub version: String,
    /// Encoding written into the XML declaration.
    pub encoding: String,
    /// Whether to prepend `<?xml version="…" encoding="…"?>` (text backend).
    pub xml_decl: bool,
    /// Keys starting with this prefix denote attributes. Empty = disabled.
    pub attr_prefix: String,
    /// Reserved key meaning "my value is element text". Empty = disabled.
    pub text_key: String,
    /// Reserved key meaning "my value is a CDATA section". Empty = disabled.
    pub cdata_key: String,
    /// Reserved key meaning "my value is a comment". Empty = disabled.
    pub comm_key: String,
    /// Sort mapping keys byte-wise before emission.
    pub canonical: bool,
    /// Spaces per nesting level in the text backend. 0 = no whitespace added.
    pub indent: usize,
    /// Strip leading/trailing whitespace from text, comment, and CDATA
    /// content before emission.
    pub trim: bool,
}

impl Config {
    /// Default configuration: root `root`, declaration on, attribute prefix
    /// `-`, text key `#text`, CDATA and comment keys disabled.
    pub fn new() -> Self {
        Self {
            root_name: "root".to_string(),
            version: "1.0".to_string(),
            encoding: "utf-8".to_string(),
            xml_decl: true,
            attr_prefix: "-".to_string(),
            text_key: "#text".to_string(),
            cdata_key: String::new(),
            comm_key: String::new(),
            canonical: false,
            indent: 0,
            trim: false,
        }
    }

    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_xml_decl(mut self, xml_decl: bool) -> Self {
        self.xml_decl = xml_decl;
        self
    }

    pub fn with_attr_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attr_prefix = prefix.into();
        self
    }

    pub fn with_text_key(mut self, key: impl Into<String>) -> Self {
        self.text_key = key.into();
        self
    }

    pub fn with_cdata_key(mut self, key: impl Into<String>) -> Self {
        self.cdata_key = key.into();
        self
    }

    pub fn with_comm_key(mut self, key: impl Into<String>) -> Self {
        self.comm_key = key.into();
        self
    }

    pub fn with_canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Check that the reserved names can coexist.
    ///
    /// Non-empty `attr_prefix`, `text_key`, `cdata_key`, and `comm_key` must
    /// be mutually distinct: a key matching two conventions at once would be
    /// classified by fixed precedence, which is never what the caller meant.
    /// Entry points run this before any traversal starts.
    pub fn validate(&self) -> Result<()> {
        let reserved = [
            ("attr_prefix", &self.attr_prefix),
            ("text_key", &self.text_key),
            ("cdata_key", &self.cdata_key),
            ("comm_key", &self.comm_key),
        ];
        for (i, (name_a, value_a)) in reserved.iter().enumerate() {
            if value_a.is_empty() {
                continue;
            }
            for (name_b, value_b) in &reserved[i + 1..] {
                if *value_a == *value_b {
                    return Err(Error::Config(format!(
                        "{name_a} and {name_b} are both {value_a:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
