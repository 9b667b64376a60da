//! # xylem
//!
//! A fast, lightweight library for converting dynamically-typed value trees
//! into XML — either serialized text or an in-memory document.
//!
//! ## Features
//!
//! - Schema-free: a handful of key-naming conventions (attribute prefix,
//!   text/CDATA/comment keys) let plain mappings express XML constructs
//! - Two backends over one traversal: a streaming text writer and a DOM
//!   builder driven through opaque node constructors
//! - Canonical mode for byte-reproducible output
//! - Host objects resolved lazily through the [`ForeignValue`] contract
//!
//! ## Quick Start
//!
//! ```
//! use xylem::{Config, Value, to_xml_text};
//!
//! let value = Value::mapping([
//!     ("item", Value::sequence([
//!         Value::mapping([("-id", Value::from(1)), ("#text", Value::from("pen"))]),
//!         Value::mapping([("-id", Value::from(2)), ("#text", Value::from("ink"))]),
//!     ])),
//! ]);
//!
//! let config = Config::new().with_xml_decl(false);
//! let xml = to_xml_text(&value, &config).unwrap();
//! assert_eq!(xml, r#"<root><item id="1">pen</item><item id="2">ink</item></root>"#);
//! ```
//!
//! ## Naming conventions
//!
//! Inside a mapping, a key is classified against the configuration in fixed
//! precedence order: CDATA key, text key, comment key, attribute prefix,
//! plain child element. Sequences repeat their enclosing key once per entry.
//! Element and attribute names starting with a digit gain a leading
//! underscore, since XML names cannot start with a digit.

pub mod config;
pub mod dom;
pub mod error;
pub mod value;

mod emit;
mod text;

#[cfg(feature = "cli")]
pub mod json;

pub use config::Config;
pub use dom::{Document, DomBuilder, NodeId, to_document, to_xml_dom};
pub use error::{Error, Result};
pub use text::{MAX_INDENT_WIDTH, to_xml_text};
pub use value::{ForeignValue, MAX_RESOLVE_HOPS, Value};
