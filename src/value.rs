//! The dynamically-typed value tree that conversions consume.
//!
//! A [`Value`] is deliberately schema-free: the naming conventions applied
//! during emission (attribute prefixes, text/CDATA/comment keys) are what give
//! a tree its XML shape, not the types here. Host objects that are not plain
//! data enter the tree as [`Value::Foreign`] and are unwrapped through the
//! [`ForeignValue`] resolution contract at emission time.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Maximum number of foreign-value unwrap hops before resolution gives up.
///
/// A well-behaved [`ForeignValue`] unwraps to a plain variant in one or two
/// hops; the cap exists so a self-wrapping object cannot hang a conversion.
pub const MAX_RESOLVE_HOPS: usize = 64;

/// A node in the input tree.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence. Renders as a self-closing element, an empty attribute, or
    /// nothing at all, depending on where it appears.
    Null,
    /// A string leaf. Numeric and boolean inputs are stringified by the
    /// `From` conversions below.
    Scalar(String),
    /// Ordered repetition: a sequence under key `k` emits one `<k>` sibling
    /// per entry, with no wrapping element of its own.
    Sequence(Vec<Value>),
    /// Ordered key/value pairs. Iteration order is insertion order unless
    /// canonical mode sorts it; keys are unique within one mapping.
    Mapping(Vec<(String, Value)>),
    /// An opaque host object that must be resolved before emission.
    Foreign(Arc<dyn ForeignValue>),
}

/// A host object embedded in the tree.
///
/// Implementors unwrap themselves to a plain [`Value`] and report whether the
/// unwrapped content should bypass XML escaping (`raw`). Unwrapping may yield
/// another `Foreign` value; the engine keeps resolving up to
/// [`MAX_RESOLVE_HOPS`] hops.
pub trait ForeignValue: fmt::Debug {
    /// Unwrap to a plain value. The boolean is the `raw` flag: `true` means
    /// the content is emitted verbatim, without escaping.
    fn resolve(&self) -> Result<(Value, bool)>;
}

impl Value {
    /// Build a scalar from anything string-like.
    pub fn scalar(content: impl Into<String>) -> Self {
        Value::Scalar(content.into())
    }

    /// Build a sequence from an iterator of values.
    pub fn sequence(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Sequence(items.into_iter().collect())
    }

    /// Build a mapping from key/value pairs, preserving insertion order.
    ///
    /// Keys are unique within a mapping: a later pair with an already-seen
    /// key overwrites the earlier one in place.
    pub fn mapping<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            if let Some(existing) = out.iter_mut().find(|(k, _)| *k == key) {
                existing.1 = value;
            } else {
                out.push((key, value));
            }
        }
        Value::Mapping(out)
    }

    /// Wrap a host object for deferred resolution.
    pub fn foreign(object: impl ForeignValue + 'static) -> Self {
        Value::Foreign(Arc::new(object))
    }

    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(if b { "true" } else { "false" }.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

/// Resolve a node to a plain value before its variant is inspected.
///
/// Plain variants pass through borrowed with `raw = false`; resolution is
/// idempotent on them. Foreign values are unwrapped until a plain variant
/// appears, keeping the `raw` flag of the last hop.
pub(crate) fn resolve(value: &Value) -> Result<(Cow<'_, Value>, bool)> {
    if !matches!(value, Value::Foreign(_)) {
        return Ok((Cow::Borrowed(value), false));
    }

    let mut current = Cow::Borrowed(value);
    let mut raw = false;
    for _ in 0..MAX_RESOLVE_HOPS {
        match current.as_ref() {
            Value::Foreign(object) => {
                let (unwrapped, is_raw) = object.resolve()?;
                raw = is_raw;
                current = Cow::Owned(unwrapped);
            }
            _ => return Ok((current, raw)),
        }
    }
    Err(Error::Resolve(format!(
        "foreign value did not resolve within {MAX_RESOLVE_HOPS} hops"
    )))
}
