//! Text rendering of tagged values
//!
//! Produces a readable, single-pass description of a value tree. Scalars
//! print as literals; kinds without a literal form print as `<kind: ...>`.
//!
//! # Format Examples
//!
//! - Null: `null`
//! - Int64: `42`, UInt64: `42u`
//! - Double: `3.0` (always has a decimal point)
//! - String: `"hello"` (with escaping)
//! - Bytes: `<data: 0a0bff>`
//! - Timestamp: `<date: 1500000000ns>`
//! - Uuid: `<uuid: 67e55044-10b1-426f-9247-bb680e5fe0c8>`
//! - Array: `[1, "two"]`
//! - Map: `{"a": 1, "b": null}`
//!
//! Map entries are printed sorted by key so output is stable between runs.
//! That ordering belongs to the printout only; `as_map` makes no such
//! promise.

use crate::value::TaggedValue;
use std::fmt;

/// Configuration for rendered output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Put each container element on its own indented line
    pub pretty: bool,
    /// Number of spaces per indentation level
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

impl RenderConfig {
    /// Single-line output
    pub fn compact() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Render a value to a string
pub fn render(value: &TaggedValue, config: &RenderConfig) -> String {
    let mut buf = String::new();
    format_value(value, config, 0, &mut buf);
    buf
}

fn format_value(value: &TaggedValue, config: &RenderConfig, depth: usize, buf: &mut String) {
    let raw = value.raw();
    match value {
        TaggedValue::Null(_) => buf.push_str("null"),
        TaggedValue::Bool(_) => {
            buf.push_str(if raw.bool_value() == Some(true) {
                "true"
            } else {
                "false"
            });
        }
        TaggedValue::Int64(_) => {
            if let Some(n) = raw.int64_value() {
                buf.push_str(&n.to_string());
            }
        }
        TaggedValue::UInt64(_) => {
            if let Some(n) = raw.uint64_value() {
                buf.push_str(&n.to_string());
                buf.push('u');
            }
        }
        TaggedValue::Double(_) => {
            if let Some(d) = raw.double_value() {
                let s = d.to_string();
                buf.push_str(&s);
                // Keep doubles visually distinct from integers
                if !s.contains('.') && d.is_finite() {
                    buf.push_str(".0");
                }
            }
        }
        TaggedValue::String(_) => match value.as_str() {
            Some(s) => format_string(s, buf),
            None => {
                let len = raw.string_bytes().map_or(0, <[u8]>::len);
                buf.push_str(&format!("<string: {} invalid bytes>", len));
            }
        },
        TaggedValue::Bytes(_) => {
            buf.push_str("<data: ");
            buf.push_str(&hex::encode(raw.data_bytes().unwrap_or_default()));
            buf.push('>');
        }
        TaggedValue::Timestamp(_) => {
            if let Some(nanos) = raw.date_value() {
                buf.push_str(&format!("<date: {}ns>", nanos));
            }
        }
        TaggedValue::ResourceHandle(_) => buf.push_str("<fd>"),
        TaggedValue::Uuid(_) => {
            if let Some(u) = value.as_uuid() {
                buf.push_str(&format!("<uuid: {}>", u.hyphenated()));
            }
        }
        TaggedValue::Array(_) => format_array(value, config, depth, buf),
        TaggedValue::Map(_) => format_map(value, config, depth, buf),
        TaggedValue::Unrecognized(_) => {
            buf.push_str(&format!("<{}>", raw.type_tag()));
        }
    }
}

/// Format a string with proper escaping
fn format_string(s: &str, buf: &mut String) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => {
                buf.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

fn format_array(value: &TaggedValue, config: &RenderConfig, depth: usize, buf: &mut String) {
    let items = value.as_array().unwrap_or_default();
    if items.is_empty() {
        buf.push_str("[]");
        return;
    }

    buf.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push(',');
            if !config.pretty {
                buf.push(' ');
            }
        }
        if config.pretty {
            newline_indent(config, depth + 1, buf);
        }
        format_value(item, config, depth + 1, buf);
    }
    if config.pretty {
        newline_indent(config, depth, buf);
    }
    buf.push(']');
}

fn format_map(value: &TaggedValue, config: &RenderConfig, depth: usize, buf: &mut String) {
    let mut entries: Vec<(String, TaggedValue)> =
        value.as_map().unwrap_or_default().into_iter().collect();
    if entries.is_empty() {
        buf.push_str("{}");
        return;
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    buf.push('{');
    for (i, (key, item)) in entries.iter().enumerate() {
        if i > 0 {
            buf.push(',');
            if !config.pretty {
                buf.push(' ');
            }
        }
        if config.pretty {
            newline_indent(config, depth + 1, buf);
        }
        format_string(key, buf);
        buf.push_str(": ");
        format_value(item, config, depth + 1, buf);
    }
    if config.pretty {
        newline_indent(config, depth, buf);
    }
    buf.push('}');
}

fn newline_indent(config: &RenderConfig, depth: usize, buf: &mut String) {
    buf.push('\n');
    buf.push_str(&" ".repeat(config.indent * depth));
}

/// Compact by default; `{:#}` renders pretty
impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = if f.alternate() {
            RenderConfig::pretty()
        } else {
            RenderConfig::compact()
        };
        f.write_str(&render(self, &config))
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), render(self, &RenderConfig::compact()))
    }
}
