//! Low-level markup writing: attributes, tags, numbers and escaping.
//!
//! Everything writes into a `String` sink. Writing to a `String` cannot
//! fail, so the `fmt::Result`s from `write!` are discarded here.

use std::fmt::{self, Write};

/// An `f64` formatted the way SVG attributes expect it.
///
/// Uses the shortest representation that round-trips (`50.0` prints as
/// `50`), with negative zero printed as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Append ` name="value"` to `out`.
pub fn attribute(out: &mut String, name: &str, value: impl fmt::Display) {
    let _ = write!(out, " {name}=\"{value}\"");
}

/// Append ` name="value{unit}"` to `out`.
pub fn attribute_with_unit(out: &mut String, name: &str, value: impl fmt::Display, unit: &str) {
    let _ = write!(out, " {name}=\"{value}{unit}\"");
}

pub fn open_start_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
}

pub fn close_tag(out: &mut String) {
    out.push('>');
}

/// Append `</name>` and a newline.
pub fn end_tag(out: &mut String, name: &str) {
    let _ = writeln!(out, "</{name}>");
}

/// Append `x,y ` for an output-space coordinate pair.
pub fn coordinate_pair(out: &mut String, x: f64, y: f64) {
    let _ = write!(out, "{},{} ", Num(x), Num(y));
}

/// Escape the five XML special characters for text content and attribute values.
pub fn escape_xml(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
