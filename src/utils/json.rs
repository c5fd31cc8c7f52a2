//! JSON helpers shared by the decoding and signing pipelines

use std::io;

use serde::{Serialize, Serializer};
use serde_json::error::Category;
use serde_json::ser::{CompactFormatter, Formatter};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Parse bytes as a JSON object
///
/// Duplicate keys resolve to their last occurrence.
pub fn parse_object(text: &[u8]) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_slice(text).map_err(|e| Error::InvalidJson(describe(&e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject),
    }
}

/// Describe a decoder error using the classic `invalid character` /
/// `unexpected end of JSON input` vocabulary
pub fn describe(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Eof => "unexpected end of JSON input".to_string(),
        Category::Syntax => format!("invalid character: {err}"),
        Category::Data | Category::Io => err.to_string(),
    }
}

/// Render a value as canonical JSON text
///
/// Object keys are sorted ascending and items are separated by `", "` with
/// `": "` after each key, e.g. `{"alg": "HS256", "typ": "JWT"}`.
pub fn canonical(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    Sorted(value)
        .serialize(&mut ser)
        .map_err(|e| Error::InvalidJson(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::InvalidJson(e.to_string()))
}

struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(entries.into_iter().map(|(k, v)| (k, Sorted(v))))
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    /// Integral floats print without a fraction, e.g. `1e3` as `1000`
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
            write!(writer, "{value:.0}")
        } else {
            CompactFormatter.write_f64(writer, value)
        }
    }
}
