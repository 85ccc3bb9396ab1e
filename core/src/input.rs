//! Test-case ingestion.
//!
//! A test case arrives as a JSON document whose share entries are keyed
//! by their x coordinate, with the y value written as a digit string in
//! a per-share base:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Shares are collected in document order, which is why the map type
//! behind [`serde_json::Value`] must preserve insertion order: the
//! solver only consumes the first `k` points it is handed.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use serde_json::{Map, Value};

use math::radix::{self, MAX_BASE, MIN_BASE};

use crate::error::input::{Error, Result};
use crate::solver::Point;

/// Files the driver falls back to when invoked without arguments.
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["test1.json", "test2.json"];

/// One parsed reconstruction problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Total number of shares the document advertises. Informational
    /// only; never validated against `points` or `k`.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
    /// Decoded shares, in document order.
    pub points: Vec<Point>,
}

impl TestCase {
    /// Read and parse the test case stored at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a test case from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(raw)
            .map_err(|err| Error::Malformed(err.to_string()))?;
        let Value::Object(entries) = document else {
            return Err(Error::Malformed(
                "expected a top-level object".into(),
            ));
        };

        let mut n = None;
        let mut k = None;
        let mut points = Vec::new();
        for (key, value) in &entries {
            match key.as_str() {
                "keys" => read_thresholds(value, &mut n, &mut k)?,
                "n" => n = Some(parse_count(value, "n")?),
                "k" => k = Some(parse_count(value, "k")?),
                // anything else is a share entry or ignored
                _ => {
                    if let Some(x) = share_key(key) {
                        points.push(parse_share(x, value)?);
                    }
                }
            }
        }

        let k = k.ok_or(Error::MissingField("k"))?;
        if k == 0 {
            return Err(Error::InvalidThreshold(k));
        }

        Ok(Self {
            n: n.unwrap_or(0),
            k,
            points,
        })
    }
}

/// Share entries are keyed by their x coordinate, written in decimal.
fn share_key(key: &str) -> Option<BigInt> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn read_thresholds(
    value: &Value,
    n: &mut Option<usize>,
    k: &mut Option<usize>,
) -> Result<()> {
    let Value::Object(fields) = value else {
        return Err(Error::Malformed("`keys` is not an object".into()));
    };
    if let Some(field) = fields.get("n") {
        *n = Some(parse_count(field, "n")?);
    }
    if let Some(field) = fields.get("k") {
        *k = Some(parse_count(field, "k")?);
    }
    Ok(())
}

fn parse_share(x: BigInt, entry: &Value) -> Result<Point> {
    let Value::Object(fields) = entry else {
        return Err(Error::Malformed(format!(
            "share {x} is not an object"
        )));
    };
    let base = parse_base(fields, &x)?;
    let value = match fields.get("value") {
        Some(Value::String(value)) => value,
        Some(_) => {
            return Err(Error::Malformed(format!(
                "share {x} has a non-string value"
            )))
        }
        None => return Err(Error::MissingField("value")),
    };
    let y = radix::decode(value, base)?;
    Ok(Point { x, y })
}

fn parse_base(fields: &Map<String, Value>, x: &BigInt) -> Result<u32> {
    let field = fields.get("base").ok_or(Error::MissingField("base"))?;
    let base = match field {
        Value::String(raw) => raw.parse::<u64>().map_err(|_| {
            Error::Malformed(format!("share {x} has base {raw:?}"))
        })?,
        Value::Number(raw) => raw.as_u64().ok_or_else(|| {
            Error::Malformed(format!("share {x} has base {raw}"))
        })?,
        _ => {
            return Err(Error::Malformed(format!(
                "share {x} has a non-numeric base"
            )))
        }
    };
    if !(u64::from(MIN_BASE)..=u64::from(MAX_BASE)).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }
    Ok(base as u32)
}

fn parse_count(value: &Value, field: &'static str) -> Result<usize> {
    let count = match value {
        Value::String(raw) => raw.parse::<u64>().ok(),
        Value::Number(raw) => raw.as_u64(),
        _ => None,
    };
    count
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| Error::Malformed(format!("`{field}` is not a count")))
}
