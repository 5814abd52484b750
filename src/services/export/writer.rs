//! JSON records -> CSV text.
//!
//! The header is the union of record keys in first-seen order, so for uniform
//! data it is exactly the first record's keys. Missing keys and `null` give an
//! empty cell; nested arrays/objects are written as compact JSON. The whole
//! document is built in memory: on error nothing is returned.
//!
//! Quoting is RFC 4180 "when needed" and every row, the last one included,
//! ends with `\n`. Exports from a json2csv-based backend quote every string
//! and omit the final newline, so byte-for-byte diffs against those differ.

use std::collections::HashSet;

use csv::{Terminator, WriterBuilder};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Data should not be empty")]
    Empty,

    #[error("Data items should be objects (item {index} is {kind})")]
    NotRecords { index: usize, kind: &'static str },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

type Record = Map<String, Value>;

pub fn to_csv(data: &Value) -> Result<String, ExportError> {
    let records = records(data)?;
    let fields = header(&records);

    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(&fields)?;
    for record in &records {
        wtr.write_record(fields.iter().map(|field| cell(record.get(*field))))?;
    }

    let bytes = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn records(data: &Value) -> Result<Vec<&Record>, ExportError> {
    match data {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) if items.is_empty() => Err(ExportError::Empty),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_object().ok_or(ExportError::NotRecords {
                    index,
                    kind: kind_of(item),
                })
            })
            .collect(),
        Value::Null => Err(ExportError::Empty),
        other => Err(ExportError::NotRecords {
            index: 0,
            kind: kind_of(other),
        }),
    }
}

fn header<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    for key in records.iter().copied().flat_map(Record::keys) {
        if seen.insert(key.as_str()) {
            fields.push(key.as_str());
        }
    }
    fields
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
