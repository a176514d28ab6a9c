use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// Row/column projection of a JSON payload.
///
/// Two shapes are accepted: an array of objects (one row per element, the
/// column set is the union of keys in first-seen order, missing cells become
/// `Value::Null`) and an object of equal-length arrays (one column per key).
/// Anything else is rejected as [`Error::Shape`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Array(items) => Self::from_records(items),
            Value::Object(map) => Self::from_columns(map),
            other => Err(Error::Shape(format!(
                "expected a JSON array or object, got {}",
                kind(&other)
            ))),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    fn from_records(items: Vec<Value>) -> Result<Self, Error> {
        let mut columns: Vec<String> = Vec::new();
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !columns.iter().any(|c| c == key) {
                            columns.push(key.clone());
                        }
                    }
                    records.push(map);
                }
                other => {
                    return Err(Error::Shape(format!(
                        "array element {index} is {}, not an object",
                        kind(&other)
                    )))
                }
            }
        }
        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|column| record.remove(column).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Ok(Self { columns, rows })
    }

    fn from_columns(map: Map<String, Value>) -> Result<Self, Error> {
        let mut columns = Vec::with_capacity(map.len());
        let mut series: Vec<Vec<Value>> = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    columns.push(key);
                    series.push(items);
                }
                other => {
                    return Err(Error::Shape(format!(
                        "field \"{key}\" is {}, not an array",
                        kind(&other)
                    )))
                }
            }
        }
        let height = series.first().map(Vec::len).unwrap_or(0);
        if series.iter().any(|s| s.len() != height) {
            return Err(Error::Shape(
                "column arrays have unequal lengths".to_string(),
            ));
        }
        let mut rows = Vec::with_capacity(height);
        for i in 0..height {
            rows.push(
                series
                    .iter_mut()
                    .map(|s| std::mem::replace(&mut s[i], Value::Null))
                    .collect(),
            );
        }
        Ok(Self { columns, rows })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
