use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// The served document, parsed once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Dataset(Value);

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read dataset {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("dataset {} is not valid JSON", path.display()))?;
        Ok(Self(value))
    }

    #[cfg(test)]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn records(&self) -> &Value {
        &self.0
    }

    /// Number of individuals: array length, or 1 for a lone top-level record.
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
