use crate::accumulator::error::AppendError;
use serde_json::Value;

/// Append-only buffer of numbers with a derived, filtered view.
///
/// The buffer preserves insertion order across all appends and never
/// shrinks. Neither [`append`] nor [`process`] synchronizes internally; a
/// shared instance must be serialized by the caller.
///
/// [`append`]: DataAccumulator::append
/// [`process`]: DataAccumulator::process
#[derive(Debug, Default, Clone)]
pub struct DataAccumulator {
    data: Vec<f64>,
}

impl DataAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every element of `values` to the buffer, preserving order.
    pub fn append(&mut self, values: &[f64]) {
        self.data.extend_from_slice(values);
    }

    /// Appends a dynamically-typed value.
    ///
    /// Only a JSON array whose elements are all numbers is accepted; both
    /// integer and float representations qualify. Any other shape is
    /// rejected before the buffer is touched, so a failed append leaves the
    /// stored sequence unchanged. Returns the number of elements appended.
    pub fn append_value(&mut self, value: &Value) -> Result<usize, AppendError> {
        let Value::Array(items) = value else {
            return Err(AppendError::WrongType(json_kind(value)));
        };

        let mut parsed = Vec::with_capacity(items.len());
        for item in items {
            let Some(v) = item.as_f64() else {
                return Err(AppendError::WrongType(json_kind(item)));
            };
            parsed.push(v);
        }

        let appended = parsed.len();
        self.data.append(&mut parsed);
        Ok(appended)
    }

    /// Derived view: every stored element strictly greater than zero, in
    /// buffer order, multiplied by two. Elements at or below zero are
    /// omitted.
    ///
    /// Pure read of current state; calling it repeatedly without an
    /// intervening append yields equal results.
    pub fn process(&self) -> Vec<f64> {
        self.data
            .iter()
            .filter(|&&x| x > 0.0)
            .map(|&x| x * 2.0)
            .collect()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
