//! Predicate arguments.
//!
//! A [`Value`] is the closed set of argument shapes a predicate can carry.
//! Values are rendered inline into the statement text; nothing is bound as a
//! separate parameter.
//!
//! **Warning**: inlined text is not escaped. Never pass untrusted input as a
//! predicate argument.

use std::fmt;
use std::sync::Arc;

/// A predicate argument.
#[derive(Clone)]
pub enum Value {
    /// No argument (renders as the empty string).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value, inlined verbatim.
    Text(String),
    /// Any value with a textual form.
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// List of strings.
    Texts(Vec<String>),
    /// List of 32-bit integers.
    I32s(Vec<i32>),
    /// List of 64-bit integers.
    I64s(Vec<i64>),
    /// List of 32-bit floats.
    F32s(Vec<f32>),
    /// List of 64-bit floats.
    F64s(Vec<f64>),
    /// List of arbitrary values.
    List(Vec<Value>),
    /// Structured JSON value.
    Json(serde_json::Value),
}

impl Value {
    /// Wrap any displayable value.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Textual form used for every operator except `in` / `not in`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Display(d) => d.to_string(),
            Value::Json(json) => json_text(json),
            _ => self.to_list_text().unwrap_or_default(),
        }
    }

    /// Comma-joined token list used by `in` / `not in`.
    ///
    /// Returns `None` when the value has no list form (scalars, `Null`, and
    /// JSON values other than strings and arrays).
    pub fn to_list_text(&self) -> Option<String> {
        let text = match self {
            Value::Text(s) => s.clone(),
            Value::Display(d) => d.to_string(),
            Value::Texts(items) => items.join(","),
            Value::I32s(items) => join(items),
            Value::I64s(items) => join(items),
            Value::F32s(items) => join(items),
            Value::F64s(items) => join(items),
            Value::List(items) => join_all(items.iter().map(Value::element_text))?,
            Value::Json(serde_json::Value::String(s)) => s.clone(),
            Value::Json(json @ serde_json::Value::Array(_)) => json_element_text(json)?,
            _ => return None,
        };
        Some(text)
    }

    /// Text of one element inside an `in` list. Structured JSON objects
    /// have no token form.
    fn element_text(&self) -> Option<String> {
        match self {
            Value::Json(json) => json_element_text(json),
            Value::List(_) => self.to_list_text(),
            other => Some(other.to_text()),
        }
    }
}

fn join_all(parts: impl Iterator<Item = Option<String>>) -> Option<String> {
    parts
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join(","))
}

fn json_element_text(json: &serde_json::Value) -> Option<String> {
    match json {
        serde_json::Value::Object(_) => None,
        serde_json::Value::Array(items) => join_all(items.iter().map(json_element_text)),
        other => Some(json_text(other)),
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn json_text(json: &serde_json::Value) -> String {
    match json {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(json_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::Texts(v) => f.debug_tuple("Texts").field(v).finish(),
            Value::I32s(v) => f.debug_tuple("I32s").field(v).finish(),
            Value::I64s(v) => f.debug_tuple("I64s").field(v).finish(),
            Value::F32s(v) => f.debug_tuple("F32s").field(v).finish(),
            Value::F64s(v) => f.debug_tuple("F64s").field(v).finish(),
            Value::List(v) => f.debug_tuple("List").field(v).finish(),
            Value::Json(j) => f.debug_tuple("Json").field(j).finish(),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Texts(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Texts(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Value::Texts(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(v: [&str; N]) -> Self {
        Value::Texts(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::I32s(v)
    }
}

impl<const N: usize> From<[i32; N]> for Value {
    fn from(v: [i32; N]) -> Self {
        Value::I32s(v.to_vec())
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::I64s(v)
    }
}

impl<const N: usize> From<[i64; N]> for Value {
    fn from(v: [i64; N]) -> Self {
        Value::I64s(v.to_vec())
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::F32s(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::F64s(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
