//! Arguments of a logging call
//!
//! A call takes any number of arguments. Primitive values are rendered with
//! their display form, while composite values (objects, arrays, null) are
//! kept as structured JSON and pretty printed at render time.

use super::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Text(String),
    Structured(Value),
}

impl LogArg {
    /// Serialize any value into a structured argument.
    ///
    /// Values that serialize to a JSON primitive become [`LogArg::Text`].
    ///
    /// # Errors
    ///
    /// Returns a JSON error if `value` cannot be serialized.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, LogArg::Structured(_))
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Text(s) => f.write_str(s),
            LogArg::Structured(v) => write!(f, "{}", v),
        }
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => LogArg::Text(s),
            Value::Bool(b) => LogArg::Text(b.to_string()),
            Value::Number(n) => LogArg::Text(n.to_string()),
            other => LogArg::Structured(other),
        }
    }
}

impl From<&Value> for LogArg {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

impl From<&LogArg> for LogArg {
    fn from(arg: &LogArg) -> Self {
        arg.clone()
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Text(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Text(s.clone())
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Text(s.to_string())
    }
}

impl From<char> for LogArg {
    fn from(c: char) -> Self {
        LogArg::Text(c.to_string())
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Text(b.to_string())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogArg {
                fn from(value: $ty) -> Self {
                    LogArg::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
