//! Generic tree access over a parsed document.
//!
//! The typed parser depends on nothing beyond this trait, so any tree that can
//! answer key, index and scalar lookups can feed it.

/// Read-only view of one node in a document tree.
///
/// Explicit `null` values count as absent fields.
pub trait DocumentNode {
    /// Child of a mapping node
    fn field(&self, key: &str) -> Option<&Self>;

    /// Length of a sequence node; `None` for anything else
    fn array_len(&self) -> Option<usize>;

    fn element(&self, index: usize) -> Option<&Self>;

    fn scalar_str(&self) -> Option<&str>;

    /// Integer value; integral floats such as `35.0` are accepted
    fn scalar_int(&self) -> Option<i64>;

    fn scalar_bool(&self) -> Option<bool>;

    /// Name of the node's type, for diagnostics
    fn type_name(&self) -> &'static str;
}

/// Whole numbers beyond the i64 range saturate, so bound checks still see them
fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

fn saturated(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl DocumentNode for serde_json::Value {
    fn field(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key).filter(|value| !value.is_null())
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn scalar_str(&self) -> Option<&str> {
        self.as_str()
    }

    fn scalar_int(&self) -> Option<i64> {
        match self {
            serde_json::Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_u64().map(saturated))
                .or_else(|| number.as_f64().and_then(integral)),
            _ => None,
        }
    }

    fn scalar_bool(&self) -> Option<bool> {
        self.as_bool()
    }

    fn type_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

#[cfg(feature = "yaml-support")]
impl DocumentNode for serde_yaml::Value {
    fn field(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?.get(key).filter(|value| !value.is_null())
    }

    fn array_len(&self) -> Option<usize> {
        self.as_sequence().map(Vec::len)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_sequence()?.get(index)
    }

    fn scalar_str(&self) -> Option<&str> {
        self.as_str()
    }

    fn scalar_int(&self) -> Option<i64> {
        self.as_i64()
            .or_else(|| self.as_u64().map(saturated))
            .or_else(|| self.as_f64().and_then(integral))
    }

    fn scalar_bool(&self) -> Option<bool> {
        self.as_bool()
    }

    fn type_name(&self) -> &'static str {
        match self {
            serde_yaml::Value::Null => "null",
            serde_yaml::Value::Bool(_) => "boolean",
            serde_yaml::Value::Number(_) => "number",
            serde_yaml::Value::String(_) => "string",
            serde_yaml::Value::Sequence(_) => "array",
            serde_yaml::Value::Mapping(_) => "object",
            serde_yaml::Value::Tagged(_) => "tagged",
        }
    }
}
