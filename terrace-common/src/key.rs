use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A grouping key produced by a record accessor.
///
/// Covers the field types the grouping pipeline recognizes. Numeric keys
/// compare and hash by canonical bit pattern, so equal values always land in
/// the same group regardless of how they were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Number(f64),
    // dates come before strings so untagged deserialization tries the
    // ISO-8601 form first
    Date(NaiveDate),
    Str(String),
    Null,
}

impl GroupKey {
    /// Canonical string form, used for object-group identity.
    ///
    /// Integral numbers render without a fractional part so that `1901.0`
    /// and `1901` name the same group. Dates render ISO-8601.
    pub fn key_string(&self) -> String {
        match self {
            GroupKey::Number(v) => format_number(*v),
            GroupKey::Str(s) => s.clone(),
            GroupKey::Date(d) => d.to_string(),
            GroupKey::Null => "null".to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GroupKey::Null)
    }
}

// i64 can hold every integer-valued f64 below 2^53 exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if v == v.trunc() && v.abs() < MAX_EXACT_INT {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_string())
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GroupKey::Number(a), GroupKey::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (GroupKey::Str(a), GroupKey::Str(b)) => a == b,
            (GroupKey::Date(a), GroupKey::Date(b)) => a == b,
            (GroupKey::Null, GroupKey::Null) => true,
            _ => false,
        }
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            GroupKey::Number(v) => OrderedFloat(*v).hash(state),
            GroupKey::Str(s) => s.hash(state),
            GroupKey::Date(d) => d.hash(state),
            GroupKey::Null => {}
        }
    }
}

impl From<f64> for GroupKey {
    fn from(v: f64) -> Self {
        GroupKey::Number(v)
    }
}

impl From<f32> for GroupKey {
    fn from(v: f32) -> Self {
        GroupKey::Number(v as f64)
    }
}

impl From<i32> for GroupKey {
    fn from(v: i32) -> Self {
        GroupKey::Number(v as f64)
    }
}

impl From<i64> for GroupKey {
    fn from(v: i64) -> Self {
        GroupKey::Number(v as f64)
    }
}

impl From<u32> for GroupKey {
    fn from(v: u32) -> Self {
        GroupKey::Number(v as f64)
    }
}

impl From<&str> for GroupKey {
    fn from(v: &str) -> Self {
        GroupKey::Str(v.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(v: String) -> Self {
        GroupKey::Str(v)
    }
}

impl From<NaiveDate> for GroupKey {
    fn from(v: NaiveDate) -> Self {
        GroupKey::Date(v)
    }
}

impl<T: Into<GroupKey>> From<Option<T>> for GroupKey {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => GroupKey::Null,
        }
    }
}
