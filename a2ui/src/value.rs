//! Value primitives shared by component payloads

use serde::{Deserialize, Serialize};

/// A single metric value - integer, float, or text
///
/// Untagged on the wire so a card value serializes as the bare JSON
/// scalar (`312`, `4.5`, `"Python"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One point of a time-indexed series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Period label, e.g. "2024-06"
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A named series for side-by-side comparison charts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// One slice of a categorical distribution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
}

impl CategoryShare {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One row of a table, cells aligned with the table's columns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow(pub Vec<ScalarValue>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_serializes_bare() {
        assert_eq!(serde_json::to_string(&ScalarValue::Int(312)).unwrap(), "312");
        assert_eq!(serde_json::to_string(&ScalarValue::Float(4.5)).unwrap(), "4.5");
        assert_eq!(
            serde_json::to_string(&ScalarValue::Text("Python".to_string())).unwrap(),
            "\"Python\""
        );
    }

    #[test]
    fn test_scalar_deserializes_by_shape() {
        let v: ScalarValue = serde_json::from_str("18").unwrap();
        assert_eq!(v, ScalarValue::Int(18));

        let v: ScalarValue = serde_json::from_str("0.25").unwrap();
        assert_eq!(v, ScalarValue::Float(0.25));

        let v: ScalarValue = serde_json::from_str("\"Rust\"").unwrap();
        assert_eq!(v, ScalarValue::Text("Rust".to_string()));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(ScalarValue::Int(42).to_string(), "42");
        assert_eq!(ScalarValue::from("Python").to_string(), "Python");
    }

    #[test]
    fn test_table_row_transparent() {
        let row = TableRow(vec![ScalarValue::from("dynQR"), ScalarValue::Int(124)]);
        assert_eq!(serde_json::to_string(&row).unwrap(), "[\"dynQR\",124]");
    }
}
