// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved value type and key-path extraction.
//!
//! This module provides the `ResolvedValue` type, which wraps the JSON value
//! extracted from a described resource, and the extraction routine that
//! walks a `KeyPath` through a describe section.

use crate::domain::errors::{ResolverError, Result};
use crate::domain::reference::KeyPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A value resolved from a described AWS resource.
///
/// `ResolvedValue` wraps the JSON value found at a reference's key path and
/// provides accessors for the scalar types that commonly appear in describe
/// output. `render` produces the string form used for in-string
/// substitution; composite values (objects, lists) have no string form and
/// can only be spliced into structured documents.
///
/// # Examples
///
/// ```
/// use awscfg::domain::value::ResolvedValue;
/// use serde_json::json;
///
/// let value = ResolvedValue::new(json!("arn:aws:kinesis:us-east-1:123:stream/s"));
/// assert_eq!(value.as_str(), Some("arn:aws:kinesis:us-east-1:123:stream/s"));
///
/// let value = ResolvedValue::new(json!(24));
/// assert_eq!(value.render(), Some("24".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedValue(Value);

impl ResolvedValue {
    /// Creates a new `ResolvedValue` from a JSON value.
    pub fn new(value: Value) -> Self {
        ResolvedValue(value)
    }

    /// Returns the underlying JSON value.
    pub fn json(&self) -> &Value {
        &self.0
    }

    /// Converts the value into its underlying JSON value.
    pub fn into_json(self) -> Value {
        self.0
    }

    /// Returns true if the value is a string, number, or boolean.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.0,
            Value::String(_) | Value::Number(_) | Value::Bool(_)
        )
    }

    /// Returns the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Returns the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        self.0.as_bool()
    }

    /// Returns the value as a signed integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Returns the value as a float, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Renders the value as a configuration string.
    ///
    /// Strings render without quotes; numbers and booleans render in their
    /// canonical form. Returns `None` for objects, lists, and null, which
    /// have no in-string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use awscfg::domain::value::ResolvedValue;
    /// use serde_json::json;
    ///
    /// assert_eq!(ResolvedValue::new(json!("host")).render(), Some("host".to_string()));
    /// assert_eq!(ResolvedValue::new(json!(true)).render(), Some("true".to_string()));
    /// assert_eq!(ResolvedValue::new(json!({"a": 1})).render(), None);
    /// ```
    pub fn render(&self) -> Option<String> {
        match &self.0 {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for ResolvedValue {
    fn from(value: Value) -> Self {
        ResolvedValue(value)
    }
}

impl From<ResolvedValue> for Value {
    fn from(value: ResolvedValue) -> Self {
        value.0
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Extracts the value at `key` from a describe section.
///
/// The section is the top-level portion of a describe response (e.g. the
/// `StreamDescription` of a Kinesis `DescribeStream` call). A list section
/// is entered at its first element, matching the behavior of describe calls
/// that return a filtered list such as RDS `DescribeDBInstances`; an empty
/// list means the resource does not exist. Within the section, object
/// segments address fields and numeric segments index lists. A missing or
/// null terminal value is an error.
///
/// # Examples
///
/// ```
/// use awscfg::domain::reference::KeyPath;
/// use awscfg::domain::value::extract;
/// use serde_json::json;
///
/// let section = json!({"Endpoint": {"Address": "db.example.com"}});
/// let value = extract("rds", "my-db", &section, &KeyPath::from("Endpoint.Address")).unwrap();
/// assert_eq!(value.as_str(), Some("db.example.com"));
/// ```
pub fn extract(scope: &str, resource: &str, section: &Value, key: &KeyPath) -> Result<ResolvedValue> {
    let not_found = || ResolverError::KeyNotFound {
        scope: scope.to_string(),
        resource: resource.to_string(),
        key: key.to_string(),
    };

    let mut current = match section {
        Value::Array(items) => items.first().ok_or_else(|| ResolverError::ResourceNotFound {
            scope: scope.to_string(),
            resource: resource.to_string(),
        })?,
        other => other,
    };

    for segment in key.segments() {
        current = match current {
            Value::Object(map) => map.get(segment).ok_or_else(not_found)?,
            Value::Array(items) => {
                let index: usize = segment.parse().map_err(|_| not_found())?;
                items.get(index).ok_or_else(not_found)?
            }
            _ => return Err(not_found()),
        };
    }

    if current.is_null() {
        return Err(not_found());
    }

    Ok(ResolvedValue::new(current.clone()))
}
