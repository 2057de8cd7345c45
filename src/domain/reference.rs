// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable reference parsing for AWS-backed configuration values.
//!
//! This module provides the `VariableRef` type, the parsed form of an
//! `aws:<scope>:<name>:<key>` variable reference, and the `KeyPath` newtype
//! used to address a (possibly nested) attribute of a described resource.

use crate::domain::errors::{ResolverError, Result};
use std::fmt;
use std::str::FromStr;

/// The prefix that marks a variable reference as AWS-backed.
pub const AWS_PREFIX: &str = "aws";

/// A dotted path addressing an attribute within a described resource.
///
/// Keys use the AWS wire field names, so `StreamARN` addresses the stream
/// ARN of a Kinesis stream and `Endpoint.Address` addresses the endpoint
/// host of an RDS instance. Numeric segments index into lists.
///
/// # Examples
///
/// ```
/// use awscfg::domain::reference::KeyPath;
///
/// let path = KeyPath::from("Endpoint.Address");
/// assert_eq!(path.segments(), &["Endpoint".to_string(), "Address".to_string()]);
/// assert_eq!(path.to_string(), "Endpoint.Address");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Creates a key path from its segments.
    pub fn new(segments: Vec<String>) -> Self {
        KeyPath(segments)
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(s.split('.').map(|seg| seg.to_string()).collect())
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath::from(s.as_str())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A parsed `aws:<scope>:<name>:<key>` variable reference.
///
/// A reference names a scope (which selects the remote describe operation),
/// a resource, and the key to extract from the described resource. It is
/// parsed with `FromStr` and validated strictly: exactly four `:`-separated
/// segments, an `aws` prefix, and a restricted character set per segment.
///
/// # Examples
///
/// ```
/// use awscfg::domain::reference::VariableRef;
///
/// let reference: VariableRef = "aws:kinesis:my-stream:StreamARN".parse().unwrap();
/// assert_eq!(reference.scope(), "kinesis");
/// assert_eq!(reference.name(), "my-stream");
/// assert_eq!(reference.key().to_string(), "StreamARN");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableRef {
    /// Scope selecting the describe operation (e.g. `kinesis`)
    scope: String,
    /// Name of the resource to describe
    name: String,
    /// Key path to extract from the described resource
    key: KeyPath,
}

impl VariableRef {
    /// Creates a reference from its parts without validation.
    pub fn new(scope: impl Into<String>, name: impl Into<String>, key: KeyPath) -> Self {
        VariableRef {
            scope: scope.into(),
            name: name.into(),
            key,
        }
    }

    /// Returns the scope segment.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the resource name segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key path segment.
    pub fn key(&self) -> &KeyPath {
        &self.key
    }

    /// Returns true if the string looks like an AWS variable reference.
    ///
    /// This checks the prefix only; a candidate may still fail to parse.
    /// Non-candidates belong to the host framework and pass through
    /// interpolation untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use awscfg::domain::reference::VariableRef;
    ///
    /// assert!(VariableRef::is_reference("aws:kinesis:my-stream:StreamARN"));
    /// assert!(!VariableRef::is_reference("env:HOME"));
    /// ```
    pub fn is_reference(s: &str) -> bool {
        s.strip_prefix(AWS_PREFIX)
            .is_some_and(|rest| rest.starts_with(':'))
    }
}

impl FromStr for VariableRef {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ResolverError::InvalidReference {
            reference: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 4 {
            return Err(invalid("expected 4 ':'-separated segments"));
        }
        if parts[0] != AWS_PREFIX {
            return Err(invalid("must start with 'aws:'"));
        }

        let scope = parts[1];
        if scope.is_empty() || !scope.chars().all(is_scope_char) {
            return Err(invalid(
                "scope must be non-empty and contain only [a-z0-9_]",
            ));
        }

        let name = parts[2];
        if name.is_empty() || !name.chars().all(is_name_char) {
            return Err(invalid(
                "resource name must be non-empty and contain only [A-Za-z0-9._-]",
            ));
        }

        let key = parts[3];
        if key.is_empty()
            || !key
                .split('.')
                .all(|seg| !seg.is_empty() && seg.chars().all(is_key_char))
        {
            return Err(invalid(
                "key must be a non-empty dotted path of [A-Za-z0-9_-] segments",
            ));
        }

        Ok(VariableRef::new(scope, name, KeyPath::from(key)))
    }
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", AWS_PREFIX, self.scope, self.name, self.key)
    }
}

fn is_scope_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_reference() {
        let reference: VariableRef = "aws:kinesis:my-stream:StreamARN".parse().unwrap();
        assert_eq!(reference.scope(), "kinesis");
        assert_eq!(reference.name(), "my-stream");
        assert_eq!(reference.key().segments(), &["StreamARN".to_string()]);
    }

    #[test]
    fn test_parse_dotted_key() {
        let reference: VariableRef = "aws:rds:my-db:Endpoint.Address".parse().unwrap();
        assert_eq!(
            reference.key().segments(),
            &["Endpoint".to_string(), "Address".to_string()]
        );
    }

    #[test]
    fn test_parse_numeric_key_segment() {
        let reference: VariableRef = "aws:kinesis:my-stream:Shards.0.ShardId".parse().unwrap();
        assert_eq!(reference.key().segments().len(), 3);
        assert_eq!(reference.key().segments()[1], "0");
    }

    #[test]
    fn test_parse_name_with_dots_and_underscores() {
        let reference: VariableRef = "aws:dynamodb:my_table.v2:TableArn".parse().unwrap();
        assert_eq!(reference.name(), "my_table.v2");
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        let result = "aws:kinesis:my-stream".parse::<VariableRef>();
        assert!(matches!(
            result.unwrap_err(),
            ResolverError::InvalidReference { .. }
        ));

        let result = "aws:kinesis:my-stream:Key:extra".parse::<VariableRef>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        let result = "gcp:kinesis:my-stream:StreamARN".parse::<VariableRef>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!("aws::my-stream:StreamARN".parse::<VariableRef>().is_err());
        assert!("aws:kinesis::StreamARN".parse::<VariableRef>().is_err());
        assert!("aws:kinesis:my-stream:".parse::<VariableRef>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_scope_characters() {
        assert!("aws:Kinesis:my-stream:StreamARN"
            .parse::<VariableRef>()
            .is_err());
        assert!("aws:kin esis:my-stream:StreamARN"
            .parse::<VariableRef>()
            .is_err());
    }

    #[test]
    fn test_parse_rejects_empty_key_path_segment() {
        assert!("aws:rds:my-db:Endpoint..Address"
            .parse::<VariableRef>()
            .is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let raw = "aws:ess:my-domain:DomainStatus.Endpoint";
        let reference: VariableRef = raw.parse().unwrap();
        assert_eq!(reference.to_string(), raw);
    }

    #[test]
    fn test_is_reference() {
        assert!(VariableRef::is_reference("aws:kinesis:my-stream:StreamARN"));
        assert!(VariableRef::is_reference("aws:"));
        assert!(!VariableRef::is_reference("awskinesis"));
        assert!(!VariableRef::is_reference("env:HOME"));
        assert!(!VariableRef::is_reference(""));
    }

    #[test]
    fn test_key_path_display() {
        let path = KeyPath::from("Endpoint.Address");
        assert_eq!(path.to_string(), "Endpoint.Address");
    }

    #[test]
    fn test_key_path_single_segment() {
        let path = KeyPath::from("StreamARN");
        assert_eq!(path.segments(), &["StreamARN".to_string()]);
    }

    #[test]
    fn test_variable_ref_equality_and_hash() {
        use std::collections::HashMap;

        let a: VariableRef = "aws:kinesis:s:StreamARN".parse().unwrap();
        let b: VariableRef = "aws:kinesis:s:StreamARN".parse().unwrap();
        let c: VariableRef = "aws:kinesis:s:StreamName".parse().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut map = HashMap::new();
        map.insert(a, "value");
        assert_eq!(map.get(&b), Some(&"value"));
    }
}
