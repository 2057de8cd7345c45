// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource describer trait definition.
//!
//! This module defines the `ResourceDescriber` trait, the port through which
//! the resolver reaches remote infrastructure. Each implementation covers one
//! variable scope (e.g. `kinesis`) and performs the corresponding describe
//! call against AWS.

use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A trait for describing remote resources by name.
///
/// Implementations back a single variable scope and return the top-level
/// section of the describe response as JSON, keyed by the AWS wire field
/// names. For example, the `kinesis` describer returns the contents of the
/// `StreamDescription` section, so a `${aws:kinesis:my-stream:StreamARN}`
/// reference extracts `StreamARN` from it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the resolver can be shared
/// across tasks.
///
/// # Examples
///
/// ```rust
/// use awscfg::ports::ResourceDescriber;
/// use awscfg::domain::Result;
/// use async_trait::async_trait;
/// use serde_json::{json, Value};
///
/// struct StaticDescriber;
///
/// #[async_trait]
/// impl ResourceDescriber for StaticDescriber {
///     fn scope(&self) -> &str {
///         "static"
///     }
///
///     async fn describe(&self, _resource: &str) -> Result<Value> {
///         Ok(json!({"Name": "fixed"}))
///     }
/// }
/// ```
#[async_trait]
pub trait ResourceDescriber: Send + Sync {
    /// Returns the variable scope this describer serves.
    ///
    /// The scope is the second segment of a variable reference
    /// (`aws:<scope>:...`) and is used to route references to describers.
    /// It should be a short lowercase identifier like `kinesis` or `rds`.
    fn scope(&self) -> &str;

    /// Describes the named resource and returns its attribute section.
    ///
    /// Returns the top-level section of the describe response as a JSON
    /// value. List-shaped sections (such as RDS's `DBInstances`) are
    /// returned as JSON arrays; the extraction step enters the first
    /// element.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource name from the variable reference
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The describe section
    /// * `Err(ResolverError)` - The call failed or the resource is missing
    async fn describe(&self, resource: &str) -> Result<Value>;
}
