// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking facade over the async resolver.
//!
//! This module provides `BlockingResolver`, a synchronous wrapper for hosts
//! that load configuration outside an async runtime. It owns a
//! single-threaded tokio runtime and blocks on the async resolver calls.

use crate::domain::{ResolvedValue, Result};
use crate::service::{AwsResolver, AwsSettings};
use tokio::runtime::Runtime;

#[cfg(feature = "yaml")]
use serde_yaml::Value as YamlValue;

/// Synchronous wrapper around `AwsResolver`.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::service::{AwsSettings, BlockingResolver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = BlockingResolver::from_defaults(&AwsSettings::new())?;
/// let value = resolver.resolve_str("aws:kinesis:my-stream:StreamARN")?;
/// # Ok(())
/// # }
/// ```
pub struct BlockingResolver {
    /// The wrapped async resolver
    inner: AwsResolver,
    /// Runtime used to block on resolver calls
    runtime: Runtime,
}

impl BlockingResolver {
    /// Wraps an existing resolver in a blocking facade.
    pub fn new(inner: AwsResolver) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Creates a blocking resolver with every feature-enabled describer.
    pub fn from_defaults(settings: &AwsSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let inner = runtime.block_on(AwsResolver::from_defaults(settings));
        Ok(Self { inner, runtime })
    }

    /// Returns the wrapped async resolver.
    pub fn inner(&self) -> &AwsResolver {
        &self.inner
    }

    /// Parses and resolves a raw reference, blocking until complete.
    pub fn resolve_str(&self, raw: &str) -> Result<ResolvedValue> {
        self.runtime.block_on(self.inner.resolve_str(raw))
    }

    /// Substitutes every `${aws:...}` token in a string, blocking until complete.
    pub fn interpolate(&self, text: &str) -> Result<String> {
        self.runtime.block_on(self.inner.interpolate(text))
    }

    /// Parses a YAML document and substitutes AWS tokens, blocking until complete.
    #[cfg(feature = "yaml")]
    pub fn interpolate_yaml_str(&self, text: &str) -> Result<YamlValue> {
        self.runtime.block_on(self.inner.interpolate_yaml_str(text))
    }

    /// Reads a YAML file and substitutes AWS tokens, blocking until complete.
    #[cfg(feature = "yaml")]
    pub fn interpolate_yaml_file(&self, path: impl AsRef<std::path::Path>) -> Result<YamlValue> {
        self.runtime
            .block_on(self.inner.interpolate_yaml_file(path))
    }
}
