// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the resolver crate.
//!
//! This module defines the error types that can occur when parsing variable
//! references or resolving them against AWS. All errors use `thiserror` for
//! proper error handling and conversion.

use thiserror::Error;

/// The main error type for resolution operations.
///
/// This enum represents all possible errors that can occur when parsing a
/// variable reference, dispatching it to a describer, or extracting a key
/// from the described resource. It is marked as `#[non_exhaustive]` to allow
/// for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use awscfg::domain::errors::ResolverError;
///
/// fn resolve_scope(scope: &str) -> Result<String, ResolverError> {
///     Err(ResolverError::UnknownScope {
///         scope: scope.to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// The variable reference could not be parsed.
    #[error("Invalid AWS variable reference '{reference}': {reason}")]
    InvalidReference {
        /// The raw reference that failed to parse
        reference: String,
        /// Why parsing failed
        reason: String,
    },

    /// No describer is registered for the requested scope.
    #[error("No resolver registered for scope '{scope}'")]
    UnknownScope {
        /// The scope that was requested
        scope: String,
    },

    /// The remote describe call failed.
    #[error("Failed to describe {scope} resource '{resource}': {message}")]
    DescribeError {
        /// The scope whose describer failed
        scope: String,
        /// The resource name that was being described
        resource: String,
        /// The error message
        message: String,
        /// The underlying SDK error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The describe call succeeded but returned no matching resource.
    #[error("No {scope} resource found for '{resource}'")]
    ResourceNotFound {
        /// The scope that was queried
        scope: String,
        /// The resource name that was not found
        resource: String,
    },

    /// The requested key is not present in the described resource.
    #[error("Key '{key}' not found in {scope} description of '{resource}'")]
    KeyNotFound {
        /// The scope that was queried
        scope: String,
        /// The resource that was described
        resource: String,
        /// The key path that was missing
        key: String,
    },

    /// The resolved value is an object or list where a scalar is required.
    #[error("Value at '{key}' in {scope} description of '{resource}' is not a scalar")]
    NotScalar {
        /// The scope that was queried
        scope: String,
        /// The resource that was described
        resource: String,
        /// The key path that resolved to a composite value
        key: String,
    },

    /// Failed to parse a configuration document during interpolation.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a configuration document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
