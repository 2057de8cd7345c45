// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core resolution types and logic.
//!
//! This module contains the core domain types for the resolver crate: the
//! parsed variable reference, the resolved value with key-path extraction,
//! and the error types. It is independent of the AWS SDK and of any host
//! configuration framework.

pub mod errors;
pub mod reference;
pub mod value;

// Re-export commonly used types
pub use errors::{ResolverError, Result};
pub use reference::{KeyPath, VariableRef, AWS_PREFIX};
pub use value::ResolvedValue;
