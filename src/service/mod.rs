// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolver and its configuration.
//!
//! This module provides the main `AwsResolver` service that routes variable
//! references to describers and performs document interpolation, along with
//! the AWS connection settings and an optional blocking facade.

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod resolver;
pub mod settings;

#[cfg(feature = "blocking")]
pub use blocking::BlockingResolver;
pub use resolver::{AwsResolver, AwsResolverBuilder};
pub use settings::AwsSettings;
