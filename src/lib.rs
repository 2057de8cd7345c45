// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS-backed configuration variable resolution.
//!
//! This crate resolves configuration variables of the form
//! `${aws:<scope>:<resource-name>:<key>}` against live AWS infrastructure at
//! configuration-load time. The scope selects a remote describe operation,
//! the resource name selects the resource, and the key addresses an
//! attribute of the describe result by its AWS wire name.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`VariableRef`, `ResolvedValue`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ResourceDescriber`)
//! - **Adapters**: Describer implementations for specific AWS services
//! - **Service**: The resolver that routes references and interpolates documents
//!
//! # Supported scopes
//!
//! - `kinesis`: Kinesis streams via `DescribeStream` (`StreamDescription`)
//! - `ess`: Elasticsearch domains via `DescribeElasticsearchDomain` (`DomainStatus`)
//! - `rds`: RDS instances via `DescribeDBInstances` (`DBInstances`, first match)
//! - `dynamodb`: DynamoDB tables via `DescribeTable` (`Table`)
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document interpolation (default)
//! - `kinesis`, `ess`, `rds`, `dynamodb`: Enable the built-in scopes (default)
//! - `blocking`: Enable the synchronous resolver facade
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use awscfg::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let resolver = AwsResolver::from_defaults(&AwsSettings::new()).await;
//! let arn = resolver.resolve_str("aws:kinesis:my-stream:StreamARN").await?;
//! println!("{}", arn);
//! # Ok(())
//! # }
//! ```
//!
//! Variables not carrying the `aws:` prefix pass through interpolation
//! untouched; they belong to the host configuration framework.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{KeyPath, ResolvedValue, ResolverError, Result, VariableRef};
    pub use crate::ports::ResourceDescriber;
    pub use crate::service::{AwsResolver, AwsResolverBuilder, AwsSettings};

    // Re-export adapters based on feature flags
    #[cfg(feature = "dynamodb")]
    pub use crate::adapters::DynamoDbDescriber;
    #[cfg(feature = "ess")]
    pub use crate::adapters::ElasticsearchDescriber;
    #[cfg(feature = "kinesis")]
    pub use crate::adapters::KinesisDescriber;
    #[cfg(feature = "rds")]
    pub use crate::adapters::RdsDescriber;
    #[cfg(feature = "blocking")]
    pub use crate::service::BlockingResolver;
}
