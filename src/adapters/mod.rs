// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the AWS-backed describer implementations.
//!
//! This module contains concrete implementations of the `ResourceDescriber`
//! trait, one per supported variable scope. Each adapter owns a typed AWS
//! SDK client and converts the describe response into a JSON section keyed
//! by the AWS wire field names.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
#[cfg(feature = "ess")]
pub mod elasticsearch;
#[cfg(feature = "kinesis")]
pub mod kinesis;
#[cfg(feature = "rds")]
pub mod rds;

// Re-export adapters based on feature flags
#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbDescriber;
#[cfg(feature = "ess")]
pub use elasticsearch::ElasticsearchDescriber;
#[cfg(feature = "kinesis")]
pub use kinesis::KinesisDescriber;
#[cfg(feature = "rds")]
pub use rds::RdsDescriber;
