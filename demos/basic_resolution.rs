// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic resolution example for the AWS configuration resolver.
//!
//! This example demonstrates:
//! - Building a resolver with the default describers
//! - Resolving a single reference
//! - Interpolating a YAML document with embedded references
//!
//! To run this example:
//! ```bash
//! # Point the resolver at real infrastructure
//! export AWS_PROFILE="my-profile"
//! export AWS_REGION="us-east-1"
//!
//! # Run the example (the stream and database must exist)
//! cargo run --example basic_resolution
//! ```

use awscfg::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== AWS Configuration Resolver: Basic Resolution ===\n");

    // Build a resolver with every feature-enabled describer, using the
    // standard AWS environment for credentials and region
    let resolver = AwsResolver::from_defaults(&AwsSettings::new()).await;
    println!("Resolver ready for scopes: {:?}\n", resolver.scopes());

    // Example 1: Resolve a single reference
    println!("--- Example 1: Single Reference ---");
    match resolver.resolve_str("aws:kinesis:my-stream:StreamARN").await {
        Ok(value) => println!("✓ Stream ARN: {}", value),
        Err(e) => println!("✗ Resolution failed: {}", e),
    }

    // Example 2: Interpolate a whole YAML document
    println!("\n--- Example 2: YAML Document ---");
    let document = "\
database:
  host: ${aws:rds:my-db:Endpoint.Address}
  port: ${aws:rds:my-db:Endpoint.Port}
stream:
  arn: ${aws:kinesis:my-stream:StreamARN}
stage: ${opt:stage}
";

    match resolver.interpolate_yaml_str(document).await {
        Ok(config) => {
            println!("✓ Interpolated configuration:");
            println!("{}", serde_yaml::to_string(&config)?);
        }
        Err(e) => println!("✗ Interpolation failed: {}", e),
    }

    Ok(())
}
