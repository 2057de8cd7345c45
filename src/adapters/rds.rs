// SPDX-License-Identifier: MIT OR Apache-2.0

//! RDS instance describer adapter.
//!
//! This module provides the describer backing the `rds` scope. It calls
//! `DescribeDBInstances` filtered by instance identifier and exposes the
//! `DBInstances` section as a list; key extraction enters the first
//! matching instance, so `${aws:rds:my-db:Endpoint.Address}` resolves to
//! the instance endpoint host.

use crate::domain::{ResolverError, Result};
use crate::ports::ResourceDescriber;
use async_trait::async_trait;
use aws_sdk_rds::types::DbInstance;
use aws_sdk_rds::Client;
use serde_json::{json, Map, Value};

/// Resource describer for RDS database instances.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::adapters::RdsDescriber;
/// use awscfg::ports::ResourceDescriber;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let describer = RdsDescriber::new(&config);
/// let section = describer.describe("my-db").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RdsDescriber {
    /// RDS client
    client: Client,
}

impl RdsDescriber {
    /// Creates a new RDS describer from a shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ResourceDescriber for RdsDescriber {
    fn scope(&self) -> &str {
        "rds"
    }

    async fn describe(&self, resource: &str) -> Result<Value> {
        let output = self
            .client
            .describe_db_instances()
            .db_instance_identifier(resource)
            .send()
            .await
            .map_err(|e| ResolverError::DescribeError {
                scope: "rds".to_string(),
                resource: resource.to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let instances: Vec<Value> = output.db_instances().iter().map(instance_json).collect();
        Ok(Value::Array(instances))
    }
}

/// Converts a `DbInstance` into a JSON entry keyed by wire names.
fn instance_json(instance: &DbInstance) -> Value {
    let mut entry = Map::new();

    if let Some(id) = instance.db_instance_identifier() {
        entry.insert("DBInstanceIdentifier".to_string(), json!(id));
    }
    if let Some(arn) = instance.db_instance_arn() {
        entry.insert("DBInstanceArn".to_string(), json!(arn));
    }
    if let Some(class) = instance.db_instance_class() {
        entry.insert("DBInstanceClass".to_string(), json!(class));
    }
    if let Some(status) = instance.db_instance_status() {
        entry.insert("DBInstanceStatus".to_string(), json!(status));
    }
    if let Some(engine) = instance.engine() {
        entry.insert("Engine".to_string(), json!(engine));
    }
    if let Some(version) = instance.engine_version() {
        entry.insert("EngineVersion".to_string(), json!(version));
    }
    if let Some(name) = instance.db_name() {
        entry.insert("DBName".to_string(), json!(name));
    }
    if let Some(user) = instance.master_username() {
        entry.insert("MasterUsername".to_string(), json!(user));
    }
    if let Some(storage) = instance.allocated_storage() {
        entry.insert("AllocatedStorage".to_string(), json!(storage));
    }
    if let Some(storage_type) = instance.storage_type() {
        entry.insert("StorageType".to_string(), json!(storage_type));
    }
    if let Some(zone) = instance.availability_zone() {
        entry.insert("AvailabilityZone".to_string(), json!(zone));
    }
    if let Some(multi_az) = instance.multi_az() {
        entry.insert("MultiAZ".to_string(), json!(multi_az));
    }
    if let Some(public) = instance.publicly_accessible() {
        entry.insert("PubliclyAccessible".to_string(), json!(public));
    }
    if let Some(endpoint) = instance.endpoint() {
        let mut details = Map::new();
        if let Some(address) = endpoint.address() {
            details.insert("Address".to_string(), json!(address));
        }
        if let Some(port) = endpoint.port() {
            details.insert("Port".to_string(), json!(port));
        }
        if let Some(zone_id) = endpoint.hosted_zone_id() {
            details.insert("HostedZoneId".to_string(), json!(zone_id));
        }
        entry.insert("Endpoint".to_string(), Value::Object(details));
    }

    Value::Object(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rds::types::Endpoint;

    #[test]
    fn test_rds_describer_scope() {
        let config = aws_config::SdkConfig::builder()
            .behavior_version(aws_config::BehaviorVersion::latest())
            .build();
        let describer = RdsDescriber::new(&config);
        assert_eq!(describer.scope(), "rds");
    }

    #[test]
    fn test_instance_json_wire_names() {
        let instance = DbInstance::builder()
            .db_instance_identifier("my-db")
            .engine("postgres")
            .multi_az(false)
            .endpoint(
                Endpoint::builder()
                    .address("my-db.abc123.us-east-1.rds.amazonaws.com")
                    .port(5432)
                    .build(),
            )
            .build();

        let entry = instance_json(&instance);
        assert_eq!(entry["DBInstanceIdentifier"], "my-db");
        assert_eq!(entry["Engine"], "postgres");
        assert_eq!(entry["MultiAZ"], false);
        assert_eq!(
            entry["Endpoint"]["Address"],
            "my-db.abc123.us-east-1.rds.amazonaws.com"
        );
        assert_eq!(entry["Endpoint"]["Port"], 5432);
    }

    #[test]
    fn test_instance_json_omits_absent_fields() {
        let instance = DbInstance::builder().db_instance_identifier("my-db").build();
        let entry = instance_json(&instance);
        assert!(entry.get("Endpoint").is_none());
        assert!(entry.get("EngineVersion").is_none());
    }
}
