// SPDX-License-Identifier: MIT OR Apache-2.0

//! DynamoDB table describer adapter.
//!
//! This module provides the describer backing the `dynamodb` scope. It calls
//! `DescribeTable` and exposes the `Table` section, so references such as
//! `${aws:dynamodb:my-table:TableArn}` resolve against the live table.

use crate::domain::{ResolverError, Result};
use crate::ports::ResourceDescriber;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::TableDescription;
use aws_sdk_dynamodb::Client;
use serde_json::{json, Map, Value};

/// Resource describer for DynamoDB tables.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::adapters::DynamoDbDescriber;
/// use awscfg::ports::ResourceDescriber;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let describer = DynamoDbDescriber::new(&config);
/// let section = describer.describe("my-table").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DynamoDbDescriber {
    /// DynamoDB client
    client: Client,
}

impl DynamoDbDescriber {
    /// Creates a new DynamoDB describer from a shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ResourceDescriber for DynamoDbDescriber {
    fn scope(&self) -> &str {
        "dynamodb"
    }

    async fn describe(&self, resource: &str) -> Result<Value> {
        let output = self
            .client
            .describe_table()
            .table_name(resource)
            .send()
            .await
            .map_err(|e| ResolverError::DescribeError {
                scope: "dynamodb".to_string(),
                resource: resource.to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let table = output
            .table()
            .ok_or_else(|| ResolverError::ResourceNotFound {
                scope: "dynamodb".to_string(),
                resource: resource.to_string(),
            })?;

        Ok(section_json(table))
    }
}

/// Converts a `TableDescription` into a JSON section keyed by wire names.
fn section_json(table: &TableDescription) -> Value {
    let mut section = Map::new();

    if let Some(name) = table.table_name() {
        section.insert("TableName".to_string(), json!(name));
    }
    if let Some(arn) = table.table_arn() {
        section.insert("TableArn".to_string(), json!(arn));
    }
    if let Some(id) = table.table_id() {
        section.insert("TableId".to_string(), json!(id));
    }
    if let Some(status) = table.table_status() {
        section.insert("TableStatus".to_string(), json!(status.as_str()));
    }
    if let Some(count) = table.item_count() {
        section.insert("ItemCount".to_string(), json!(count));
    }
    if let Some(bytes) = table.table_size_bytes() {
        section.insert("TableSizeBytes".to_string(), json!(bytes));
    }
    if let Some(created) = table.creation_date_time() {
        section.insert("CreationDateTime".to_string(), json!(created.secs()));
    }

    let key_schema: Vec<Value> = table
        .key_schema()
        .iter()
        .map(|element| {
            json!({
                "AttributeName": element.attribute_name(),
                "KeyType": element.key_type().as_str(),
            })
        })
        .collect();
    if !key_schema.is_empty() {
        section.insert("KeySchema".to_string(), Value::Array(key_schema));
    }

    if let Some(throughput) = table.provisioned_throughput() {
        let mut units = Map::new();
        if let Some(read) = throughput.read_capacity_units() {
            units.insert("ReadCapacityUnits".to_string(), json!(read));
        }
        if let Some(write) = throughput.write_capacity_units() {
            units.insert("WriteCapacityUnits".to_string(), json!(write));
        }
        section.insert("ProvisionedThroughput".to_string(), Value::Object(units));
    }

    Value::Object(section)
}
