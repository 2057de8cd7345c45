// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kinesis resource describer adapter.
//!
//! This module provides the describer backing the `kinesis` scope. It calls
//! Kinesis `DescribeStream` and exposes the `StreamDescription` section, so
//! references such as `${aws:kinesis:my-stream:StreamARN}` resolve against
//! the live stream.

use crate::domain::{ResolverError, Result};
use crate::ports::ResourceDescriber;
use async_trait::async_trait;
use aws_sdk_kinesis::types::StreamDescription;
use aws_sdk_kinesis::Client;
use serde_json::{json, Map, Value};

/// Resource describer for Kinesis streams.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::adapters::KinesisDescriber;
/// use awscfg::ports::ResourceDescriber;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let describer = KinesisDescriber::new(&config);
/// let section = describer.describe("my-stream").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct KinesisDescriber {
    /// Kinesis client
    client: Client,
}

impl KinesisDescriber {
    /// Creates a new Kinesis describer from a shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ResourceDescriber for KinesisDescriber {
    fn scope(&self) -> &str {
        "kinesis"
    }

    async fn describe(&self, resource: &str) -> Result<Value> {
        let output = self
            .client
            .describe_stream()
            .stream_name(resource)
            .send()
            .await
            .map_err(|e| ResolverError::DescribeError {
                scope: "kinesis".to_string(),
                resource: resource.to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let description =
            output
                .stream_description()
                .ok_or_else(|| ResolverError::ResourceNotFound {
                    scope: "kinesis".to_string(),
                    resource: resource.to_string(),
                })?;

        Ok(section_json(description))
    }
}

/// Converts a `StreamDescription` into a JSON section keyed by wire names.
///
/// Required response members insert directly; optional members insert only
/// when present.
fn section_json(description: &StreamDescription) -> Value {
    let mut section = Map::new();

    section.insert("StreamName".to_string(), json!(description.stream_name()));
    section.insert("StreamARN".to_string(), json!(description.stream_arn()));
    section.insert(
        "StreamStatus".to_string(),
        json!(description.stream_status().as_str()),
    );
    section.insert(
        "RetentionPeriodHours".to_string(),
        json!(description.retention_period_hours()),
    );
    section.insert(
        "HasMoreShards".to_string(),
        json!(description.has_more_shards()),
    );
    let created = description.stream_creation_timestamp();
    section.insert("StreamCreationTimestamp".to_string(), json!(created.secs()));
    if let Some(encryption) = description.encryption_type() {
        section.insert("EncryptionType".to_string(), json!(encryption.as_str()));
    }
    if let Some(key_id) = description.key_id() {
        section.insert("KeyId".to_string(), json!(key_id));
    }

    let shards: Vec<Value> = description.shards().iter().map(shard_json).collect();
    if !shards.is_empty() {
        section.insert("Shards".to_string(), Value::Array(shards));
    }

    Value::Object(section)
}

fn shard_json(shard: &aws_sdk_kinesis::types::Shard) -> Value {
    let mut entry = Map::new();

    entry.insert("ShardId".to_string(), json!(shard.shard_id()));
    if let Some(parent) = shard.parent_shard_id() {
        entry.insert("ParentShardId".to_string(), json!(parent));
    }

    if let Some(range) = shard.hash_key_range() {
        entry.insert(
            "HashKeyRange".to_string(),
            json!({
                "StartingHashKey": range.starting_hash_key(),
                "EndingHashKey": range.ending_hash_key(),
            }),
        );
    }

    if let Some(numbers) = shard.sequence_number_range() {
        let mut sequence = Map::new();
        sequence.insert(
            "StartingSequenceNumber".to_string(),
            json!(numbers.starting_sequence_number()),
        );
        if let Some(end) = numbers.ending_sequence_number() {
            sequence.insert("EndingSequenceNumber".to_string(), json!(end));
        }
        entry.insert("SequenceNumberRange".to_string(), Value::Object(sequence));
    }

    Value::Object(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_kinesis::types::{HashKeyRange, SequenceNumberRange, Shard, StreamStatus};

    #[test]
    fn test_kinesis_describer_scope() {
        let config = aws_config::SdkConfig::builder()
            .behavior_version(aws_config::BehaviorVersion::latest())
            .build();
        let describer = KinesisDescriber::new(&config);
        assert_eq!(describer.scope(), "kinesis");
    }

    #[test]
    fn test_section_json_wire_names() {
        let shard = Shard::builder()
            .shard_id("shardId-000000000000")
            .hash_key_range(
                HashKeyRange::builder()
                    .starting_hash_key("0")
                    .ending_hash_key("340282366920938463463374607431768211455")
                    .build()
                    .unwrap(),
            )
            .sequence_number_range(
                SequenceNumberRange::builder()
                    .starting_sequence_number("49579844037727833703303046")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let description = StreamDescription::builder()
            .stream_name("events")
            .stream_arn("arn:aws:kinesis:us-east-1:123:stream/events")
            .stream_status(StreamStatus::Active)
            .retention_period_hours(24)
            .has_more_shards(false)
            .shards(shard)
            .build()
            .unwrap();

        let section = section_json(&description);
        assert_eq!(section["StreamName"], "events");
        assert_eq!(
            section["StreamARN"],
            "arn:aws:kinesis:us-east-1:123:stream/events"
        );
        assert_eq!(section["StreamStatus"], "ACTIVE");
        assert_eq!(section["RetentionPeriodHours"], 24);
        assert_eq!(section["HasMoreShards"], false);
        assert_eq!(section["Shards"][0]["ShardId"], "shardId-000000000000");
        assert_eq!(section["Shards"][0]["HashKeyRange"]["StartingHashKey"], "0");
        assert_eq!(
            section["Shards"][0]["SequenceNumberRange"]["StartingSequenceNumber"],
            "49579844037727833703303046"
        );
        // Optional members stay out of the section when absent
        assert!(section.get("EncryptionType").is_none());
        assert!(section.get("StreamCreationTimestamp").is_none());
    }
}
