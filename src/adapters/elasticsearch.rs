// SPDX-License-Identifier: MIT OR Apache-2.0

//! Elasticsearch domain describer adapter.
//!
//! This module provides the describer backing the `ess` scope. It calls
//! `DescribeElasticsearchDomain` and exposes the `DomainStatus` section, so
//! references such as `${aws:ess:my-domain:Endpoint}` resolve to the live
//! search-domain endpoint.

use crate::domain::{ResolverError, Result};
use crate::ports::ResourceDescriber;
use async_trait::async_trait;
use aws_sdk_elasticsearch::types::ElasticsearchDomainStatus;
use aws_sdk_elasticsearch::Client;
use serde_json::{json, Map, Value};

/// Resource describer for Elasticsearch domains.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::adapters::ElasticsearchDescriber;
/// use awscfg::ports::ResourceDescriber;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let describer = ElasticsearchDescriber::new(&config);
/// let section = describer.describe("my-domain").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ElasticsearchDescriber {
    /// Elasticsearch service client
    client: Client,
}

impl ElasticsearchDescriber {
    /// Creates a new Elasticsearch describer from a shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ResourceDescriber for ElasticsearchDescriber {
    fn scope(&self) -> &str {
        "ess"
    }

    async fn describe(&self, resource: &str) -> Result<Value> {
        let output = self
            .client
            .describe_elasticsearch_domain()
            .domain_name(resource)
            .send()
            .await
            .map_err(|e| ResolverError::DescribeError {
                scope: "ess".to_string(),
                resource: resource.to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let status = output
            .domain_status()
            .ok_or_else(|| ResolverError::ResourceNotFound {
                scope: "ess".to_string(),
                resource: resource.to_string(),
            })?;

        Ok(section_json(status))
    }
}

/// Converts an `ElasticsearchDomainStatus` into a JSON section keyed by wire names.
///
/// Required response members insert directly; optional members insert only
/// when present.
fn section_json(status: &ElasticsearchDomainStatus) -> Value {
    let mut section = Map::new();

    section.insert("DomainId".to_string(), json!(status.domain_id()));
    section.insert("DomainName".to_string(), json!(status.domain_name()));
    section.insert("ARN".to_string(), json!(status.arn()));
    if let Some(endpoint) = status.endpoint() {
        section.insert("Endpoint".to_string(), json!(endpoint));
    }
    if let Some(version) = status.elasticsearch_version() {
        section.insert("ElasticsearchVersion".to_string(), json!(version));
    }
    if let Some(created) = status.created() {
        section.insert("Created".to_string(), json!(created));
    }
    if let Some(deleted) = status.deleted() {
        section.insert("Deleted".to_string(), json!(deleted));
    }
    if let Some(processing) = status.processing() {
        section.insert("Processing".to_string(), json!(processing));
    }
    if let Some(cluster) = status.elasticsearch_cluster_config() {
        let mut config = Map::new();
        if let Some(instance_type) = cluster.instance_type() {
            config.insert("InstanceType".to_string(), json!(instance_type.as_str()));
        }
        if let Some(count) = cluster.instance_count() {
            config.insert("InstanceCount".to_string(), json!(count));
        }
        if let Some(dedicated) = cluster.dedicated_master_enabled() {
            config.insert("DedicatedMasterEnabled".to_string(), json!(dedicated));
        }
        if let Some(zones) = cluster.zone_awareness_enabled() {
            config.insert("ZoneAwarenessEnabled".to_string(), json!(zones));
        }
        section.insert(
            "ElasticsearchClusterConfig".to_string(),
            Value::Object(config),
        );
    }

    Value::Object(section)
}
