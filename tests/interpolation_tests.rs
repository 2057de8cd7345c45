// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for string and YAML document interpolation.

mod common;

use awscfg::domain::ResolverError;
use awscfg::service::AwsResolver;
use common::MockDescriber;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn resolver() -> AwsResolver {
    AwsResolver::builder()
        .with_describer(Box::new(MockDescriber::describing(
            "kinesis",
            json!({
                "StreamARN": "arn:aws:kinesis:us-east-1:123456789012:stream/events",
                "RetentionPeriodHours": 24,
                "HasMoreShards": false
            }),
        )))
        .with_describer(Box::new(MockDescriber::describing(
            "rds",
            json!([{
                "Endpoint": {"Address": "db.example.com", "Port": 5432}
            }]),
        )))
        .build()
}

#[tokio::test]
async fn test_interpolate_embedded_tokens() {
    let output = resolver()
        .interpolate("postgres://${aws:rds:db:Endpoint.Address}:${aws:rds:db:Endpoint.Port}/app")
        .await
        .unwrap();
    assert_eq!(output, "postgres://db.example.com:5432/app");
}

#[tokio::test]
async fn test_interpolate_leaves_host_variables() {
    let output = resolver()
        .interpolate("${opt:stage}-${aws:rds:db:Endpoint.Address}")
        .await
        .unwrap();
    assert_eq!(output, "${opt:stage}-db.example.com");
}

#[tokio::test]
async fn test_interpolate_token_nested_in_host_variable() {
    let output = resolver()
        .interpolate("${self:${aws:kinesis:events:StreamARN}}")
        .await
        .unwrap();
    assert_eq!(
        output,
        "${self:arn:aws:kinesis:us-east-1:123456789012:stream/events}"
    );
}

#[tokio::test]
async fn test_interpolate_yaml_exact_token_keeps_type() {
    let doc = resolver()
        .interpolate_yaml_str(
            r#"
stream:
  arn: ${aws:kinesis:events:StreamARN}
  retention: ${aws:kinesis:events:RetentionPeriodHours}
  more: ${aws:kinesis:events:HasMoreShards}
"#,
        )
        .await
        .unwrap();

    let stream = &doc["stream"];
    assert_eq!(
        stream["arn"].as_str(),
        Some("arn:aws:kinesis:us-east-1:123456789012:stream/events")
    );
    assert_eq!(stream["retention"].as_i64(), Some(24));
    assert_eq!(stream["more"].as_bool(), Some(false));
}

#[tokio::test]
async fn test_interpolate_yaml_embedded_token_renders_string() {
    let doc = resolver()
        .interpolate_yaml_str("url: postgres://${aws:rds:db:Endpoint.Address}:${aws:rds:db:Endpoint.Port}/app\n")
        .await
        .unwrap();

    assert_eq!(
        doc["url"].as_str(),
        Some("postgres://db.example.com:5432/app")
    );
}

#[tokio::test]
async fn test_interpolate_yaml_splices_composite_value() {
    let doc = resolver()
        .interpolate_yaml_str("endpoint: ${aws:rds:db:Endpoint}\n")
        .await
        .unwrap();

    assert_eq!(doc["endpoint"]["Address"].as_str(), Some("db.example.com"));
    assert_eq!(doc["endpoint"]["Port"].as_i64(), Some(5432));
}

#[tokio::test]
async fn test_interpolate_yaml_embedded_composite_is_error() {
    let result = resolver()
        .interpolate_yaml_str("url: host=${aws:rds:db:Endpoint}\n")
        .await;
    assert!(matches!(result.unwrap_err(), ResolverError::NotScalar { .. }));
}

#[tokio::test]
async fn test_interpolate_yaml_walks_sequences_and_mappings() {
    let doc = resolver()
        .interpolate_yaml_str(
            r#"
functions:
  - name: consumer
    events:
      - stream: ${aws:kinesis:events:StreamARN}
custom:
  stage: ${opt:stage}
"#,
        )
        .await
        .unwrap();

    assert_eq!(
        doc["functions"][0]["events"][0]["stream"].as_str(),
        Some("arn:aws:kinesis:us-east-1:123456789012:stream/events")
    );
    // Host variables survive untouched
    assert_eq!(doc["custom"]["stage"].as_str(), Some("${opt:stage}"));
}

#[tokio::test]
async fn test_interpolate_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "database:").unwrap();
    writeln!(file, "  host: ${{aws:rds:db:Endpoint.Address}}").unwrap();
    file.flush().unwrap();

    let doc = resolver()
        .interpolate_yaml_file(file.path())
        .await
        .unwrap();
    assert_eq!(doc["database"]["host"].as_str(), Some("db.example.com"));
}

#[tokio::test]
async fn test_interpolate_yaml_file_missing_is_io_error() {
    let result = resolver()
        .interpolate_yaml_file("/nonexistent/config.yaml")
        .await;
    assert!(matches!(result.unwrap_err(), ResolverError::IoError(_)));
}

#[tokio::test]
async fn test_interpolate_yaml_invalid_document_is_parse_error() {
    let result = resolver().interpolate_yaml_str("key: [unclosed\n").await;
    assert!(matches!(result.unwrap_err(), ResolverError::ParseError { .. }));
}

#[tokio::test]
async fn test_interpolate_malformed_aws_token_is_error() {
    let result = resolver().interpolate("${aws:kinesis:events}").await;
    assert!(matches!(
        result.unwrap_err(),
        ResolverError::InvalidReference { .. }
    ));
}
