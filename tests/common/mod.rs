// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test helpers.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use awscfg::domain::{ResolverError, Result};
use awscfg::ports::ResourceDescriber;
use serde_json::Value;

/// A describer returning a fixed section, or a fixed failure.
pub struct MockDescriber {
    scope: String,
    outcome: Outcome,
}

enum Outcome {
    Section(Value),
    Failure(String),
}

impl MockDescriber {
    /// Creates a describer that returns the given section for any resource.
    pub fn describing(scope: &str, section: Value) -> Self {
        Self {
            scope: scope.to_string(),
            outcome: Outcome::Section(section),
        }
    }

    /// Creates a describer whose describe call always fails.
    pub fn failing(scope: &str, message: &str) -> Self {
        Self {
            scope: scope.to_string(),
            outcome: Outcome::Failure(message.to_string()),
        }
    }
}

#[async_trait]
impl ResourceDescriber for MockDescriber {
    fn scope(&self) -> &str {
        &self.scope
    }

    async fn describe(&self, resource: &str) -> Result<Value> {
        match &self.outcome {
            Outcome::Section(section) => Ok(section.clone()),
            Outcome::Failure(message) => Err(ResolverError::DescribeError {
                scope: self.scope.clone(),
                resource: resource.to_string(),
                message: message.clone(),
                source: None,
            }),
        }
    }
}
