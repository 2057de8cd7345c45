// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS connection settings for the resolver.
//!
//! This module provides `AwsSettings`, the small set of overrides the
//! resolver accepts when building the shared SDK configuration. Values not
//! set here come from the standard AWS environment (environment variables,
//! shared config and credentials files, instance metadata).

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Connection settings applied when loading the shared SDK configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::service::AwsSettings;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = AwsSettings::new()
///     .region("us-west-2")
///     .profile("staging")
///     .load()
///     .await;
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct AwsSettings {
    /// Region override, if any
    region: Option<String>,
    /// Named profile override, if any
    profile: Option<String>,
}

impl AwsSettings {
    /// Creates settings with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWS region to resolve against.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the named AWS profile to load credentials from.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Loads the shared SDK configuration with these overrides applied.
    pub async fn load(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader.load().await
    }
}
