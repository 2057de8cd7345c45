// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS variable resolver implementation.
//!
//! This module provides `AwsResolver`, which routes parsed variable
//! references to the describer registered for their scope and extracts the
//! requested key from the describe section. It also provides interpolation
//! over plain strings and YAML documents, replacing `${aws:...}` tokens in
//! place while leaving other variables for the host framework.

use crate::domain::value::extract;
use crate::domain::{ResolvedValue, ResolverError, Result, VariableRef};
use crate::ports::ResourceDescriber;
use crate::service::AwsSettings;
use std::collections::HashMap;

#[cfg(feature = "yaml")]
use serde_yaml::Value as YamlValue;

/// Resolves `aws:<scope>:<name>:<key>` references against registered describers.
///
/// The resolver holds the dispatch table from scope names to describers.
/// `from_defaults` registers every describer enabled by the crate features;
/// custom describers can be added through the builder or `register`.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::service::{AwsResolver, AwsSettings};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = AwsResolver::from_defaults(&AwsSettings::new()).await;
/// let value = resolver.resolve_str("aws:kinesis:my-stream:StreamARN").await?;
/// println!("{}", value);
/// # Ok(())
/// # }
/// ```
pub struct AwsResolver {
    /// Dispatch table from scope name to describer
    describers: HashMap<String, Box<dyn ResourceDescriber>>,
}

impl AwsResolver {
    /// Creates an empty resolver with no registered scopes.
    pub fn new() -> Self {
        Self {
            describers: HashMap::new(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> AwsResolverBuilder {
        AwsResolverBuilder::new()
    }

    /// Creates a resolver with every feature-enabled describer registered.
    ///
    /// Loads the shared SDK configuration once (applying the settings
    /// overrides) and hands it to each describer.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use awscfg::service::{AwsResolver, AwsSettings};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let resolver = AwsResolver::from_defaults(&AwsSettings::new().region("us-east-1")).await;
    /// # }
    /// ```
    pub async fn from_defaults(settings: &AwsSettings) -> Self {
        let config = settings.load().await;
        let mut builder = Self::builder();

        #[cfg(feature = "kinesis")]
        {
            builder = builder.with_kinesis(&config);
        }
        #[cfg(feature = "ess")]
        {
            builder = builder.with_elasticsearch(&config);
        }
        #[cfg(feature = "rds")]
        {
            builder = builder.with_rds(&config);
        }
        #[cfg(feature = "dynamodb")]
        {
            builder = builder.with_dynamodb(&config);
        }

        builder.build()
    }

    /// Registers a describer, replacing any existing one for its scope.
    pub fn register(&mut self, describer: Box<dyn ResourceDescriber>) {
        let scope = describer.scope().to_string();
        if self.describers.insert(scope.clone(), describer).is_some() {
            tracing::warn!("replaced describer for scope '{}'", scope);
        }
    }

    /// Returns the registered scope names in sorted order.
    pub fn scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.describers.keys().map(|s| s.as_str()).collect();
        scopes.sort_unstable();
        scopes
    }

    /// Returns true if a describer is registered for the scope.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.describers.contains_key(scope)
    }

    /// Resolves a parsed reference to its value.
    ///
    /// Looks up the scope in the dispatch table, describes the named
    /// resource, and extracts the key path from the returned section.
    ///
    /// # Returns
    ///
    /// * `Ok(ResolvedValue)` - The extracted value
    /// * `Err(ResolverError)` - Unknown scope, describe failure, or missing key
    pub async fn resolve(&self, reference: &VariableRef) -> Result<ResolvedValue> {
        let describer =
            self.describers
                .get(reference.scope())
                .ok_or_else(|| ResolverError::UnknownScope {
                    scope: reference.scope().to_string(),
                })?;

        tracing::debug!("resolving '{}'", reference);
        let section = describer.describe(reference.name()).await?;
        extract(
            reference.scope(),
            reference.name(),
            &section,
            reference.key(),
        )
    }

    /// Parses and resolves a raw `aws:<scope>:<name>:<key>` reference.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use awscfg::service::{AwsResolver, AwsSettings};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let resolver = AwsResolver::from_defaults(&AwsSettings::new()).await;
    /// let value = resolver.resolve_str("aws:rds:my-db:Endpoint.Address").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_str(&self, raw: &str) -> Result<ResolvedValue> {
        let reference: VariableRef = raw.parse()?;
        self.resolve(&reference).await
    }

    /// Substitutes every `${aws:...}` token in a string.
    ///
    /// Each AWS token is resolved and replaced with its rendered scalar
    /// value. Tokens whose value is an object or list are an error here;
    /// non-AWS `${...}` tokens and unterminated `${` sequences pass through
    /// untouched.
    pub async fn interpolate(&self, text: &str) -> Result<String> {
        let spans = reference_spans(text);
        if spans.is_empty() {
            return Ok(text.to_string());
        }

        let resolved = self.resolve_spans(&spans).await?;

        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for (start, end, inner) in spans {
            output.push_str(&text[last..start]);
            let reference: VariableRef = inner.parse()?;
            match resolved.get(&reference) {
                Some(value) => output.push_str(&render_scalar(&reference, value)?),
                None => output.push_str(&text[start..end]),
            }
            last = end;
        }
        output.push_str(&text[last..]);
        Ok(output)
    }

    /// Substitutes every `${aws:...}` token in a parsed YAML document.
    ///
    /// String nodes consisting of exactly one AWS token are spliced with the
    /// resolved value in its native type (so a numeric attribute stays a
    /// number). Tokens embedded in longer strings substitute their rendered
    /// scalar form. Other `${...}` variables pass through untouched.
    #[cfg(feature = "yaml")]
    pub async fn interpolate_yaml(&self, doc: &mut YamlValue) -> Result<()> {
        let mut references = Vec::new();
        collect_references(doc, &mut references)?;
        if references.is_empty() {
            return Ok(());
        }

        let mut resolved = HashMap::new();
        for reference in references {
            if !resolved.contains_key(&reference) {
                let value = self.resolve(&reference).await?;
                resolved.insert(reference, value);
            }
        }

        apply_resolved(doc, &resolved)
    }

    /// Parses a YAML document from a string and substitutes AWS tokens.
    #[cfg(feature = "yaml")]
    pub async fn interpolate_yaml_str(&self, text: &str) -> Result<YamlValue> {
        let mut doc: YamlValue =
            serde_yaml::from_str(text).map_err(|e| ResolverError::ParseError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;
        self.interpolate_yaml(&mut doc).await?;
        Ok(doc)
    }

    /// Reads a YAML document from a file and substitutes AWS tokens.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use awscfg::service::{AwsResolver, AwsSettings};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let resolver = AwsResolver::from_defaults(&AwsSettings::new()).await;
    /// let config = resolver.interpolate_yaml_file("config.yaml").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub async fn interpolate_yaml_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<YamlValue> {
        let text = std::fs::read_to_string(path)?;
        self.interpolate_yaml_str(&text).await
    }

    /// Resolves the references behind a set of spans, deduplicated.
    async fn resolve_spans(
        &self,
        spans: &[(usize, usize, &str)],
    ) -> Result<HashMap<VariableRef, ResolvedValue>> {
        let mut resolved = HashMap::new();
        for (_, _, inner) in spans {
            let reference: VariableRef = inner.parse()?;
            if !resolved.contains_key(&reference) {
                let value = self.resolve(&reference).await?;
                resolved.insert(reference, value);
            }
        }
        Ok(resolved)
    }
}

impl Default for AwsResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an `AwsResolver`.
///
/// # Examples
///
/// ```rust,no_run
/// use awscfg::service::AwsResolverBuilder;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let resolver = AwsResolverBuilder::new()
///     .with_kinesis(&config)
///     .with_rds(&config)
///     .build();
/// # }
/// ```
pub struct AwsResolverBuilder {
    describers: Vec<Box<dyn ResourceDescriber>>,
}

impl AwsResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            describers: Vec::new(),
        }
    }

    /// Adds a describer to the builder.
    pub fn with_describer(mut self, describer: Box<dyn ResourceDescriber>) -> Self {
        self.describers.push(describer);
        self
    }

    /// Adds the Kinesis describer for the `kinesis` scope.
    #[cfg(feature = "kinesis")]
    pub fn with_kinesis(self, config: &aws_config::SdkConfig) -> Self {
        use crate::adapters::KinesisDescriber;
        self.with_describer(Box::new(KinesisDescriber::new(config)))
    }

    /// Adds the Elasticsearch describer for the `ess` scope.
    #[cfg(feature = "ess")]
    pub fn with_elasticsearch(self, config: &aws_config::SdkConfig) -> Self {
        use crate::adapters::ElasticsearchDescriber;
        self.with_describer(Box::new(ElasticsearchDescriber::new(config)))
    }

    /// Adds the RDS describer for the `rds` scope.
    #[cfg(feature = "rds")]
    pub fn with_rds(self, config: &aws_config::SdkConfig) -> Self {
        use crate::adapters::RdsDescriber;
        self.with_describer(Box::new(RdsDescriber::new(config)))
    }

    /// Adds the DynamoDB describer for the `dynamodb` scope.
    #[cfg(feature = "dynamodb")]
    pub fn with_dynamodb(self, config: &aws_config::SdkConfig) -> Self {
        use crate::adapters::DynamoDbDescriber;
        self.with_describer(Box::new(DynamoDbDescriber::new(config)))
    }

    /// Builds the resolver.
    pub fn build(self) -> AwsResolver {
        let mut resolver = AwsResolver::new();
        for describer in self.describers {
            resolver.register(describer);
        }
        resolver
    }
}

impl Default for AwsResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the byte spans of `${aws:...}` tokens in a string.
///
/// Returns `(start, end, inner)` triples where `start..end` covers the whole
/// token including the delimiters and `inner` is the reference between them.
/// Each `}` pairs with the nearest preceding `${`, so an AWS token nested
/// inside a host token (`${self:${aws:...}}`) is still found. Tokens whose
/// inner text does not carry the `aws:` prefix are skipped, as are
/// unterminated `${` sequences and tokens still carrying an unresolved
/// nested token.
fn reference_spans(text: &str) -> Vec<(usize, usize, &str)> {
    let mut spans = Vec::new();
    let mut openings = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            openings.push(i);
            i += 2;
        } else if bytes[i] == b'}' {
            if let Some(start) = openings.pop() {
                let inner = &text[start + 2..i];
                if VariableRef::is_reference(inner) && !inner.contains("${") {
                    spans.push((start, i + 1, inner));
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }

    spans
}

/// Renders a resolved value for in-string substitution.
fn render_scalar(reference: &VariableRef, value: &ResolvedValue) -> Result<String> {
    value.render().ok_or_else(|| ResolverError::NotScalar {
        scope: reference.scope().to_string(),
        resource: reference.name().to_string(),
        key: reference.key().to_string(),
    })
}

/// Collects every AWS reference appearing in a YAML document.
#[cfg(feature = "yaml")]
fn collect_references(node: &YamlValue, references: &mut Vec<VariableRef>) -> Result<()> {
    match node {
        YamlValue::String(s) => {
            for (_, _, inner) in reference_spans(s) {
                references.push(inner.parse()?);
            }
        }
        YamlValue::Sequence(items) => {
            for item in items {
                collect_references(item, references)?;
            }
        }
        YamlValue::Mapping(map) => {
            for (_, value) in map {
                collect_references(value, references)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Substitutes resolved values into a YAML document.
#[cfg(feature = "yaml")]
fn apply_resolved(
    node: &mut YamlValue,
    resolved: &HashMap<VariableRef, ResolvedValue>,
) -> Result<()> {
    let replacement = match &*node {
        YamlValue::String(s) => rewrite_string(s, resolved)?,
        _ => None,
    };
    if let Some(new_value) = replacement {
        *node = new_value;
        return Ok(());
    }

    match node {
        YamlValue::Sequence(items) => {
            for item in items {
                apply_resolved(item, resolved)?;
            }
        }
        YamlValue::Mapping(map) => {
            for (_, value) in map.iter_mut() {
                apply_resolved(value, resolved)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Computes the replacement for a string node, if it carries AWS tokens.
#[cfg(feature = "yaml")]
fn rewrite_string(
    s: &str,
    resolved: &HashMap<VariableRef, ResolvedValue>,
) -> Result<Option<YamlValue>> {
    let spans = reference_spans(s);
    if spans.is_empty() {
        return Ok(None);
    }

    // A node that is exactly one token splices the native type.
    if spans.len() == 1 && spans[0].0 == 0 && spans[0].1 == s.len() {
        let reference: VariableRef = spans[0].2.parse()?;
        return resolved.get(&reference).map(yaml_from_json).transpose();
    }

    let mut output = String::with_capacity(s.len());
    let mut last = 0;
    for (start, end, inner) in spans {
        output.push_str(&s[last..start]);
        let reference: VariableRef = inner.parse()?;
        match resolved.get(&reference) {
            Some(value) => output.push_str(&render_scalar(&reference, value)?),
            None => output.push_str(&s[start..end]),
        }
        last = end;
    }
    output.push_str(&s[last..]);
    Ok(Some(YamlValue::String(output)))
}

/// Converts a resolved JSON value into its YAML form for splicing.
#[cfg(feature = "yaml")]
fn yaml_from_json(value: &ResolvedValue) -> Result<YamlValue> {
    serde_yaml::to_value(value.json()).map_err(|e| ResolverError::ParseError {
        message: format!("failed to splice resolved value: {}", e),
        source: Some(Box::new(e)),
    })
}
