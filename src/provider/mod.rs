//! # Provider
//!
//! The AWS client bundle handed to every handler, the data source trait,
//! and the registry of data sources this crate provides.
//!
//! - `events`: EventBridge field validators
//! - `vpclattice`: VPC Lattice client seam and data sources

pub mod events;
pub mod vpclattice;

use crate::config::ProviderConfig;
use crate::diag::Diagnostics;
use crate::error::ProviderError;
use crate::observability::metrics;
use crate::schema::{AttributeValue, ResourceData, Schema};
use crate::tags::IgnoreTagsConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use vpclattice::{SdkVpcLatticeClient, ServiceNetworkDataSource, VpcLatticeApi};

/// Per-provider state shared by every handler invocation
#[derive(Clone)]
pub struct AwsClient {
    account_id: String,
    region: Option<String>,
    ignore_tags_config: IgnoreTagsConfig,
    vpclattice: Arc<dyn VpcLatticeApi>,
}

impl std::fmt::Debug for AwsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsClient")
            .field("account_id", &self.account_id)
            .field("region", &self.region)
            .field("ignore_tags_config", &self.ignore_tags_config)
            .finish_non_exhaustive()
    }
}

impl AwsClient {
    /// Assemble a client from already constructed parts
    pub fn new(
        account_id: impl Into<String>,
        ignore_tags_config: IgnoreTagsConfig,
        vpclattice: Arc<dyn VpcLatticeApi>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            region: None,
            ignore_tags_config,
            vpclattice,
        }
    }

    /// Build SDK clients from the default credential chain.
    ///
    /// The caller account id comes from configuration when present,
    /// otherwise from STS GetCallerIdentity.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub async fn connect(config: &ProviderConfig) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;
        let region = sdk_config.region().map(ToString::to_string);

        let mut lattice_config = aws_sdk_vpclattice::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.vpclattice_endpoint {
            info!(endpoint = endpoint.as_str(), "Using VPC Lattice endpoint override");
            lattice_config = lattice_config.endpoint_url(endpoint);
        }
        let vpclattice =
            SdkVpcLatticeClient::new(aws_sdk_vpclattice::Client::from_conf(lattice_config.build()));

        let account_id = match &config.account_id {
            Some(account_id) => account_id.clone(),
            None => caller_account_id(&sdk_config)
                .await
                .context("Failed to resolve caller account id")?,
        };

        info!(
            account_id = account_id.as_str(),
            region = region.as_deref().unwrap_or("unset"),
            "AWS client configured"
        );

        Ok(Self {
            account_id,
            region,
            ignore_tags_config: config.ignore_tags.clone(),
            vpclattice: Arc::new(vpclattice),
        })
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn ignore_tags_config(&self) -> &IgnoreTagsConfig {
        &self.ignore_tags_config
    }

    #[must_use]
    pub fn vpclattice(&self) -> &dyn VpcLatticeApi {
        self.vpclattice.as_ref()
    }
}

async fn caller_account_id(sdk_config: &aws_config::SdkConfig) -> Result<String, ProviderError> {
    let out = aws_sdk_sts::Client::new(sdk_config)
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| {
            ProviderError::Configuration(
                aws_sdk_sts::error::DisplayErrorContext(&e).to_string(),
            )
        })?;

    out.account()
        .map(ToString::to_string)
        .ok_or_else(|| ProviderError::Configuration("GetCallerIdentity returned no account".to_string()))
}

/// A read-only data source
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Type name as used in configuration, e.g. `aws_vpclattice_service_network`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> &'static Schema;

    /// Populate `data` from the remote API. Returns on the first error.
    async fn read(&self, data: &mut ResourceData<'_>, meta: &AwsClient) -> Diagnostics;
}

/// Every data source this crate provides
#[must_use]
pub fn data_sources() -> Vec<Box<dyn DataSource>> {
    vec![Box::new(ServiceNetworkDataSource)]
}

/// Look up a data source by type name
#[must_use]
pub fn data_source(type_name: &str) -> Option<Box<dyn DataSource>> {
    data_sources()
        .into_iter()
        .find(|ds| ds.type_name() == type_name)
}

/// Validate `config`, run the read handler, and return the resulting state.
///
/// Validation problems stop the read before any remote call.
pub async fn read_data_source(
    data_source: &dyn DataSource,
    config: BTreeMap<String, AttributeValue>,
    meta: &AwsClient,
) -> Result<serde_json::Value, Diagnostics> {
    let type_name = data_source.type_name();
    let span = info_span!("provider.data_source.read", data_source = type_name);

    async move {
        metrics::increment_data_source_reads(type_name);

        let schema = data_source.schema();
        let validation = schema.validate_config(&config);
        if validation.has_error() {
            metrics::increment_validation_failures();
            metrics::increment_data_source_read_errors(type_name);
            warn!(
                errors = validation.errors().count(),
                "Configuration rejected by schema validation"
            );
            return Err(validation);
        }

        let mut data = ResourceData::from_config(schema, config);
        let diags = data_source.read(&mut data, meta).await;
        if diags.has_error() {
            metrics::increment_data_source_read_errors(type_name);
            for d in diags.errors() {
                warn!(summary = d.summary.as_str(), "Data source read failed");
            }
            return Err(diags);
        }

        info!(id = data.id().unwrap_or_default(), "Data source read complete");
        Ok(data.to_state())
    }
    .instrument(span)
    .await
}
