//! # VPC Lattice
//!
//! Client seam and data sources for Amazon VPC Lattice.
//!
//! [`VpcLatticeApi`] is the narrow surface the data sources need. The SDK
//! backed implementation lives in [`SdkVpcLatticeClient`]; tests provide
//! their own.

mod find;
mod service_network_data_source;

pub use find::{find_service_network_by_id, list_tags};
pub use service_network_data_source::{
    read_service_network, ServiceNetworkDataSource, DS_NAME_SERVICE_NETWORK,
    SERVICE_NETWORK_DATA_SOURCE_TYPE,
};

use crate::error::ProviderError;
use crate::observability::metrics;
use async_trait::async_trait;
use aws_sdk_vpclattice::error::DisplayErrorContext;
use aws_sdk_vpclattice::primitives::DateTime as SmithyDateTime;
use aws_sdk_vpclattice::Client as VpcLatticeClient;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info_span, Instrument};

const METRICS_SERVICE: &str = "vpc-lattice";

/// Service network as returned by GetServiceNetwork
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceNetwork {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub auth_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub number_of_associated_services: Option<i64>,
    pub number_of_associated_vpcs: Option<i64>,
}

/// Remote VPC Lattice operations used by the data sources
#[async_trait]
pub trait VpcLatticeApi: Send + Sync {
    /// GetServiceNetwork.
    ///
    /// A missing service network is reported as [`ProviderError::NotFound`].
    async fn get_service_network(&self, identifier: &str) -> Result<ServiceNetwork, ProviderError>;

    /// ListTagsForResource
    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> Result<HashMap<String, String>, ProviderError>;
}

/// [`VpcLatticeApi`] backed by the AWS SDK
#[derive(Clone)]
pub struct SdkVpcLatticeClient {
    client: VpcLatticeClient,
}

impl std::fmt::Debug for SdkVpcLatticeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkVpcLatticeClient").finish_non_exhaustive()
    }
}

impl SdkVpcLatticeClient {
    #[must_use]
    pub fn new(client: VpcLatticeClient) -> Self {
        Self { client }
    }
}

fn to_chrono(value: Option<&SmithyDateTime>) -> Option<DateTime<Utc>> {
    value.and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
}

#[async_trait]
impl VpcLatticeApi for SdkVpcLatticeClient {
    async fn get_service_network(&self, identifier: &str) -> Result<ServiceNetwork, ProviderError> {
        let span = info_span!(
            "vpclattice.service_network.get",
            service_network.identifier = identifier
        );
        let start = Instant::now();

        async move {
            let result = self
                .client
                .get_service_network()
                .service_network_identifier(identifier)
                .send()
                .await;

            match result {
                Ok(out) => {
                    metrics::record_api_operation(
                        METRICS_SERVICE,
                        "GetServiceNetwork",
                        start.elapsed().as_secs_f64(),
                    );
                    debug!(
                        service_network.id = out.id(),
                        "Fetched VPC Lattice service network"
                    );
                    Ok(ServiceNetwork {
                        id: out.id().map(ToString::to_string),
                        arn: out.arn().map(ToString::to_string),
                        name: out.name().map(ToString::to_string),
                        auth_type: out.auth_type().map(|a| a.as_str().to_string()),
                        created_at: to_chrono(out.created_at()),
                        last_updated_at: to_chrono(out.last_updated_at()),
                        number_of_associated_services: out.number_of_associated_services(),
                        number_of_associated_vpcs: out.number_of_associated_vpcs(),
                    })
                }
                Err(e) => {
                    metrics::increment_api_operation_errors(METRICS_SERVICE, "GetServiceNetwork");
                    let service_error = e.into_service_error();
                    if service_error.is_resource_not_found_exception() {
                        return Err(ProviderError::not_found(format!(
                            "VPC Lattice Service Network {identifier}: {}",
                            DisplayErrorContext(&service_error)
                        )));
                    }
                    Err(ProviderError::api(
                        "GetServiceNetwork",
                        DisplayErrorContext(&service_error),
                    ))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> Result<HashMap<String, String>, ProviderError> {
        let span = info_span!("vpclattice.tags.list", resource.arn = resource_arn);
        let start = Instant::now();

        async move {
            match self
                .client
                .list_tags_for_resource()
                .resource_arn(resource_arn)
                .send()
                .await
            {
                Ok(out) => {
                    metrics::record_api_operation(
                        METRICS_SERVICE,
                        "ListTagsForResource",
                        start.elapsed().as_secs_f64(),
                    );
                    Ok(out.tags().cloned().unwrap_or_default())
                }
                Err(e) => {
                    metrics::increment_api_operation_errors(METRICS_SERVICE, "ListTagsForResource");
                    Err(ProviderError::api(
                        "ListTagsForResource",
                        DisplayErrorContext(&e),
                    ))
                }
            }
        }
        .instrument(span)
        .await
    }
}
