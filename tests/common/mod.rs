//! Common test utilities
//!
//! A scripted `VpcLatticeApi` so data source reads run without AWS credentials.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use provider_aws::error::ProviderError;
use provider_aws::provider::vpclattice::{ServiceNetwork, VpcLatticeApi};
use provider_aws::provider::AwsClient;
use provider_aws::tags::IgnoreTagsConfig;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const CALLER_ACCOUNT_ID: &str = "123456789012";
pub const OTHER_ACCOUNT_ID: &str = "210987654321";
pub const SERVICE_NETWORK_ID: &str = "sn-0123456789abcdef0";

#[derive(Debug, Clone)]
pub enum GetResponse {
    Found(ServiceNetwork),
    NotFound,
    Fail(String),
}

#[derive(Debug, Clone)]
pub enum TagsResponse {
    Tags(HashMap<String, String>),
    Fail(String),
}

/// Scripted VPC Lattice API that records how it was called
#[derive(Debug)]
pub struct MockVpcLattice {
    get_response: GetResponse,
    tags_response: TagsResponse,
    get_calls: AtomicUsize,
    list_tags_calls: AtomicUsize,
    pub last_identifier: Mutex<Option<String>>,
    pub last_tags_arn: Mutex<Option<String>>,
}

impl MockVpcLattice {
    pub fn new(get_response: GetResponse, tags_response: TagsResponse) -> Arc<Self> {
        Arc::new(Self {
            get_response,
            tags_response,
            get_calls: AtomicUsize::new(0),
            list_tags_calls: AtomicUsize::new(0),
            last_identifier: Mutex::new(None),
            last_tags_arn: Mutex::new(None),
        })
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn list_tags_calls(&self) -> usize {
        self.list_tags_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VpcLatticeApi for MockVpcLattice {
    async fn get_service_network(&self, identifier: &str) -> Result<ServiceNetwork, ProviderError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_identifier.lock().unwrap() = Some(identifier.to_string());

        match &self.get_response {
            GetResponse::Found(sn) => Ok(sn.clone()),
            GetResponse::NotFound => Err(ProviderError::not_found(format!(
                "VPC Lattice Service Network {identifier}: ResourceNotFoundException"
            ))),
            GetResponse::Fail(message) => Err(ProviderError::api("GetServiceNetwork", message)),
        }
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> Result<HashMap<String, String>, ProviderError> {
        self.list_tags_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_tags_arn.lock().unwrap() = Some(resource_arn.to_string());

        match &self.tags_response {
            TagsResponse::Tags(tags) => Ok(tags.clone()),
            TagsResponse::Fail(message) => Err(ProviderError::api("ListTagsForResource", message)),
        }
    }
}

pub fn service_network_arn(account_id: &str) -> String {
    format!("arn:aws:vpc-lattice:us-west-2:{account_id}:servicenetwork/{SERVICE_NETWORK_ID}")
}

/// A fully populated service network owned by `account_id`
pub fn service_network(account_id: &str) -> ServiceNetwork {
    ServiceNetwork {
        id: Some(SERVICE_NETWORK_ID.to_string()),
        arn: Some(service_network_arn(account_id)),
        name: Some("payments-network".to_string()),
        auth_type: Some("AWS_IAM".to_string()),
        created_at: Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).single(),
        last_updated_at: Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 45).single(),
        number_of_associated_services: Some(3),
        number_of_associated_vpcs: Some(2),
    }
}

pub fn tags(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn client(mock: Arc<MockVpcLattice>) -> AwsClient {
    AwsClient::new(CALLER_ACCOUNT_ID, IgnoreTagsConfig::default(), mock)
}

pub fn client_with_ignore_tags(mock: Arc<MockVpcLattice>, ignore: IgnoreTagsConfig) -> AwsClient {
    AwsClient::new(CALLER_ACCOUNT_ID, ignore, mock)
}
