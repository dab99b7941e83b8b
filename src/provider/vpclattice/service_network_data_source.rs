//! # Service Network Data Source
//!
//! `aws_vpclattice_service_network`: reads a service network by identifier
//! and maps its attributes and tags into state.
//!
//! Tags can only be listed by the account that created the service network
//! (https://docs.aws.amazon.com/vpc-lattice/latest/ug/sharing.html#sharing-perms),
//! so they are fetched only when the ARN's account matches the caller.

use super::find::{find_service_network_by_id, list_tags};
use crate::arn::Arn;
use crate::constants::{VPC_LATTICE_SERVICE, ZERO_TIMESTAMP};
use crate::diag::{diag_error, Diagnostics, ERR_ACTION_READING};
use crate::error::SetAttributeError;
use crate::provider::{AwsClient, DataSource};
use crate::schema::{AttributeSchema, AttributeType, AttributeValue, ResourceData, Schema};
use crate::tags::KeyValueTags;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::LazyLock;
use tracing::{debug, info};

pub const SERVICE_NETWORK_DATA_SOURCE_TYPE: &str = "aws_vpclattice_service_network";
pub const DS_NAME_SERVICE_NETWORK: &str = "Service Network Data Source";

const ATTR_ARN: &str = "arn";
const ATTR_AUTH_TYPE: &str = "auth_type";
const ATTR_CREATED_AT: &str = "created_at";
const ATTR_LAST_UPDATED_AT: &str = "last_updated_at";
const ATTR_NAME: &str = "name";
const ATTR_NUMBER_OF_ASSOCIATED_SERVICES: &str = "number_of_associated_services";
const ATTR_NUMBER_OF_ASSOCIATED_VPCS: &str = "number_of_associated_vpcs";
const ATTR_SERVICE_NETWORK_IDENTIFIER: &str = "service_network_identifier";
const ATTR_TAGS: &str = "tags";

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .attribute(ATTR_ARN, AttributeSchema::computed(AttributeType::String))
        .attribute(ATTR_AUTH_TYPE, AttributeSchema::computed(AttributeType::String))
        .attribute(ATTR_CREATED_AT, AttributeSchema::computed(AttributeType::String))
        .attribute(
            ATTR_LAST_UPDATED_AT,
            AttributeSchema::computed(AttributeType::String),
        )
        .attribute(ATTR_NAME, AttributeSchema::computed(AttributeType::String))
        .attribute(
            ATTR_NUMBER_OF_ASSOCIATED_SERVICES,
            AttributeSchema::computed(AttributeType::Int),
        )
        .attribute(
            ATTR_NUMBER_OF_ASSOCIATED_VPCS,
            AttributeSchema::computed(AttributeType::Int),
        )
        .attribute(
            ATTR_SERVICE_NETWORK_IDENTIFIER,
            AttributeSchema::required(AttributeType::String),
        )
        .attribute(ATTR_TAGS, AttributeSchema::computed(AttributeType::Map))
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceNetworkDataSource;

#[async_trait]
impl DataSource for ServiceNetworkDataSource {
    fn type_name(&self) -> &'static str {
        SERVICE_NETWORK_DATA_SOURCE_TYPE
    }

    fn schema(&self) -> &'static Schema {
        &SCHEMA
    }

    async fn read(&self, data: &mut ResourceData<'_>, meta: &AwsClient) -> Diagnostics {
        read_service_network(data, meta).await
    }
}

/// `YYYY-MM-DD HH:MM:SS[.fraction] +0000 UTC`, fraction trimmed of trailing zeros
fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    let Some(t) = value else {
        return ZERO_TIMESTAMP.to_string();
    };

    let mut out = t.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = t.timestamp_subsec_nanos();
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push_str(" +0000 UTC");
    out
}

fn set_all(
    data: &mut ResourceData<'_>,
    values: Vec<(&str, AttributeValue)>,
) -> Result<(), SetAttributeError> {
    for (name, value) in values {
        data.set(name, value)?;
    }
    Ok(())
}

/// Read handler for `aws_vpclattice_service_network`
pub async fn read_service_network(data: &mut ResourceData<'_>, meta: &AwsClient) -> Diagnostics {
    let diags = Diagnostics::new();
    let conn = meta.vpclattice();

    let service_network_id = data.get_string(ATTR_SERVICE_NETWORK_IDENTIFIER).to_string();
    debug!(
        service_network.identifier = service_network_id.as_str(),
        "Reading VPC Lattice service network"
    );

    let out = match find_service_network_by_id(conn, &service_network_id).await {
        Ok(out) => out,
        Err(e) => {
            return diag_error(
                VPC_LATTICE_SERVICE,
                ERR_ACTION_READING,
                DS_NAME_SERVICE_NETWORK,
                &service_network_id,
                &e,
            );
        }
    };

    let id = out.id.clone().unwrap_or_default();
    let out_arn = out.arn.clone().unwrap_or_default();

    data.set_id(id.clone());
    if let Err(e) = set_all(
        data,
        vec![
            (ATTR_ARN, out_arn.clone().into()),
            (ATTR_AUTH_TYPE, out.auth_type.unwrap_or_default().into()),
            (ATTR_CREATED_AT, format_timestamp(out.created_at).into()),
            (
                ATTR_LAST_UPDATED_AT,
                format_timestamp(out.last_updated_at).into(),
            ),
            (ATTR_NAME, out.name.unwrap_or_default().into()),
            (
                ATTR_NUMBER_OF_ASSOCIATED_SERVICES,
                out.number_of_associated_services.unwrap_or_default().into(),
            ),
            (
                ATTR_NUMBER_OF_ASSOCIATED_VPCS,
                out.number_of_associated_vpcs.unwrap_or_default().into(),
            ),
            (ATTR_SERVICE_NETWORK_IDENTIFIER, id.into()),
        ],
    ) {
        return diags.append_error(format!("setting attributes: {e}"));
    }

    let parsed_arn = match Arn::parse(&out_arn) {
        Ok(arn) => arn,
        Err(e) => return diags.append_error(format!("parsing ARN: {e}")),
    };

    let mut tags = KeyValueTags::new();
    if parsed_arn.account_id == meta.account_id() {
        tags = match list_tags(conn, &out_arn).await {
            Ok(tags) => tags,
            Err(e) => {
                return diags.append_error(format!(
                    "listing tags for VPC Lattice Service Network ({out_arn}): {e}"
                ));
            }
        };
    } else {
        info!(
            service_network.arn = out_arn.as_str(),
            owner = parsed_arn.account_id.as_str(),
            "Service network is shared from another account, skipping tags"
        );
    }

    let tags = tags
        .ignore_aws()
        .ignore_config(meta.ignore_tags_config())
        .map();
    if let Err(e) = data.set(ATTR_TAGS, tags) {
        return diags.append_error(format!("setting tags: {e}"));
    }

    diags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let t = Utc.with_ymd_and_hms(2023, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(Some(t)), "2023-03-01 12:30:05 +0000 UTC");

        let with_fraction = t + chrono::Duration::milliseconds(120);
        assert_eq!(
            format_timestamp(Some(with_fraction)),
            "2023-03-01 12:30:05.12 +0000 UTC"
        );

        assert_eq!(format_timestamp(None), ZERO_TIMESTAMP);
    }

    #[test]
    fn test_schema_shape() {
        let schema = ServiceNetworkDataSource.schema();
        let identifier = schema.get(ATTR_SERVICE_NETWORK_IDENTIFIER).unwrap();
        assert!(identifier.required);
        assert!(!identifier.computed);

        for name in [
            ATTR_ARN,
            ATTR_AUTH_TYPE,
            ATTR_CREATED_AT,
            ATTR_LAST_UPDATED_AT,
            ATTR_NAME,
            ATTR_NUMBER_OF_ASSOCIATED_SERVICES,
            ATTR_NUMBER_OF_ASSOCIATED_VPCS,
            ATTR_TAGS,
        ] {
            assert!(schema.get(name).unwrap().computed, "{name} should be computed");
        }
        assert_eq!(schema.names().count(), 9);
    }
}
