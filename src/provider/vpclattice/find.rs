use super::{ServiceNetwork, VpcLatticeApi};
use crate::error::ProviderError;
use crate::tags::KeyValueTags;

/// Look up a service network by id or ARN.
///
/// An answer without an id is treated as not found.
pub async fn find_service_network_by_id(
    conn: &dyn VpcLatticeApi,
    id: &str,
) -> Result<ServiceNetwork, ProviderError> {
    let out = conn.get_service_network(id).await?;

    if out.id.is_none() {
        return Err(ProviderError::not_found(format!(
            "empty result for VPC Lattice Service Network {id}"
        )));
    }

    Ok(out)
}

pub async fn list_tags(
    conn: &dyn VpcLatticeApi,
    resource_arn: &str,
) -> Result<KeyValueTags, ProviderError> {
    let tags = conn.list_tags_for_resource(resource_arn).await?;
    Ok(KeyValueTags::from(tags))
}
