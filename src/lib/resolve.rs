// SPDX-License-Identifier: Apache-2.0

use crate::client::{get_first_by_name, resource_uri};
use crate::{
    Collection, ErrorKind, LogicalInterconnectGroup, NetworkType,
    OneViewClient, OneViewError,
};

const MSG_INTERCONNECT_TYPE_NOT_FOUND: &str =
    "Interconnect Type was not found.";

/// Replace every name based reference of the Logical Interconnect Group by
/// the URI of the referenced resource. The network types of all uplink
/// sets are validated before any lookup happens.
pub fn resolve_references<C>(
    lig: &LogicalInterconnectGroup,
    client: &C,
) -> Result<LogicalInterconnectGroup, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let network_types = get_network_types(lig)?;
    let lig = resolve_interconnect_type_references(lig, client)?;
    resolve_networks(lig, client, network_types)
}

/// Convert `permittedInterconnectTypeName` of each
/// `interconnectMapTemplate.interconnectMapEntryTemplates` entry into
/// `permittedInterconnectTypeUri`.
pub fn resolve_interconnect_type_references<C>(
    lig: &LogicalInterconnectGroup,
    client: &C,
) -> Result<LogicalInterconnectGroup, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let mut lig = lig.clone();
    let entries = match lig
        .interconnect_map_template
        .as_mut()
        .and_then(|t| t.interconnect_map_entry_templates.as_mut())
    {
        Some(e) => e,
        None => return Ok(lig),
    };
    for entry in entries.iter_mut() {
        // An empty name is dropped without lookup
        if let Some(type_name) = entry.permitted_interconnect_type_name.take()
        {
            if !type_name.is_empty() {
                entry.permitted_interconnect_type_uri =
                    Some(get_interconnect_type_uri(client, &type_name)?);
            }
        }
    }
    Ok(lig)
}

fn get_interconnect_type_uri<C>(
    client: &C,
    type_name: &str,
) -> Result<String, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    match get_first_by_name(client, Collection::InterconnectTypes, type_name)?
    {
        Some(i_type) => Ok(resource_uri(&i_type)?.to_string()),
        None => {
            let e = OneViewError::new(
                ErrorKind::ResourceNotFound,
                MSG_INTERCONNECT_TYPE_NOT_FOUND.to_string(),
            );
            log::error!("{}: {type_name}", e);
            Err(e)
        }
    }
}

/// Convert network names found in `uplinkSets[].networkUris` into network
/// URIs. The network types of all uplink sets are validated before any
/// lookup happens.
pub fn resolve_network_references<C>(
    lig: &LogicalInterconnectGroup,
    client: &C,
) -> Result<LogicalInterconnectGroup, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let network_types = get_network_types(lig)?;
    resolve_networks(lig.clone(), client, network_types)
}

// One entry per uplink set, `None` for those without networks to resolve.
fn get_network_types(
    lig: &LogicalInterconnectGroup,
) -> Result<Vec<Option<NetworkType>>, OneViewError> {
    lig.uplink_sets
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|u| u.network_type_for_resolve())
        .collect()
}

fn resolve_networks<C>(
    mut lig: LogicalInterconnectGroup,
    client: &C,
    network_types: Vec<Option<NetworkType>>,
) -> Result<LogicalInterconnectGroup, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let uplink_sets = match lig.uplink_sets.as_mut() {
        Some(u) => u,
        None => return Ok(lig),
    };
    for (uplink_set, network_type) in
        uplink_sets.iter_mut().zip(network_types.into_iter())
    {
        if let (Some(network_type), Some(network_uris)) =
            (network_type, uplink_set.network_uris.as_mut())
        {
            let mut uris = Vec::with_capacity(network_uris.len());
            for name_or_uri in network_uris.iter() {
                uris.push(get_network_uri(client, name_or_uri, network_type)?);
            }
            *network_uris = uris;
        }
    }
    Ok(lig)
}

fn get_network_uri<C>(
    client: &C,
    name_or_uri: &str,
    network_type: NetworkType,
) -> Result<String, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let collection = network_type.collection();
    if collection.is_member_uri(name_or_uri) {
        return Ok(name_or_uri.to_string());
    }
    match get_first_by_name(client, collection, name_or_uri)? {
        Some(network) => {
            let uri = resource_uri(&network)?;
            log::debug!(
                "Resolved {network_type} network {name_or_uri} to {uri}"
            );
            Ok(uri.to_string())
        }
        None => {
            let e = OneViewError::new(
                ErrorKind::ResourceNotFound,
                format!("{}{name_or_uri}", network_type.not_found_msg()),
            );
            log::error!("{}", e);
            Err(e)
        }
    }
}
