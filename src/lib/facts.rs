// SPDX-License-Identifier: Apache-2.0

use serde_json::{Map, Value};

use crate::{Collection, OneViewClient, OneViewError};

/// Key under which [gather_facts] stores the resources of `collection`.
pub fn facts_name(collection: Collection) -> &'static str {
    match collection {
        Collection::LogicalInterconnectGroups => "logical_interconnect_groups",
        Collection::InterconnectTypes => "interconnect_types",
        Collection::EthernetNetworks => "ethernet_networks",
        Collection::FcNetworks => "fc_networks",
        Collection::Scopes => "scopes",
    }
}

/// Resources of `collection` named `name`, or all of them when `name` is
/// `None`. Stored as a list under [facts_name] of the collection.
pub fn gather_facts<C>(
    client: &C,
    collection: Collection,
    name: Option<&str>,
) -> Result<Value, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let resources = match name {
        Some(name) => client.get_by_name(collection, name)?,
        None => client.get_all(collection)?,
    };
    log::debug!("Gathered {} resource(s) from {collection}", resources.len());
    let mut facts = Map::new();
    facts.insert(facts_name(collection).to_string(), Value::Array(resources));
    Ok(Value::Object(facts))
}
