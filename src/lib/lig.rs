// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resolve::resolve_references, Collection, ManagedResource, NetworkType,
    OneViewClient, OneViewError, ResourceMessages,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
/// Desired state of a Logical Interconnect Group.
///
/// Only the properties this crate interprets are typed, everything else is
/// kept in `_other` and sent to OneView untouched.
///
/// Example yaml:
///
/// ```yaml
/// name: Test Logical Interconnect Group
/// enclosureType: C7000
/// interconnectMapTemplate:
///   interconnectMapEntryTemplates:
///   - logicalLocation:
///       locationEntries:
///       - relativeValue: 1
///         type: Bay
///       - relativeValue: 1
///         type: Enclosure
///     permittedInterconnectTypeName: HP VC Flex-10/10D Module
/// uplinkSets:
/// - name: e23 uplink set
///   mode: Auto
///   networkType: Ethernet
///   networkUris:
///   - vlan 100
///   - /rest/ethernet-networks/b2be27ec-ae31-41cb-9f92-ff6da5905abc
/// scopeUris:
/// - /rest/scopes/00SC123456
/// ```
pub struct LogicalInterconnectGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Rename the existing resource to this name.
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Never sent with the create or update payload, applied afterwards
    /// by a dedicated scope association call.
    pub scope_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interconnect_map_template: Option<InterconnectMapTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplink_sets: Option<Vec<UplinkSet>>,
    #[serde(flatten)]
    pub _other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InterconnectMapTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interconnect_map_entry_templates:
        Option<Vec<InterconnectMapEntryTemplate>>,
    #[serde(flatten)]
    pub _other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InterconnectMapEntryTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replaced by `permitted_interconnect_type_uri` before submitting.
    pub permitted_interconnect_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_interconnect_type_uri: Option<String>,
    #[serde(flatten)]
    pub _other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UplinkSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// `Ethernet` or `FibreChannel`.
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Each item is either a network URI or a network name.
    pub network_uris: Option<Vec<String>>,
    #[serde(flatten)]
    pub _other: Map<String, Value>,
}

impl LogicalInterconnectGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl UplinkSet {
    /// The network type which `network_uris` should be resolved against.
    /// Returns `None` when there is nothing to resolve.
    pub(crate) fn network_type_for_resolve(
        &self,
    ) -> Result<Option<NetworkType>, OneViewError> {
        match self.network_uris.as_ref() {
            Some(uris) if !uris.is_empty() => self
                .network_type
                .as_deref()
                .unwrap_or_default()
                .parse()
                .map(Some),
            _ => Ok(None),
        }
    }
}

impl ManagedResource for LogicalInterconnectGroup {
    const COLLECTION: Collection = Collection::LogicalInterconnectGroups;
    const FACT_NAME: &'static str = "logical_interconnect_group";
    const MESSAGES: ResourceMessages = ResourceMessages {
        created: "Logical Interconnect Group created successfully.",
        updated: "Logical Interconnect Group updated successfully.",
        deleted: "Logical Interconnect Group deleted successfully.",
        already_present: "Logical Interconnect Group is already present.",
        already_absent: "Logical Interconnect Group is already absent.",
    };

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn new_name(&self) -> Option<&str> {
        self.new_name.as_deref()
    }

    fn take_scope_uris(&mut self) -> Option<Vec<String>> {
        self.scope_uris.take()
    }

    fn resolve_references<C>(&self, client: &C) -> Result<Self, OneViewError>
    where
        C: OneViewClient + ?Sized,
    {
        resolve_references(self, client)
    }
}
