// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Collection, ManagedResource, ResourceMessages};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
/// Desired state of a Fibre Channel network.
///
/// Example yaml:
///
/// ```yaml
/// name: New FC Network 2
/// connectionTemplateUri: null
/// autoLoginRedistribution: true
/// fabricType: FabricAttach
/// ```
pub struct FcNetwork {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_uris: Option<Vec<String>>,
    #[serde(flatten)]
    pub _other: Map<String, Value>,
}

impl FcNetwork {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl ManagedResource for FcNetwork {
    const COLLECTION: Collection = Collection::FcNetworks;
    const FACT_NAME: &'static str = "fc_network";
    const MESSAGES: ResourceMessages = ResourceMessages {
        created: "FC Network created successfully.",
        updated: "FC Network updated successfully.",
        deleted: "FC Network deleted successfully.",
        already_present: "FC Network is already present.",
        already_absent: "FC Network is already absent.",
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
}
