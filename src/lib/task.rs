// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    reconcile, Collection, DesiredState, FcNetwork, LogicalInterconnectGroup,
    OneViewClient, OneViewError, ReconcileResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ResourceKind {
    LogicalInterconnectGroup,
    FcNetwork,
}

impl ResourceKind {
    pub fn collection(&self) -> Collection {
        match self {
            Self::LogicalInterconnectGroup => {
                Collection::LogicalInterconnectGroups
            }
            Self::FcNetwork => Collection::FcNetworks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
/// One desired state declaration, the unit of work of `ovstatectl apply`.
///
/// ```yaml
/// resource: fc_network
/// state: present
/// data:
///   name: New FC Network 2
///   fabricType: FabricAttach
/// ```
pub struct Task {
    pub resource: ResourceKind,
    pub state: DesiredState,
    /// Parsed as the desired state of `resource` when the task runs.
    pub data: Value,
}

impl Task {
    pub fn new(
        resource: ResourceKind,
        state: DesiredState,
        data: Value,
    ) -> Self {
        Self {
            resource,
            state,
            data,
        }
    }

    pub fn run<C>(
        &self,
        client: &mut C,
    ) -> Result<ReconcileResult, OneViewError>
    where
        C: OneViewClient + ?Sized,
    {
        match self.resource {
            ResourceKind::LogicalInterconnectGroup => reconcile(
                client,
                self.state,
                LogicalInterconnectGroup::deserialize(&self.data)?,
            ),
            ResourceKind::FcNetwork => reconcile(
                client,
                self.state,
                FcNetwork::deserialize(&self.data)?,
            ),
        }
    }
}

/// Parse a YAML or JSON document holding a single task or a list of tasks.
pub fn parse_tasks(content: &str) -> Result<Vec<Task>, OneViewError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_sequence() {
        Ok(serde_yaml::from_value(value)?)
    } else {
        Ok(vec![serde_yaml::from_value(value)?])
    }
}
