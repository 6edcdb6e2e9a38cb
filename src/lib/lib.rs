// SPDX-License-Identifier: Apache-2.0

//! Declarative management of HPE OneView Logical Interconnect Groups and
//! Fibre Channel networks.
//!
//! The desired state of a resource is compared with the one found on the
//! appliance by name and the minimum create, update or delete call is
//! issued through a [OneViewClient].

mod client;
mod collection;
mod compare;
mod error;
mod facts;
mod fc_network;
mod lig;
mod offline;
mod reconcile;
mod resolve;
mod task;


pub use crate::client::OneViewClient;
pub use crate::collection::{Collection, NetworkType};
pub use crate::error::{ErrorKind, OneViewError};
pub use crate::facts::{facts_name, gather_facts};
pub use crate::fc_network::FcNetwork;
pub use crate::lig::{
    InterconnectMapEntryTemplate, InterconnectMapTemplate,
    LogicalInterconnectGroup, UplinkSet,
};
pub use crate::offline::InMemoryAppliance;
pub use crate::reconcile::{
    reconcile, DesiredState, ManagedResource, ReconcileResult,
    ResourceMessages,
};
pub use crate::resolve::{
    resolve_interconnect_type_references, resolve_network_references,
    resolve_references,
};
pub use crate::task::{parse_tasks, ResourceKind, Task};
