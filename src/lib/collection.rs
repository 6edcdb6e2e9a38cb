// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, OneViewError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// The OneView REST collections this crate reads from or writes to.
pub enum Collection {
    LogicalInterconnectGroups,
    InterconnectTypes,
    EthernetNetworks,
    FcNetworks,
    Scopes,
}

impl Collection {
    /// URI prefix of every resource in this collection, for example
    /// `/rest/fc-networks`.
    pub fn uri_prefix(&self) -> &'static str {
        match self {
            Self::LogicalInterconnectGroups => {
                "/rest/logical-interconnect-groups"
            }
            Self::InterconnectTypes => "/rest/interconnect-types",
            Self::EthernetNetworks => "/rest/ethernet-networks",
            Self::FcNetworks => "/rest/fc-networks",
            Self::Scopes => "/rest/scopes",
        }
    }

    /// The `category` property OneView reports for resources of this
    /// collection.
    pub fn category(&self) -> &'static str {
        self.uri_prefix().trim_start_matches("/rest/")
    }

    pub(crate) fn is_member_uri(&self, uri: &str) -> bool {
        uri.starts_with(self.uri_prefix())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    Ethernet,
    FibreChannel,
}

impl NetworkType {
    pub(crate) const MSG_INVALID_NETWORK_TYPE: &'static str =
        "Invalid Network Type: ";

    pub fn collection(&self) -> Collection {
        match self {
            Self::Ethernet => Collection::EthernetNetworks,
            Self::FibreChannel => Collection::FcNetworks,
        }
    }

    pub(crate) fn not_found_msg(&self) -> &'static str {
        match self {
            Self::Ethernet => "Ethernet Network not found: ",
            Self::FibreChannel => "Fibre Channel Network not found: ",
        }
    }
}

impl std::str::FromStr for NetworkType {
    type Err = OneViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ethernet" => Ok(Self::Ethernet),
            "FibreChannel" => Ok(Self::FibreChannel),
            _ => {
                let e = OneViewError::new(
                    ErrorKind::InvalidValue,
                    format!("{}{s}", Self::MSG_INVALID_NETWORK_TYPE),
                );
                log::error!("{}", e);
                Err(e)
            }
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ethernet => "Ethernet",
                Self::FibreChannel => "FibreChannel",
            }
        )
    }
}
