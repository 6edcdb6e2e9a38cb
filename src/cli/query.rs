// SPDX-License-Identifier: Apache-2.0

use oneview_state::{gather_facts, Collection};

use crate::appliance::load_appliance;
use crate::config::Config;
use crate::error::CliError;

pub(crate) const COLLECTION_NAMES: [&str; 5] = [
    "logical-interconnect-groups",
    "interconnect-types",
    "ethernet-networks",
    "fc-networks",
    "scopes",
];

pub(crate) fn show(matches: &clap::ArgMatches) -> Result<String, CliError> {
    let collection = parse_collection(
        matches.value_of("COLLECTION").unwrap_or_default(),
    )?;
    let appliance = load_appliance(&Config::appliance_path(matches)?)?;
    let facts =
        gather_facts(&appliance, collection, matches.value_of("NAME"))?;
    Ok(if matches.is_present("JSON") {
        serde_json::to_string_pretty(&facts)?
    } else {
        serde_yaml::to_string(&facts)?
    })
}

fn parse_collection(name: &str) -> Result<Collection, CliError> {
    serde_yaml::from_str(name).map_err(|_| {
        CliError::from(format!(
            "Invalid collection {name}, should be one of {}",
            COLLECTION_NAMES.join(", ")
        ))
    })
}
