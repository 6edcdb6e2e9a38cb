// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) appliance: ApplianceConfig,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplianceConfig {
    #[serde(default = "ApplianceConfig::default_path")]
    pub(crate) path: String,
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl ApplianceConfig {
    const DEFAULT_PATH: &'static str = "/var/lib/ovstate/appliance.yml";

    fn default_path() -> String {
        Self::DEFAULT_PATH.to_string()
    }
}

impl Config {
    pub(crate) const DEFAULT_CONFIG_PATH: &'static str =
        "/etc/ovstate/ovstate.conf";

    pub(crate) fn load(path: &str) -> Result<Self, CliError> {
        let path = std::path::Path::new(path);
        if !path.exists() {
            return Ok(Config::default());
        }
        let mut fd = std::fs::File::open(path)?;
        let mut content = String::new();
        fd.read_to_string(&mut content)?;
        match toml::from_str::<Config>(&content) {
            Ok(c) => {
                log::info!("Configuration loaded:\n{content}");
                Ok(c)
            }
            Err(e) => Err(CliError::from(format!(
                "Failed to read configuration from {}: {e}",
                path.display()
            ))),
        }
    }

    /// Appliance state file path: `--appliance` first, then the
    /// configuration file.
    pub(crate) fn appliance_path(
        matches: &clap::ArgMatches,
    ) -> Result<String, CliError> {
        if let Some(p) = matches.value_of("APPLIANCE") {
            return Ok(p.to_string());
        }
        let config_path = matches
            .value_of("CONFIG")
            .unwrap_or(Self::DEFAULT_CONFIG_PATH);
        Ok(Self::load(config_path)?.appliance.path)
    }
}
