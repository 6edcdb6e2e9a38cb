// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use oneview_state::InMemoryAppliance;

use crate::error::CliError;

/// Load the appliance state file, a missing file means an empty appliance.
pub(crate) fn load_appliance(
    file_path: &str,
) -> Result<InMemoryAppliance, CliError> {
    if !Path::new(file_path).exists() {
        log::info!("Appliance file {file_path} not found, starting empty");
        return Ok(InMemoryAppliance::new());
    }
    let fd = std::fs::File::open(file_path)?;
    let mut appliance: InMemoryAppliance = serde_yaml::from_reader(fd)?;
    appliance.normalize();
    Ok(appliance)
}

// Write to a temporary file in the same folder first, then rename.
pub(crate) fn save_appliance(
    file_path: &str,
    appliance: &InMemoryAppliance,
) -> Result<(), CliError> {
    let path = Path::new(file_path);
    if let Some(folder) = path.parent() {
        if !folder.as_os_str().is_empty() && !folder.exists() {
            std::fs::create_dir_all(folder)?;
        }
    }
    let tmp_file_path = gen_tmp_file_path(path);
    let mut fd = std::fs::File::create(&tmp_file_path)?;
    fd.write_all(serde_yaml::to_string(appliance)?.as_bytes())?;
    fd.sync_all()?;
    if let Err(e) = std::fs::rename(&tmp_file_path, path) {
        del_file(&tmp_file_path);
        return Err(e.into());
    }
    log::debug!("Appliance state saved to {file_path}");
    Ok(())
}

fn gen_tmp_file_path(path: &Path) -> std::path::PathBuf {
    path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4()))
}

fn del_file(file_path: &Path) {
    if let Err(e) = std::fs::remove_file(file_path) {
        log::error!("Failed to delete file {}: {}", file_path.display(), e);
    }
}
