// SPDX-License-Identifier: Apache-2.0

use std::io::{stdin, Read};

use oneview_state::{
    parse_tasks, InMemoryAppliance, OneViewError, ReconcileResult, Task,
};
use serde::Serialize;

use crate::appliance::{load_appliance, save_appliance};
use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct TaskReport {
    resource: String,
    name: String,
    state: String,
    #[serde(flatten)]
    result: ReconcileResult,
}

pub(crate) fn apply_from_stdin(
    matches: &clap::ArgMatches,
) -> Result<String, CliError> {
    let mut content = String::new();
    stdin().read_to_string(&mut content)?;
    apply(&[content], matches)
}

pub(crate) fn apply_from_files(
    file_paths: &[&str],
    matches: &clap::ArgMatches,
) -> Result<String, CliError> {
    let mut contents = Vec::new();
    for file_path in file_paths {
        contents.push(std::fs::read_to_string(file_path)?);
    }
    apply(&contents, matches)
}

// Tasks run in order. The appliance file is saved even when a task fails as
// the changes made by earlier tasks are not reverted.
fn apply(
    contents: &[String],
    matches: &clap::ArgMatches,
) -> Result<String, CliError> {
    let mut tasks = Vec::new();
    for content in contents {
        // Replace non-breaking space '\u{A0}'  to normal space
        let content = content.replace('\u{A0}', " ");
        tasks.extend(parse_tasks(&content)?);
    }

    let appliance_path = Config::appliance_path(matches)?;
    let mut appliance = load_appliance(&appliance_path)?;
    let (reports, failure) = run_tasks(tasks, &mut appliance);
    save_appliance(&appliance_path, &appliance)?;

    let report = serde_yaml::to_string(&reports)?;
    match failure {
        Some(e) => {
            // Results of the tasks finished before the failure
            if !reports.is_empty() {
                println!("{report}");
            }
            Err(e.into())
        }
        None => Ok(report),
    }
}

// Stop at the first failing task and return it along with the reports of
// the tasks done before.
fn run_tasks(
    tasks: Vec<Task>,
    appliance: &mut InMemoryAppliance,
) -> (Vec<TaskReport>, Option<OneViewError>) {
    let mut reports = Vec::new();
    for task in tasks {
        let name = task
            .data
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or_default()
            .to_string();
        match task.run(&mut *appliance) {
            Ok(result) => {
                log::info!("{name}: {}", result.msg);
                reports.push(TaskReport {
                    resource: format!("{}", task.resource.collection()),
                    name,
                    state: task.state.to_string(),
                    result,
                });
            }
            Err(e) => {
                log::error!("Failed to apply task for {name}: {e}");
                return (reports, Some(e));
            }
        }
    }
    (reports, None)
}
