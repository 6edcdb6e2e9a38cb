// SPDX-License-Identifier: Apache-2.0

mod appliance;
mod apply;
mod config;
mod error;
mod query;

use env_logger::Builder;
use log::LevelFilter;

use crate::error::CliError;

const APP_NAME: &str = "ovstatectl";

const SUB_CMD_APPLY: &str = "apply";
const SUB_CMD_SHOW: &str = "show";
const SUB_CMD_VERSION: &str = "version";

fn main() {
    let matches = match parse_args(std::env::args_os()) {
        Ok(m) => m,
        Err(e) => return print_error_and_exit(e),
    };

    let (log_module_filters, log_level) =
        match matches.occurrences_of("verbose") {
            0 => (vec!["oneview_state", "ovstatectl"], LevelFilter::Info),
            1 => (vec!["oneview_state", "ovstatectl"], LevelFilter::Debug),
            _ => (vec![""], LevelFilter::Debug),
        };

    if !matches.is_present("quiet") {
        let mut log_builder = Builder::new();
        for log_module_filter in log_module_filters {
            if !log_module_filter.is_empty() {
                log_builder.filter(Some(log_module_filter), log_level);
            } else {
                log_builder.filter(None, log_level);
            }
        }
        log_builder.init();
    }

    if let Some(matches) = matches.subcommand_matches(SUB_CMD_APPLY) {
        let file_paths: Vec<&str> = matches
            .values_of("TASK_FILE")
            .map(|v| v.collect())
            .unwrap_or_default();
        if file_paths.is_empty() || file_paths.first() == Some(&"-") {
            print_result_and_exit(apply::apply_from_stdin(matches));
        } else {
            print_result_and_exit(apply::apply_from_files(
                &file_paths,
                matches,
            ));
        }
    } else if let Some(matches) = matches.subcommand_matches(SUB_CMD_SHOW) {
        print_result_and_exit(query::show(matches));
    } else if matches.subcommand_matches(SUB_CMD_VERSION).is_some() {
        print_string_and_exit(format!(
            "{} {}",
            APP_NAME,
            clap::crate_version!()
        ));
    }
}

fn gen_command() -> clap::Command<'static> {
    clap::Command::new(APP_NAME)
        .version(clap::crate_version!())
        .about("Command line of oneview-state")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Set verbose level")
                .global(true),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("CONFIG")
                .long("config")
                .short('c')
                .takes_value(true)
                .global(true)
                .help("Configuration file path"),
        )
        .arg(
            clap::Arg::new("APPLIANCE")
                .long("appliance")
                .short('a')
                .takes_value(true)
                .global(true)
                .help("Appliance state file, overrides the configuration"),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_APPLY)
                .about("Apply desired state tasks")
                .arg(
                    clap::Arg::new("TASK_FILE")
                        .required(false)
                        .multiple_occurrences(true)
                        .index(1)
                        .help("Task file, read from stdin if `-` or omitted"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_SHOW)
                .about("Show resources stored in the appliance")
                .arg(
                    clap::Arg::new("COLLECTION")
                        .required(true)
                        .index(1)
                        .possible_values(query::COLLECTION_NAMES)
                        .help("Resource collection to show"),
                )
                .arg(
                    clap::Arg::new("NAME")
                        .index(2)
                        .help("Show specific resource only"),
                )
                .arg(
                    clap::Arg::new("JSON")
                        .long("json")
                        .takes_value(false)
                        .help("Show resources in json format"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_VERSION).about("Show version"),
        )
}

// Help and version requests are printed by clap itself, other usage errors
// are reported like any other failure.
fn parse_args<I, T>(args: I) -> Result<clap::ArgMatches, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match gen_command().try_get_matches_from(args) {
        Ok(m) => Ok(m),
        Err(e) => match e.kind() {
            clap::ErrorKind::DisplayHelp | clap::ErrorKind::DisplayVersion => {
                e.exit()
            }
            _ => Err(e.into()),
        },
    }
}

fn print_result_and_exit(result: Result<String, CliError>) {
    match result {
        Ok(s) => print_string_and_exit(s),
        Err(e) => print_error_and_exit(e),
    }
}

fn print_error_and_exit(e: CliError) {
    eprintln!("{e}");
    std::process::exit(e.code);
}

fn print_string_and_exit(s: String) {
    println!("{s}");
    std::process::exit(0);
}
