//! Command dispatch for the paygraph CLI.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use super::args::{Arguments, Command, CommonArgs, ExtractCommand, RelationsCommand};
use super::exit_status::ExitStatus;
use super::report;
use crate::config::find_config_file;
use crate::core::{ExtractResult, FsReader, extract_collections};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Relations(cmd)) => relations(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let result = run_engine(&cmd.common)?;

    let json = if cmd.pretty {
        serde_json::to_string_pretty(&result.collections)?
    } else {
        serde_json::to_string(&result.collections)?
    };
    println!("{json}");

    report::print_warnings(&result.skipped);
    report::print_summary(&result);

    Ok(status_of(&result))
}

fn relations(cmd: RelationsCommand) -> Result<ExitStatus> {
    let result = run_engine(&cmd.common)?;

    report::print_relations(&result.collections);
    report::print_warnings(&result.skipped);
    report::print_summary(&result);

    Ok(status_of(&result))
}

fn run_engine(common: &CommonArgs) -> Result<ExtractResult> {
    let config_path = resolve_config_path(common)?;
    if common.verbose {
        eprintln!("Using config file: {}", config_path.display());
    }

    let path = config_path
        .to_str()
        .with_context(|| anyhow!("Invalid path: {:?}", config_path))?;

    extract_collections(path, &FsReader)
}

fn resolve_config_path(common: &CommonArgs) -> Result<PathBuf> {
    if let Some(path) = &common.config {
        return Ok(path.clone());
    }
    find_config_file(&common.root)
}

fn status_of(result: &ExtractResult) -> ExitStatus {
    if result.skipped.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
