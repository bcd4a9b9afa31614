use std::{io, path::PathBuf};

use anyhow::Context;
use miette::Report;
use rollql_core::UnknownEngineError;

const FILE_READ_CONTEXT: &str = "while reading migration file";
const FILE_WRITE_CONTEXT: &str = "while writing rollback script";
const STDIN_READ_CONTEXT: &str = "while reading migration from stdin";
const ENGINE_OVERRIDE_CONTEXT: &str = "while resolving --engine override";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    MissingMigrationInput,
    ReadFile { path: PathBuf, source: io::Error },
    ReadStdin(io::Error),
    WriteFile { path: PathBuf, source: io::Error },
    UnknownEngine(UnknownEngineError),
}

impl From<UnknownEngineError> for CliError {
    fn from(value: UnknownEngineError) -> Self {
        Self::UnknownEngine(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::MissingMigrationInput => {
            format!("[usage] {}", missing_migration_message())
        }
        CliError::ReadFile { path, source } => {
            let context = format!("{FILE_READ_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::ReadStdin(source) => {
            let report = report_with_context(source, STDIN_READ_CONTEXT);
            format!("[io] {report}")
        }
        CliError::WriteFile { path, source } => {
            let context = format!("{FILE_WRITE_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::UnknownEngine(source) => {
            let report = report_with_context(source, ENGINE_OVERRIDE_CONTEXT);
            format!("[config] {report}")
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let context = context.into();
    let anyhow_error = std::result::Result::<(), E>::Err(source)
        .context(context)
        .expect_err("context wrapping must produce an error");
    miette::miette!("{anyhow_error:#}")
}

fn missing_migration_message() -> &'static str {
    "missing migration SQL: pass a `.sql` file argument or pipe SQL via stdin"
}
