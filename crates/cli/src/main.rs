mod error_presentation;
mod render;

use std::{
    fs,
    io::{IsTerminal as _, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rollql_core::{DatabaseEngine, reverse_migration};

use crate::{
    error_presentation::{CliError, CliResult, render_runtime_error},
    render::render_rollback,
};

/// Reverses a forward SQL migration script into a rollback script.
#[derive(Debug, Parser)]
#[command(name = "rollql", version)]
struct Cli {
    /// Migration files; arguments without a `.sql` suffix are ignored and
    /// the first surviving one is processed.
    files: Vec<PathBuf>,

    /// Overrides the engine declared by the script annotation
    /// (MySQL, MariaDB, or PostgresSQL).
    #[arg(long, value_name = "ENGINE")]
    engine: Option<String>,

    /// Overrides the database name extracted from `USE` statements.
    #[arg(long, value_name = "NAME")]
    database: Option<String>,

    /// Writes the rollback script to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let engine_override = cli
        .engine
        .as_deref()
        .map(str::parse::<DatabaseEngine>)
        .transpose()?;

    let content = read_migration(&cli.files)?;
    let reversal = reverse_migration(&content);

    // Operator overrides take precedence over values derived from the script.
    let engine = engine_override.or(reversal.engine);
    let database_name = cli.database.or(reversal.script.database_name);

    let rendered = render_rollback(engine, database_name.as_deref(), &reversal.script.statements);

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered).map_err(|source| CliError::WriteFile { path, source })
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn read_migration(files: &[PathBuf]) -> CliResult<String> {
    if let Some(path) = files.iter().find(|path| is_sql_file(path)) {
        return fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        // Nothing is piped in; fail fast instead of blocking on a tty read.
        return Err(CliError::MissingMigrationInput);
    }

    let mut content = String::new();
    stdin
        .lock()
        .read_to_string(&mut content)
        .map_err(CliError::ReadStdin)?;

    if content.trim().is_empty() {
        return Err(CliError::MissingMigrationInput);
    }

    Ok(content)
}

fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == "sql")
}
