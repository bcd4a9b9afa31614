use std::fmt::Write as _;

use rollql_core::DatabaseEngine;

/// Renders a self-contained rollback script: an engine annotation and a
/// `USE` line when known, then one terminated statement per line.
pub(crate) fn render_rollback(
    engine: Option<DatabaseEngine>,
    database_name: Option<&str>,
    statements: &[String],
) -> String {
    let mut out = String::new();

    if let Some(engine) = engine {
        writeln!(out, "/* Database: {engine} */").expect("writing to String should not fail");
    }
    if let Some(name) = database_name {
        writeln!(out, "USE `{name}`;").expect("writing to String should not fail");
    }
    for statement in statements {
        writeln!(out, "{statement};").expect("writing to String should not fail");
    }

    out
}
