use crate::reverse::reverse_statement;

const USE_PREFIX: &str = "USE ";

/// Ordered rollback statements plus the working database discovered while
/// assembling them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollbackScript {
    /// Inverses in execution order: the first entry undoes the last forward
    /// statement.
    pub statements: Vec<String>,
    /// Name captured from the first `USE` statement in forward order, with
    /// surrounding quote characters stripped.
    pub database_name: Option<String>,
}

/// Assembles the rollback script by traversing the forward statements in
/// reverse application order.
///
/// Statements the reverser declines to invert are skipped, except `USE`
/// statements, whose target is recorded as the database name. The traversal
/// overwrites the name on every `USE` it sees, so the last one encountered
/// in reverse order wins, which is the first `USE` in forward order.
#[must_use]
pub fn assemble_rollback(statements: &[String]) -> RollbackScript {
    let mut script = RollbackScript::default();

    for statement in statements.iter().rev() {
        match reverse_statement(statement) {
            Some(rollback) => script.statements.push(rollback),
            None => {
                if let Some(name) = statement.strip_prefix(USE_PREFIX) {
                    let name = name.trim_matches(|c| matches!(c, '`' | '"' | '\''));
                    script.database_name = Some(name.to_string());
                }
            }
        }
    }

    script
}
