mod annotation;
mod engine;
mod reverse;
mod rollback;
mod segment;

pub use annotation::AnnotationExtractor;
pub use engine::{DatabaseEngine, UnknownEngineError};
pub use reverse::{StatementKind, classify, reverse_statement};
pub use rollback::{RollbackScript, assemble_rollback};
pub use segment::split_statements;

/// Outcome of reversing one forward migration script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    /// Engine declared by the script annotation, if one was present.
    pub engine: Option<DatabaseEngine>,
    pub script: RollbackScript,
}

/// Runs the full reversal pipeline over a raw migration script: annotation
/// extraction, statement segmentation, then rollback assembly.
#[must_use]
pub fn reverse_migration(script: &str) -> Reversal {
    let (engine, content) = AnnotationExtractor::extract(script);
    let statements = split_statements(&content);

    Reversal {
        engine,
        script: assemble_rollback(&statements),
    }
}
