use std::{fmt, str::FromStr};

use thiserror::Error;

/// Database engine vocabulary accepted by the script annotation.
///
/// The spellings are closed and case-sensitive; `PostgresSQL` is the
/// historical spelling scripts actually declare and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    MySql,
    MariaDb,
    PostgresSql,
}

impl DatabaseEngine {
    pub const ALL: [Self; 3] = [Self::MySql, Self::MariaDb, Self::PostgresSql];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::MariaDb => "MariaDB",
            Self::PostgresSql => "PostgresSQL",
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown database engine `{0}`; expected one of {vocab}", vocab = expected_vocabulary())]
pub struct UnknownEngineError(pub String);

fn expected_vocabulary() -> String {
    DatabaseEngine::ALL.map(DatabaseEngine::as_str).join(", ")
}

impl FromStr for DatabaseEngine {
    type Err = UnknownEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MySQL" => Ok(Self::MySql),
            "MariaDB" => Ok(Self::MariaDb),
            "PostgresSQL" => Ok(Self::PostgresSql),
            other => Err(UnknownEngineError(other.to_string())),
        }
    }
}
