use rollql_core::{DatabaseEngine, UnknownEngineError};

#[test]
fn parses_exact_spellings_only() {
    assert_eq!("MySQL".parse(), Ok(DatabaseEngine::MySql));
    assert_eq!("MariaDB".parse(), Ok(DatabaseEngine::MariaDb));
    assert_eq!("PostgresSQL".parse(), Ok(DatabaseEngine::PostgresSql));
    assert_eq!(
        "postgres".parse::<DatabaseEngine>(),
        Err(UnknownEngineError("postgres".to_string()))
    );
}

#[test]
fn display_uses_the_declared_vocabulary() {
    for engine in DatabaseEngine::ALL {
        assert_eq!(engine.to_string().parse(), Ok(engine));
    }
    assert_eq!(DatabaseEngine::PostgresSql.to_string(), "PostgresSQL");
}

#[test]
fn unknown_engine_error_names_the_whole_vocabulary() {
    let error = "SQLite".parse::<DatabaseEngine>().expect_err("must reject");

    let rendered = error.to_string();
    assert!(rendered.contains("`SQLite`"));
    assert!(rendered.contains("MySQL, MariaDB, PostgresSQL"));
    for engine in DatabaseEngine::ALL {
        assert!(
            rendered.contains(engine.as_str()),
            "message must list `{engine}`, got: {rendered}",
        );
    }
}
