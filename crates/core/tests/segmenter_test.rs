use rollql_core::split_statements;

#[test]
fn splits_on_terminator_and_preserves_order() {
    let content = "CREATE TABLE a (id INT);\nCREATE TABLE b (id INT);\nUSE `shop`;";

    assert_eq!(
        split_statements(content),
        vec![
            "CREATE TABLE a (id INT)",
            "CREATE TABLE b (id INT)",
            "USE `shop`",
        ]
    );
}

#[test]
fn trims_newlines_but_keeps_other_whitespace() {
    let content = "\n\nCREATE TABLE a (id INT)\n;\n  SELECT 1;";

    assert_eq!(
        split_statements(content),
        vec!["CREATE TABLE a (id INT)", "  SELECT 1"]
    );
}

#[test]
fn drops_fragments_that_are_empty_after_trimming() {
    let content = ";;\n;CREATE DATABASE shop;\n";

    assert_eq!(split_statements(content), vec!["CREATE DATABASE shop"]);
}

#[test]
fn empty_content_yields_no_statements() {
    assert!(split_statements("").is_empty());
    assert!(split_statements("\n\n").is_empty());
}

// Inherited behavior: the segmenter has no quote awareness, so a terminator
// inside a string literal splits the statement.
#[test]
fn splits_inside_string_literals_too() {
    let content = "INSERT INTO t VALUES ('a;b');";

    assert_eq!(
        split_statements(content),
        vec!["INSERT INTO t VALUES ('a", "b')"]
    );
}
