// tests/integration_tests.rs
//
// End-to-end behavior of the execute/validate/is_valid surface.

use quanta_lang::{Engine, Error, Value, execute, is_valid, validate};

// ============================================================================
// execute()
// ============================================================================

#[test]
fn test_execute_runs_a_whole_program() {
    let source = "\
# range rule
forall $x in [3, 5, 7]: $x >= 1 && $x <= 10
";
    assert_eq!(execute(source).unwrap(), Value::Boolean(true));
}

#[test]
fn test_execute_with_comments_and_blank_lines() {
    let source = "\
# first check
forall $x in [1, 2]: $x > 0

# second check wins
exists $x in [1, 2]: $x == 2
";
    assert_eq!(execute(source).unwrap(), Value::Boolean(true));
}

#[test]
fn test_execute_returns_non_boolean_values_too() {
    assert_eq!(execute("1 + 2").unwrap(), Value::Integer(3));
    assert_eq!(
        execute("string.concat(\"rule\", \"-\", \"ok\")").unwrap(),
        Value::String("rule-ok".to_string())
    );
}

#[test]
fn test_all_three_error_kinds_surface_at_the_execute_boundary() {
    assert!(matches!(execute("\"unterminated"), Err(Error::Lex(_))));
    assert!(matches!(execute("forall"), Err(Error::Parse(_))));
    assert!(matches!(execute("1 / 0"), Err(Error::Runtime(_))));
}

#[test]
fn test_each_execute_uses_a_fresh_context() {
    let engine = Engine::new();
    assert_eq!(
        engine.execute("forall $x in [1]: $x == 1").unwrap(),
        Value::Boolean(true)
    );
    // The quantifier binding does not leak into the next execution
    assert!(matches!(
        engine.execute("$x"),
        Err(Error::Runtime(_))
    ));
}

#[test]
fn test_validation_rule_over_host_data() {
    let mut engine = Engine::new();
    engine.define(
        "files",
        Value::Collection(vec![
            serde_json::Value::String("src/main.cpp".to_string()),
            serde_json::Value::String("src/util.cpp".to_string()),
            serde_json::Value::String("include/util.hpp".to_string()),
        ]),
    );

    let rule = "\
collection.count($files) > 0
forall $f in $files: string.contains($f, \"/\")
(exists $f in $files: string.starts_with($f, \"include/\")) -> true
";
    assert_eq!(engine.execute(rule).unwrap(), Value::Boolean(true));
}

#[test]
fn test_conditional_guard_around_quantifier() {
    let mut engine = Engine::new();
    engine.define("files", Value::Collection(vec![]));
    let rule = "collection.count($files) > 0 \
                ? (forall $f in $files: string.length($f) > 0) \
                : false";
    assert_eq!(engine.execute(rule).unwrap(), Value::Boolean(false));
}

#[test]
fn test_metalogic_example_program() {
    let source = "\
metalogic.self_reference(\"forall x: x = x\") > 0
";
    assert_eq!(execute(source).unwrap(), Value::Boolean(true));
}

// ============================================================================
// validate()
// ============================================================================

#[test]
fn test_validate_accepts_well_formed_programs() {
    assert!(validate("forall $x in [1]: $x > 0").is_empty());
    assert!(validate("").is_empty());
    // Validation does not evaluate: unresolved names are fine here
    assert!(validate("$nope && missing_function(1)").is_empty());
}

#[test]
fn test_validate_reports_syntax_errors_with_positions() {
    let diagnostics = validate("forall $x in [1]");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Expected ':'"));
    assert_eq!(diagnostics[0].line, 1);

    let diagnostics = validate("\"unterminated");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Unterminated string"));
}

// ============================================================================
// is_valid()
// ============================================================================

#[test]
fn test_is_valid_requires_parse_and_evaluation_to_succeed() {
    assert!(is_valid("forall $x in [1, 2]: $x > 0"));
    assert!(is_valid("")); // empty program evaluates to true
    assert!(!is_valid("forall $x in")); // parse failure
    assert!(!is_valid("1 / 0")); // runtime failure
    assert!(!is_valid("$undefined")); // unresolved name
}

// ============================================================================
// Boolean Rule Reading
// ============================================================================

#[test]
fn test_callers_read_the_result_as_a_boolean_check() {
    // The common host pattern: any non-boolean result or error is invalid
    fn rule_holds(source: &str) -> bool {
        matches!(execute(source), Ok(Value::Boolean(true)))
    }

    assert!(rule_holds("exists $x in [0, 1]: $x == 1"));
    assert!(!rule_holds("41 + 1")); // non-boolean result
    assert!(!rule_holds("$broken + 1")); // error
}
