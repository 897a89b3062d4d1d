// tests/integration_tests.rs

use sqldoc::output::{to_json, to_json_pretty};
use sqldoc::{translate_sql, Error, Predicate, Translation, Value};

// ============================================================================
// End-to-End Pipeline
// ============================================================================

#[test]
fn test_full_pipeline_single_statement() {
    let translation = translate_sql("select name from users where age > 21;").unwrap();

    let Translation::One(descriptor) = translation else {
        panic!("one statement should collapse to one descriptor");
    };

    assert_eq!(descriptor.collection, "users");
    assert_eq!(descriptor.projection["name"], 1);
    assert_eq!(descriptor.filter["age"], Predicate::Gt(Value::Integer(21)));
    assert!(!descriptor.explain);
}

#[test]
fn test_full_pipeline_multiple_statements() {
    let translation =
        translate_sql("select * from users; explain select id from orders where total > 100;")
            .unwrap();

    let Translation::Many(descriptors) = &translation else {
        panic!("two statements should stay a sequence");
    };

    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].collection, "users");
    assert!(descriptors[1].explain);
    assert_eq!(descriptors[1].projection["id"], 1);
}

#[test]
fn test_quoted_literal_flows_through() {
    let translation = translate_sql(r"select * from greetings where text = 'Hello,\sWorld!' ;");

    let Ok(Translation::One(descriptor)) = translation else {
        panic!("expected a single descriptor");
    };

    assert_eq!(
        descriptor.filter["text"],
        Predicate::Eq(Value::String("Hello, World!".into()))
    );
}

// ============================================================================
// Error Propagation
// ============================================================================

#[test]
fn test_lex_error_propagates() {
    let err = translate_sql("select * from test where a = 'oops").unwrap_err();

    assert!(matches!(err, Error::Lex(_)));
    assert!(err.to_string().contains("unterminated string"));
}

#[test]
fn test_parse_error_propagates() {
    let err = translate_sql("select * from;").unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("Parse Error"));
}

#[test]
fn test_compile_error_propagates() {
    let err = translate_sql("select * from test where a <= 1;").unwrap_err();

    assert!(matches!(err, Error::Compile(_)));
    assert!(err.to_string().contains("unsupported operator <="));
}

#[test]
fn test_one_bad_statement_rejects_the_whole_input() {
    // the second statement's bad operator discards the first one too
    let result = translate_sql("select * from good; select * from bad where a < 1;");
    assert!(matches!(result, Err(Error::Compile(_))));
}

// ============================================================================
// JSON Rendering
// ============================================================================

#[test]
fn test_descriptor_renders_as_object() {
    let translation = translate_sql("select * from test;").unwrap();

    assert_eq!(
        to_json(&translation),
        r#"{"collection":"test","explain":false,"filter":{},"projection":{}}"#
    );
}

#[test]
fn test_filter_operator_shapes() {
    let eq = translate_sql("select * from t where name = 'Bob' ;").unwrap();
    assert!(to_json(&eq).contains(r#""filter":{"name":"Bob"}"#));

    let ne = translate_sql("select * from t where a != 2;").unwrap();
    assert!(to_json(&ne).contains(r#""filter":{"a":{"$ne":2}}"#));

    let gt = translate_sql("select * from t where a > 2;").unwrap();
    assert!(to_json(&gt).contains(r#""filter":{"a":{"$gt":2}}"#));
}

#[test]
fn test_projection_and_explain_render() {
    let translation = translate_sql("explain select a, b from users where age > 21;").unwrap();

    assert_eq!(
        to_json(&translation),
        r#"{"collection":"users","explain":true,"filter":{"age":{"$gt":21}},"projection":{"a":1,"b":1}}"#
    );
}

#[test]
fn test_sequence_renders_as_array() {
    let translation = translate_sql("select * from a; select * from b;").unwrap();
    let json = to_json(&translation);

    assert!(json.starts_with('['));
    assert!(json.ends_with(']'));
    assert!(json.contains(r#""collection":"a""#));
    assert!(json.contains(r#""collection":"b""#));
}

#[test]
fn test_empty_input_renders_as_empty_array() {
    let translation = translate_sql("").unwrap();
    assert_eq!(to_json(&translation), "[]");
}

#[test]
fn test_pretty_rendering_is_indented() {
    let translation = translate_sql("select * from test;").unwrap();
    let pretty = to_json_pretty(&translation);

    assert!(pretty.contains("\n  \"collection\": \"test\""));
    assert_eq!(to_json(&translation), pretty.replace(['\n', ' '], ""));
}

// ============================================================================
// CLI Commands
// ============================================================================

#[cfg(feature = "cli")]
mod cli {
    use sqldoc::cli::{
        execute_check, execute_translate, CheckOptions, CheckResult, CliError, TranslateOptions,
    };

    #[test]
    fn test_check_accepts_valid_syntax() {
        let options = CheckOptions {
            statements: "select * from test where a <= 1;".into(),
        };

        // check stops before translation, so translator-rejected
        // operators still pass
        assert!(matches!(
            execute_check(&options),
            Ok(CheckResult::SyntaxValid)
        ));
    }

    #[test]
    fn test_check_reports_parse_errors() {
        let options = CheckOptions {
            statements: "select * from;".into(),
        };

        let err = execute_check(&options).unwrap_err();
        assert!(matches!(err, CliError::Pipeline(_)));
        assert!(err.to_string().contains("Parse Error"));
    }

    #[test]
    fn test_translate_renders_json() {
        let options = TranslateOptions {
            statements: "select * from test where a != 2;".into(),
            pretty: false,
        };

        let json = execute_translate(&options).unwrap();
        assert_eq!(
            json,
            r#"{"collection":"test","explain":false,"filter":{"a":{"$ne":2}},"projection":{}}"#
        );
    }

    #[test]
    fn test_translate_pretty_renders_indented_json() {
        let options = TranslateOptions {
            statements: "select * from test;".into(),
            pretty: true,
        };

        let json = execute_translate(&options).unwrap();
        assert!(json.contains("\n  \"collection\": \"test\""));
    }

    #[test]
    fn test_translate_surfaces_compile_errors() {
        let options = TranslateOptions {
            statements: "select * from test where a is 1;".into(),
            pretty: false,
        };

        let err = execute_translate(&options).unwrap_err();
        assert!(err.to_string().contains("Compilation Error"));
    }
}
