//! Compiler integration tests.
//!
//! End-to-end tests for the pipeline: resolve -> codegen -> text output.
//! Set `RUST_LOG=esc_compiler=debug` to see the pass logs.

use esc_ast::{Arguments, BinaryOperator, Expression, PropertyDefinition};
use esc_codegen::{CodegenError, UnsupportedPolicy};
use esc_compiler::{parse_options, Compilation, CompilerError, CompilerOptions};
use esc_resolver::LexicalScope;
use esc_types::{EsValue, Reference};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper: compile expressions with default options and return the program
/// text.
fn compile_text(expressions: &mut [Expression]) -> String {
    init_tracing();
    let mut compilation = Compilation::default();
    compilation.compile_all(expressions).unwrap();
    compilation.program().to_text()
}

fn sum(lhs: i64, rhs: i64) -> Expression {
    Expression::binary(BinaryOperator::Plus, Expression::integer(lhs), Expression::integer(rhs))
}

// ============================================================================
// Basic Compilation
// ============================================================================

#[test]
fn test_compile_nothing() {
    assert_eq!(compile_text(&mut []), "");
}

#[test]
fn test_compile_assignment_of_sum() {
    let mut exprs = [Expression::assign(Expression::identifier("a"), sum(1, 2))];
    let expected = "\
$0 = Core::Reference(\"a\")
$1 = Core::Number(2)
$2 = Core::Number(1)
$3 = Core::Plus($1, $2)
$4 = Core::Assign($0, $3)
";
    assert_eq!(compile_text(&mut exprs), expected);
}

#[test]
fn test_registers_span_expressions() {
    let mut exprs = [
        Expression::assign(Expression::identifier("a"), Expression::integer(1)),
        Expression::binary(BinaryOperator::Multiply, Expression::identifier("a"), Expression::integer(3)),
    ];
    let expected = "\
$0 = Core::Reference(\"a\")
$1 = Core::Number(1)
$2 = Core::Assign($0, $1)
$3 = Core::Number(3)
$4 = Core::Reference(\"a\")
$5 = Core::Multiply($3, $4)
";
    assert_eq!(compile_text(&mut exprs), expected);
}

#[test]
fn test_registers_restart_per_compilation() {
    let first = compile_text(&mut [Expression::integer(1)]);
    let second = compile_text(&mut [Expression::integer(1)]);
    assert_eq!(first, second);
    assert_eq!(first, "$0 = Core::Number(1)\n");
}

#[test]
fn test_operator_reads_most_recent_registers() {
    // The right operand is an assignment, so the subtraction picks up its
    // store register and the reference to `x`.
    let mut exprs = [
        Expression::assign(Expression::identifier("x"), Expression::integer(5)),
        Expression::binary(
            BinaryOperator::Subtract,
            Expression::identifier("x"),
            Expression::assign(Expression::identifier("a"), Expression::integer(1)),
        ),
    ];
    let expected = "\
$0 = Core::Reference(\"x\")
$1 = Core::Number(5)
$2 = Core::Assign($0, $1)
$3 = Core::Reference(\"a\")
$4 = Core::Number(1)
$5 = Core::Assign($3, $4)
$6 = Core::Reference(\"x\")
$7 = Core::Subtract($5, $6)
";
    assert_eq!(compile_text(&mut exprs), expected);
}

#[test]
fn test_every_operator() {
    for (op, name) in [
        (BinaryOperator::Plus, "Plus"),
        (BinaryOperator::Subtract, "Subtract"),
        (BinaryOperator::Multiply, "Multiply"),
        (BinaryOperator::Divide, "Divide"),
        (BinaryOperator::Modulo, "Modulo"),
    ] {
        let text = compile_text(&mut [Expression::binary(op, Expression::integer(1), Expression::integer(2))]);
        assert!(text.ends_with(&format!("$2 = Core::{}($0, $1)\n", name)), "{}", text);
    }
}

// ============================================================================
// Scope
// ============================================================================

#[test]
fn test_assignment_enters_scope() {
    let mut compilation = Compilation::default();
    let mut expr = Expression::assign(Expression::identifier("greeting"), Expression::string("hi"));
    assert!(compilation.compile_expression(&mut expr).unwrap());

    let reference = compilation.scope().resolve("greeting").unwrap();
    assert_eq!(reference.base(), EsValue::string("hi"));
    assert!(reference.has_primitive_base());
}

#[test]
fn test_string_assignment_uses_previous_register() {
    // The string literal emits nothing, so the store reads the register
    // just produced for the target.
    let text = compile_text(&mut [Expression::assign(Expression::identifier("s"), Expression::string("v"))]);
    assert_eq!(text, "$0 = Core::Reference(\"s\")\n$1 = Core::Assign($0, $0)\n");
}

// ============================================================================
// Resolution Failures
// ============================================================================

#[test]
fn test_unresolved_expression_is_skipped() {
    let mut compilation = Compilation::default();
    let mut expr = Expression::binary(BinaryOperator::Plus, Expression::identifier("nope"), Expression::integer(1));
    assert!(!compilation.compile_expression(&mut expr).unwrap());
    assert!(compilation.program().is_empty());
    assert!(compilation.diagnostics().contains_code(2304));
}

#[test]
fn test_compile_all_reports_resolution_errors() {
    let mut compilation = Compilation::default();
    let mut exprs = [
        Expression::identifier("missing"),
        Expression::assign(Expression::identifier("x"), Expression::integer(5)),
    ];
    let err = compilation.compile_all(&mut exprs).unwrap_err();
    match err {
        CompilerError::ResolutionError(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, 2304);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The second expression still compiled.
    assert_eq!(compilation.program().len(), 3);
}

#[test]
fn test_codegen_runs_when_not_stopping() {
    let options = CompilerOptions {
        stop_on_resolution_error: false,
        ..CompilerOptions::default()
    };
    let mut compilation = Compilation::new(options);
    let mut expr = Expression::identifier("unknown");
    assert!(!compilation.compile_expression(&mut expr).unwrap());
    assert_eq!(compilation.program().to_text(), "$0 = Core::Reference(\"unknown\")\n");
}

#[test]
fn test_call_compiles_with_warning_only() {
    let mut compilation = Compilation::default();
    let mut define = Expression::assign(Expression::identifier("f"), Expression::integer(0));
    compilation.compile_expression(&mut define).unwrap();

    let arguments = Arguments {
        list: vec![esc_ast::AssignmentExpression::new(Some(Expression::integer(1)), None)],
    };
    let mut call = Expression::call(Expression::identifier("f"), Some(arguments));
    assert!(compilation.compile_expression(&mut call).unwrap());
    assert!(compilation.diagnostics().contains_code(7001));
    assert!(!compilation.diagnostics().has_errors());
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_error_policy_rejects_object_literal() {
    let options = parse_options(r#"{ "unsupportedConstructs": "error" }"#).unwrap();
    assert_eq!(options.unsupported_constructs, UnsupportedPolicy::Error);

    let mut compilation = Compilation::new(options);
    let key = Expression::LiteralPropertyName(esc_ast::LiteralPropertyName::new(Expression::string("k")));
    let mut expr = Expression::object(vec![PropertyDefinition::new(key, Some(Expression::integer(1)))]);
    let err = compilation.compile_expression(&mut expr).unwrap_err();
    assert!(matches!(err, CompilerError::CodegenError(CodegenError::Unsupported(_))));
}

#[test]
fn test_failed_codegen_does_not_consume_registers() {
    let options = parse_options(r#"{ "unsupportedConstructs": "error" }"#).unwrap();
    let mut compilation = Compilation::new(options);
    let mut rejected = Expression::assign(Expression::identifier("a"), Expression::object(Vec::new()));
    assert!(compilation.compile_expression(&mut rejected).is_err());

    assert!(compilation.compile_expression(&mut Expression::integer(7)).unwrap());
    assert_eq!(compilation.program().to_text(), "$0 = Core::Number(7)\n");
}

#[test]
fn test_missing_rhs_does_not_consume_registers() {
    let options = CompilerOptions {
        stop_on_resolution_error: false,
        ..CompilerOptions::default()
    };
    let mut compilation = Compilation::new(options);
    let mut incomplete = Expression::Assignment(esc_ast::AssignmentExpression::new(Some(Expression::identifier("a")), None));
    let err = compilation.compile_expression(&mut incomplete).unwrap_err();
    assert!(matches!(err, CompilerError::CodegenError(CodegenError::MissingOperand(_))));
    assert!(compilation.diagnostics().contains_code(1109));

    assert!(compilation.compile_expression(&mut Expression::integer(7)).unwrap());
    assert_eq!(compilation.program().to_text(), "$0 = Core::Number(7)\n");
}

#[test]
fn test_register_prefix() {
    let options = parse_options(r#"{ "registerPrefix": "%r" }"#).unwrap();
    let mut compilation = Compilation::new(options);
    compilation.compile_all(&mut [sum(4, 5)]).unwrap();
    assert_eq!(
        compilation.program().to_text(),
        "%r0 = Core::Number(5)\n%r1 = Core::Number(4)\n%r2 = Core::Plus(%r0, %r1)\n"
    );
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_write_to_matches_text() {
    let mut compilation = Compilation::default();
    compilation.compile_all(&mut [sum(1, 2), sum(3, 4)]).unwrap();

    let mut out = Vec::new();
    compilation.program().write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), compilation.program().to_text());
}

#[test]
fn test_deeply_nested_sum() {
    let mut expr = Expression::integer(0);
    for i in 1..=50 {
        expr = Expression::binary(BinaryOperator::Plus, expr, Expression::integer(i));
    }
    let mut compilation = Compilation::default();
    compilation.compile_all(&mut [expr]).unwrap();
    // 51 literals and 50 operators.
    assert_eq!(compilation.program().len(), 101);
}
