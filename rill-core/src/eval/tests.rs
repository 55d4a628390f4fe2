use crate::{
    environment::prelude::{BindingError, Environment, Value, FALSE, NULL, TRUE},
    parser::prelude::{parse_module, BinaryOperator},
    utils::prelude::SrcSpan,
};

use super::error::{RuntimeError, RuntimeErrorType};
use super::eval;

fn eval_src(src: &str, env: &mut Environment) -> Result<Value, RuntimeError> {
    let module = parse_module(src).expect("source should parse");

    eval(module, env)
}

fn eval_fresh(src: &str) -> Result<Value, RuntimeError> {
    eval_src(src, &mut Environment::with_globals())
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval_fresh("2 + 3 * 4"), Ok(Value::Number { value: 14.0 }));
    assert_eq!(
        eval_fresh("(2 + 3) * 4"),
        Ok(Value::Number { value: 20.0 })
    );
    assert_eq!(eval_fresh("10 % 3"), Ok(Value::Number { value: 1.0 }));
    assert_eq!(eval_fresh("7 / 2"), Ok(Value::Number { value: 3.5 }));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval_fresh("1 / 0"),
        Ok(Value::Number {
            value: f64::INFINITY
        })
    );

    match eval_fresh("0 / 0") {
        Ok(Value::Number { value }) => assert!(value.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

#[test]
fn test_empty_program_is_null() {
    assert_eq!(eval_fresh(""), Ok(NULL));
}

#[test]
fn test_last_statement_wins() {
    assert_eq!(
        eval_fresh("1 + 1; 2 + 2; 3 + 3;"),
        Ok(Value::Number { value: 6.0 })
    );
}

#[test]
fn test_declaration_and_lookup() {
    assert_eq!(
        eval_fresh("let x = 5; x + 1"),
        Ok(Value::Number { value: 6.0 })
    );
    assert_eq!(eval_fresh("let x; x"), Ok(NULL));
}

#[test]
fn test_declaration_yields_its_value() {
    assert_eq!(eval_fresh("let x = 5;"), Ok(Value::Number { value: 5.0 }));
}

#[test]
fn test_assignment() {
    assert_eq!(
        eval_fresh("let x = 1; x = x + 41; x"),
        Ok(Value::Number { value: 42.0 })
    );
    assert_eq!(
        eval_fresh("let a = 1; let b = 2; a = b = 7; a + b"),
        Ok(Value::Number { value: 14.0 })
    );
}

#[test]
fn test_globals() {
    assert_eq!(eval_fresh("true"), Ok(TRUE));
    assert_eq!(eval_fresh("false"), Ok(FALSE));
    assert_eq!(eval_fresh("null"), Ok(NULL));
}

#[test]
fn test_object_literal() {
    assert_eq!(
        eval_fresh("let a = 1; { a, b: 2 + 3 }"),
        Ok(Value::Object {
            properties: vec![
                ("a".to_string(), Value::Number { value: 1.0 }),
                ("b".to_string(), Value::Number { value: 5.0 }),
            ]
        })
    );
}

#[test]
fn test_undeclared_variable() {
    let err = eval_fresh("missing").unwrap_err();

    assert_eq!(
        err.error,
        RuntimeErrorType::Binding {
            error: BindingError::NotDeclared {
                name: "missing".to_string()
            }
        }
    );
    assert_eq!(err.location, SrcSpan { start: 0, end: 7 });
}

#[test]
fn test_error_location_inside_expression() {
    let err = eval_fresh("1 + missing").unwrap_err();

    assert_eq!(err.location, SrcSpan { start: 4, end: 11 });
}

#[test]
fn test_redeclaration() {
    let err = eval_fresh("let x = 1; let x = 2;").unwrap_err();

    assert_eq!(
        err.error,
        RuntimeErrorType::Binding {
            error: BindingError::AlreadyDeclared {
                name: "x".to_string()
            }
        }
    );
}

#[test]
fn test_constant_reassignment() {
    let err = eval_fresh("const x = 1; x = 2;").unwrap_err();

    assert_eq!(
        err.error,
        RuntimeErrorType::Binding {
            error: BindingError::AssignmentToConstant {
                name: "x".to_string()
            }
        }
    );
}

#[test]
fn test_invalid_assignment_target() {
    let err = eval_fresh("1 = 2").unwrap_err();

    assert_eq!(err.error, RuntimeErrorType::InvalidAssignmentTarget);
    assert_eq!(err.location, SrcSpan { start: 0, end: 1 });
}

#[test]
fn test_unsupported_operands() {
    let err = eval_fresh("let o = { a: 1 }; o + 2").unwrap_err();

    match err.error {
        RuntimeErrorType::UnsupportedOperands { operator, .. } => {
            assert_eq!(operator, BinaryOperator::Add);
        }
        other => panic!("expected unsupported operands, got {other:?}"),
    }
}

#[test]
fn test_environment_persists_between_runs() {
    let mut env = Environment::with_globals();

    assert_eq!(
        eval_src("let counter = 1;", &mut env),
        Ok(Value::Number { value: 1.0 })
    );
    assert_eq!(
        eval_src("counter = counter + 1", &mut env),
        Ok(Value::Number { value: 2.0 })
    );
    assert_eq!(env.lookup("counter"), Ok(Value::Number { value: 2.0 }));
}

#[test]
fn test_runs_are_deterministic() {
    let src = "let x = 2; let y = x * 3; { x, y, z: y - x }";

    let first = eval_src(src, &mut Environment::with_globals());
    let second = eval_src(src, &mut Environment::with_globals());

    assert_eq!(first, second);
    assert!(first.is_ok());
}
