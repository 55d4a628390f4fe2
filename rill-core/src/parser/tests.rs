use crate::utils::prelude::SrcSpan;

use super::prelude::{
    parse_module, BinaryOperator, Expression, ParseError, ParseErrorType, Statement,
};

fn parse_expression(src: &str) -> Expression {
    let module = parse_module(src).unwrap();

    match module.program.statements.into_iter().next() {
        Some(Statement::Expression(expression)) => expression,
        other => panic!("expected a single expression statement, got {other:?}"),
    }
}

#[test]
fn test_precedence() {
    let expression = parse_expression("1 + 2 * 3");

    let binary = match expression {
        Expression::Binary(binary) => binary,
        other => panic!("expected binary, got {other:?}"),
    };

    assert_eq!(binary.operator, BinaryOperator::Add);
    assert!(matches!(
        *binary.left,
        Expression::NumericLiteral { value, .. } if value == 1.0
    ));
    assert!(matches!(
        &*binary.right,
        Expression::Binary(inner) if inner.operator == BinaryOperator::Multiply
    ));
}

#[test]
fn test_left_associativity() {
    let expression = parse_expression("10 - 2 - 3");

    assert_eq!(expression.to_string(), "10 - 2 - 3");

    let binary = match expression {
        Expression::Binary(binary) => binary,
        other => panic!("expected binary, got {other:?}"),
    };

    assert_eq!(binary.operator, BinaryOperator::Subtract);
    assert!(matches!(
        &*binary.left,
        Expression::Binary(inner) if inner.operator == BinaryOperator::Subtract
    ));
}

#[test]
fn test_grouping() {
    let expression = parse_expression("(1 + 2) * 3");

    let binary = match expression {
        Expression::Binary(binary) => binary,
        other => panic!("expected binary, got {other:?}"),
    };

    assert_eq!(binary.operator, BinaryOperator::Multiply);
    assert!(matches!(
        &*binary.left,
        Expression::Binary(inner) if inner.operator == BinaryOperator::Add
    ));
}

#[test]
fn test_assignment_is_right_associative() {
    let expression = parse_expression("a = b = 2;");

    let assignment = match expression {
        Expression::Assignment(assignment) => assignment,
        other => panic!("expected assignment, got {other:?}"),
    };

    assert!(matches!(
        &*assignment.target,
        Expression::Identifier(ident) if ident.value == "a"
    ));
    assert!(matches!(&*assignment.value, Expression::Assignment(_)));
}

#[test]
fn test_declarations() -> Result<(), ParseError> {
    let module = parse_module("let x = 5; const y = 10; let z;")?;
    let statements = module.program.statements;

    assert_eq!(statements.len(), 3);

    let declaration = match &statements[0] {
        Statement::VarDeclaration(declaration) => declaration,
        other => panic!("expected declaration, got {other:?}"),
    };

    assert_eq!(declaration.name.value, "x");
    assert!(!declaration.constant);
    assert!(declaration.value.is_some());
    assert_eq!(declaration.location, SrcSpan { start: 0, end: 10 });

    assert_eq!(statements[1].to_string(), "const y = 10");
    assert_eq!(statements[2].to_string(), "let z");

    Ok(())
}

#[test]
fn test_uninitialized_constant() {
    let err = parse_module("const y;").unwrap_err();

    assert_eq!(err.error, ParseErrorType::UninitializedConstant);
    assert_eq!(err.span, SrcSpan { start: 0, end: 8 });
}

#[test]
fn test_declaration_without_name() {
    let err = parse_module("let = 5;").unwrap_err();

    assert_eq!(err.error, ParseErrorType::ExpectedIdent);
}

#[test]
fn test_missing_semicolon() {
    let err = parse_module("let x = 5 let y = 6;").unwrap_err();

    assert_eq!(err.error, ParseErrorType::MissingSemicolon);
}

#[test]
fn test_missing_semicolon_between_expressions() {
    let err = parse_module("1 + 2 3 + 4;").unwrap_err();

    assert_eq!(err.error, ParseErrorType::MissingSemicolon);
}

#[test]
fn test_terminator_optional_at_end() -> Result<(), ParseError> {
    let module = parse_module("1 + 2 * 3")?;

    assert_eq!(module.program.statements.len(), 1);
    assert_eq!(module.program.to_string(), "1 + 2 * 3");

    Ok(())
}

#[test]
fn test_object_literal() {
    let expression = parse_expression("{ a, b: 2, c: 1 + 2 };");

    let object = match expression {
        Expression::Object(object) => object,
        other => panic!("expected object, got {other:?}"),
    };

    assert_eq!(object.properties.len(), 3);

    assert_eq!(object.properties[0].key.value, "a");
    assert!(object.properties[0].value.is_none());

    assert_eq!(object.properties[1].key.value, "b");
    assert!(matches!(
        object.properties[1].value,
        Some(Expression::NumericLiteral { value, .. }) if value == 2.0
    ));

    assert_eq!(object.properties[2].key.value, "c");
    assert!(matches!(
        object.properties[2].value,
        Some(Expression::Binary(_))
    ));
}

#[test]
fn test_empty_object_literal() {
    let expression = parse_expression("{};");

    assert!(matches!(
        &expression,
        Expression::Object(object) if object.properties.is_empty()
    ));
}

#[test]
fn test_object_trailing_comma_is_rejected() {
    let err = parse_module("{ a, b: 2, };").unwrap_err();

    assert_eq!(err.error, ParseErrorType::ExpectedIdent);
}

#[test]
fn test_unclosed_group() {
    let err = parse_module("(1 + 2").unwrap_err();

    assert_eq!(err.error, ParseErrorType::UnexpectedEof);
}

#[test]
fn test_expression_out_of_nothing() {
    let err = parse_module("let x = ;").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::UnexpectedToken { .. }));
}

#[test]
fn test_lex_error_is_forwarded() {
    let err = parse_module("let x = 1.2.3;").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::LexError { .. }));
}

#[test]
fn test_display() -> Result<(), ParseError> {
    let module = parse_module("let x = 5; x = x + 1; { a, b: x * 2 };")?;

    assert_eq!(
        module.program.to_string(),
        "let x = 5; x = x + 1; { a, b: x * 2 }"
    );

    Ok(())
}
