pub mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::error::*;
    pub use super::{eval, interpret, interpret_from_stream, interpret_src};
}

use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::{BindingError, Environment, Value, NULL},
    parser::prelude::{
        parse_module, parse_module_from_stream, Assignment, Binary, BinaryOperator, Expression,
        Module, ObjectLiteral, Statement, VarDeclaration,
    },
    utils::prelude::{Error, SrcSpan},
};

use error::{RuntimeError, RuntimeErrorType};

/// Evaluates a whole file against a fresh read of the source. The
/// source is kept around for error reporting.
pub fn interpret(path: PathBuf, env: &mut Environment) -> Result<Value, Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => return Err(Error::StdIo { err: err.kind() }),
    };

    interpret_src(path, &src, env)
}

pub fn interpret_src(path: PathBuf, src: &str, env: &mut Environment) -> Result<Value, Error> {
    let module = match parse_module(src) {
        Ok(module) => module,
        Err(err) => {
            return Err(Error::Parse {
                path,
                src: src.to_string(),
                error: err,
            })
        }
    };

    eval(module, env).map_err(|err| Error::Runtime {
        path,
        src: src.to_string(),
        error: err,
    })
}

/// Lexes straight off a buffered reader without loading the file
/// first. The characters seen so far are still accumulated, so a
/// diagnostic can point into the source.
pub fn interpret_from_stream(path: PathBuf, env: &mut Environment) -> Result<Value, Error> {
    let file = match std::fs::File::open(path.clone()) {
        Ok(file) => file,
        Err(err) => return Err(Error::StdIo { err: err.kind() }),
    };

    let file_size = file
        .metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?
        .len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars().map_while(|c| c.ok()).map(|c| {
        src.push(c);
        c
    });

    let module = match parse_module_from_stream(stream) {
        Ok(module) => module,
        Err(err) => {
            return Err(Error::Parse {
                path,
                src,
                error: err,
            })
        }
    };

    eval(module, env).map_err(|err| Error::Runtime {
        path,
        src,
        error: err,
    })
}

/// Evaluates a module top to bottom. The result is the value of the
/// last statement, or `Null` for an empty program.
pub fn eval(module: Module, env: &mut Environment) -> Result<Value, RuntimeError> {
    let mut last = NULL;

    for statement in module.program.statements {
        last = eval_statement(statement, env)?;
    }

    Ok(last)
}

fn eval_statement(statement: Statement, env: &mut Environment) -> Result<Value, RuntimeError> {
    match statement {
        Statement::VarDeclaration(declaration) => eval_var_declaration(declaration, env),
        Statement::Expression(expression) => eval_expression(expression, env),
    }
}

fn eval_var_declaration(
    declaration: VarDeclaration,
    env: &mut Environment,
) -> Result<Value, RuntimeError> {
    let location = declaration.location;

    let value = match declaration.value {
        Some(expression) => eval_expression(expression, env)?,
        None => NULL,
    };

    env.declare(declaration.name.value, value, declaration.constant)
        .map_err(|error| binding_error(error, location))
}

fn eval_expression(expression: Expression, env: &mut Environment) -> Result<Value, RuntimeError> {
    match expression {
        Expression::Identifier(ident) => env
            .lookup(&ident.value)
            .map_err(|error| binding_error(error, ident.location)),
        Expression::NumericLiteral { value, .. } => Ok(Value::Number { value }),
        Expression::Binary(binary) => eval_binary(binary, env),
        Expression::Assignment(assignment) => eval_assignment(assignment, env),
        Expression::Object(object) => eval_object(object, env),
    }
}

fn eval_binary(binary: Binary, env: &mut Environment) -> Result<Value, RuntimeError> {
    let location = binary.location;

    let left = eval_expression(*binary.left, env)?;
    let right = eval_expression(*binary.right, env)?;

    match (left, right) {
        (Value::Number { value: left }, Value::Number { value: right }) => {
            // Division and modulo follow IEEE 754, a zero divisor
            // yields an infinity or NaN rather than an error.
            let value = match binary.operator {
                BinaryOperator::Add => left + right,
                BinaryOperator::Subtract => left - right,
                BinaryOperator::Multiply => left * right,
                BinaryOperator::Divide => left / right,
                BinaryOperator::Modulo => left % right,
            };

            Ok(Value::Number { value })
        }
        (left, right) => Err(RuntimeError {
            error: RuntimeErrorType::UnsupportedOperands {
                operator: binary.operator,
                left: left.value_type(),
                right: right.value_type(),
            },
            location,
        }),
    }
}

fn eval_assignment(assignment: Assignment, env: &mut Environment) -> Result<Value, RuntimeError> {
    let name = match *assignment.target {
        Expression::Identifier(ident) => ident.value,
        target => {
            return Err(RuntimeError {
                error: RuntimeErrorType::InvalidAssignmentTarget,
                location: target.location(),
            })
        }
    };

    let location = assignment.location;
    let value = eval_expression(*assignment.value, env)?;

    env.assign(&name, value)
        .map_err(|error| binding_error(error, location))
}

fn eval_object(object: ObjectLiteral, env: &mut Environment) -> Result<Value, RuntimeError> {
    let mut properties = Vec::with_capacity(object.properties.len());

    for property in object.properties {
        let value = match property.value {
            Some(expression) => eval_expression(expression, env)?,
            // Shorthand, the key doubles as a variable lookup.
            None => env
                .lookup(&property.key.value)
                .map_err(|error| binding_error(error, property.key.location))?,
        };

        properties.push((property.key.value, value));
    }

    Ok(Value::Object { properties })
}

fn binding_error(error: BindingError, location: SrcSpan) -> RuntimeError {
    RuntimeError {
        error: RuntimeErrorType::Binding { error },
        location,
    }
}
