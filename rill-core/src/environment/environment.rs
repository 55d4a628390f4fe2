use std::collections::HashMap;

use thiserror::Error;

use super::value::{Value, FALSE, NULL, TRUE};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    #[error("Variable `{name}` has already been declared")]
    AlreadyDeclared { name: String },
    #[error("Variable `{name}` has not been declared")]
    NotDeclared { name: String },
    #[error("Cannot assign to constant `{name}`")]
    AssignmentToConstant { name: String },
}

#[derive(Debug, Clone, PartialEq)]
struct Binding {
    value: Value,
    constant: bool,
}

/// A flat mutable store of named bindings. Declarations are unique,
/// constants are write-once.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment pre-seeded with the `true`, `false` and `null`
    /// constants. These are ordinary bindings, the language has no
    /// literal syntax for them.
    pub fn with_globals() -> Self {
        let mut env = Self::new();

        let _ = env.declare("true".to_string(), TRUE, true);
        let _ = env.declare("false".to_string(), FALSE, true);
        let _ = env.declare("null".to_string(), NULL, true);

        env
    }

    pub fn declare(
        &mut self,
        name: String,
        value: Value,
        constant: bool,
    ) -> Result<Value, BindingError> {
        if self.store.contains_key(&name) {
            return Err(BindingError::AlreadyDeclared { name });
        }

        let _ = self.store.insert(
            name,
            Binding {
                value: value.clone(),
                constant,
            },
        );

        Ok(value)
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, BindingError> {
        match self.store.get_mut(name) {
            Some(binding) if binding.constant => Err(BindingError::AssignmentToConstant {
                name: name.to_string(),
            }),
            Some(binding) => {
                binding.value = value.clone();

                Ok(value)
            }
            None => Err(BindingError::NotDeclared {
                name: name.to_string(),
            }),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Value, BindingError> {
        match self.store.get(name) {
            Some(binding) => Ok(binding.value.clone()),
            None => Err(BindingError::NotDeclared {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_then_lookup() {
        let mut env = Environment::new();

        assert_eq!(
            env.declare("x".to_string(), Value::Number { value: 1.0 }, false),
            Ok(Value::Number { value: 1.0 })
        );
        assert_eq!(env.lookup("x"), Ok(Value::Number { value: 1.0 }));
    }

    #[test]
    fn redeclaration_is_rejected() {
        let mut env = Environment::new();

        let _ = env.declare("x".to_string(), NULL, false);

        assert_eq!(
            env.declare("x".to_string(), TRUE, false),
            Err(BindingError::AlreadyDeclared {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn assignment_to_constant_is_rejected() {
        let mut env = Environment::new();

        let _ = env.declare("x".to_string(), TRUE, true);

        assert_eq!(
            env.assign("x", FALSE),
            Err(BindingError::AssignmentToConstant {
                name: "x".to_string()
            })
        );
        assert_eq!(env.lookup("x"), Ok(TRUE));
    }

    #[test]
    fn assignment_to_undeclared_is_rejected() {
        let mut env = Environment::new();

        assert_eq!(
            env.assign("x", NULL),
            Err(BindingError::NotDeclared {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn globals_are_constants() {
        let mut env = Environment::with_globals();

        assert_eq!(env.lookup("true"), Ok(TRUE));
        assert_eq!(env.lookup("false"), Ok(FALSE));
        assert_eq!(env.lookup("null"), Ok(NULL));
        assert!(env.assign("true", NULL).is_err());
    }
}
