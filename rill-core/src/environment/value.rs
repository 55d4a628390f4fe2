use std::fmt::Display;

pub const NULL: Value = Value::Null;
pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number { value: f64 },
    Boolean { value: bool },
    Object { properties: Vec<(String, Value)> },
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Number { .. } => ValueType::Number,
            Self::Boolean { .. } => ValueType::Boolean,
            Self::Object { .. } => ValueType::Object,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number { value } => write!(f, "{value}"),
            Self::Boolean { value } => write!(f, "{value}"),
            Self::Object { properties } => {
                if properties.is_empty() {
                    return write!(f, "{{}}");
                }

                let properties = properties
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<String>>();

                write!(f, "{{ {} }}", properties.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Number,
    Boolean,
    Object,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Number => write!(f, "Number"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Object => write!(f, "Object"),
        }
    }
}
