use crate::category::named_enum;
use crate::error::{ParseTypeError, ValueError};
use std::fmt;
use std::str::FromStr;

/// Declared type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Text,
    Integer,
    Long,
    Boolean,
}

named_enum!(ValueType, UnknownValueType, {
    Text => "string",
    Integer => "integer",
    Long => "long",
    Boolean => "boolean",
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i32),
    Long(i64),
    Boolean(bool),
}

impl Value {
    /// Converts a raw matched string into a value of the declared type.
    /// Booleans only accept `true` and `false`, in any case.
    pub fn coerce(raw: &str, value_type: ValueType) -> Result<Value, ValueError> {
        let invalid = || ValueError::Coercion {
            raw: raw.to_string(),
            expected: value_type,
        };

        Ok(match value_type {
            ValueType::Text => Value::Text(raw.to_string()),
            ValueType::Integer => Value::Integer(raw.parse::<i32>().map_err(|_| invalid())?),
            ValueType::Long => Value::Long(raw.parse::<i64>().map_err(|_| invalid())?),
            ValueType::Boolean => {
                if raw.eq_ignore_ascii_case("true") {
                    Value::Boolean(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    Value::Boolean(false)
                } else {
                    return Err(invalid());
                }
            }
        })
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Text(_) => ValueType::Text,
            Value::Integer(_) => ValueType::Integer,
            Value::Long(_) => ValueType::Long,
            Value::Boolean(_) => ValueType::Boolean,
        }
    }

    fn type_error(&self, expected: ValueType) -> ValueError {
        ValueError::WrongType {
            found: format!("{:?}", self),
            expected,
        }
    }

    pub fn as_text(&self) -> Result<&str, ValueError> {
        match self {
            Value::Text(s) => Ok(s),
            _ => Err(self.type_error(ValueType::Text)),
        }
    }

    pub fn as_integer(&self) -> Result<i32, ValueError> {
        match self {
            Value::Integer(i) => Ok(*i),
            _ => Err(self.type_error(ValueType::Integer)),
        }
    }

    pub fn as_long(&self) -> Result<i64, ValueError> {
        match self {
            Value::Long(l) => Ok(*l),
            _ => Err(self.type_error(ValueType::Long)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, ValueError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.type_error(ValueType::Boolean)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Long(l) => write!(f, "{l}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_coercion() {
        assert_eq!(Value::coerce("42", ValueType::Integer), Ok(Value::Integer(42)));
        assert_eq!(Value::coerce("-7", ValueType::Integer), Ok(Value::Integer(-7)));
        assert_eq!(
            Value::coerce("abc", ValueType::Integer),
            Err(ValueError::Coercion {
                raw: "abc".to_string(),
                expected: ValueType::Integer,
            })
        );
        // Out of range for 32 bits but fine as a long.
        assert!(Value::coerce("4294967296", ValueType::Integer).is_err());
        assert_eq!(
            Value::coerce("4294967296", ValueType::Long),
            Ok(Value::Long(4_294_967_296))
        );
    }

    #[test]
    fn boolean_coercion_is_strict() {
        assert_eq!(Value::coerce("TRUE", ValueType::Boolean), Ok(Value::Boolean(true)));
        assert_eq!(Value::coerce("False", ValueType::Boolean), Ok(Value::Boolean(false)));
        assert!(Value::coerce("yes", ValueType::Boolean).is_err());
        assert!(Value::coerce("1", ValueType::Boolean).is_err());
    }

    #[test]
    fn text_is_unchanged() {
        assert_eq!(
            Value::coerce("  spaced out ", ValueType::Text),
            Ok(Value::Text("  spaced out ".to_string()))
        );
    }

    #[test]
    fn accessors_check_type() {
        let value = Value::Integer(3);
        assert_eq!(value.as_integer(), Ok(3));
        assert!(matches!(
            value.as_text(),
            Err(ValueError::WrongType {
                expected: ValueType::Text,
                ..
            })
        ));
        assert_eq!(value.value_type(), ValueType::Integer);
    }

    #[test]
    fn value_type_names() {
        assert_eq!("LONG".parse(), Ok(ValueType::Long));
        assert_eq!(ValueType::Text.to_string(), "string");
        assert!("float".parse::<ValueType>().is_err());
    }
}
