use crate::protocol::Protocol;
use crate::value::ValueType;
use thiserror::Error;

/// Raised while building a command or parameter definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Parameter '{parameter}' has an invalid pattern: {source}")]
    InvalidPattern {
        parameter: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("A command is already defined for protocol: {0}")]
    DuplicateRegistration(Protocol),
    #[error("Command '{command}' declares no protocol on itself or any of its parameters")]
    MissingProtocol { command: String },
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unable to interpret command from: {0}")]
    AmbiguousCommand(String),
    #[error("Invalid value '{raw}' for parameter '{parameter_name}', expected {value_type}")]
    InvalidParameterValue {
        parameter_name: String,
        raw: String,
        value_type: ValueType,
    },
}

/// Raised when a name does not map to any variant of one of the closed
/// protocol enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTypeError {
    #[error("Unknown command category: {0}")]
    UnknownCategory(String),
    #[error("Unknown command group: {0}")]
    UnknownGroup(String),
    #[error("Unknown command domain: {0}")]
    UnknownDomain(String),
    #[error("Unknown parameter type: {0}")]
    UnknownValueType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{raw}' is not a valid {expected} value")]
    Coercion { raw: String, expected: ValueType },
    #[error("Value {found} has the wrong type, expected {expected}")]
    WrongType { found: String, expected: ValueType },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No executable registered for protocol: {0}")]
    NoExecutable(Protocol),
    #[error("Command '{0}' was interpreted without a protocol")]
    MissingProtocol(String),
}

pub type InterpretResult<T> = Result<T, InterpretError>;
