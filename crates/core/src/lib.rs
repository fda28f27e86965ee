#![deny(rust_2018_idioms)]

pub mod category;
pub mod command;
pub mod definition;
pub mod dispatch;
pub mod error;
mod interpreter;
pub mod protocol;
pub mod registry;
pub mod value;

pub use category::{Category, Domain, Group};
pub use command::{Command, Parameter};
pub use definition::{CommandDefinition, ParameterDefinition};
pub use protocol::Protocol;
pub use registry::CommandRegistry;
pub use value::{Value, ValueType};
