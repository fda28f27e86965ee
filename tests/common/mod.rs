#![allow(dead_code)]

use parley_catalog::{Catalog, ProtocolTable};
use parley_core::{
    Category, CommandDefinition, CommandRegistry, Domain, Group, ParameterDefinition, Protocol,
    ValueType,
};

pub const CATALOG: &str = include_str!("../../commands.toml");

pub const REPEAT: Protocol =
    Protocol::new("REPEAT", Category::Debug, Group::System, Domain::Application);
pub const KICK: Protocol =
    Protocol::new("KICK", Category::SuperAdministration, Group::Chat, Domain::Application);
pub const BAN: Protocol =
    Protocol::new("BAN", Category::SuperAdministration, Group::Chat, Domain::Application);

pub fn protocols() -> ProtocolTable {
    let mut table = ProtocolTable::with_defaults();
    table.register(REPEAT);
    table
}

pub fn catalog() -> Catalog {
    Catalog::parse(CATALOG, &protocols()).unwrap()
}

/// The default catalog plus a debug command with typed parameters.
pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register_all(catalog().into_definitions()).unwrap();
    registry.register(repeat()).unwrap();
    registry
}

pub fn repeat() -> CommandDefinition {
    CommandDefinition::new("repeat")
        .with_description("Repeats a message")
        .with_protocol(REPEAT)
        .then(
            ParameterDefinition::new("times", "-n", r"(-n)\s+(\S+)")
                .unwrap()
                .with_value_type(ValueType::Integer),
        )
        .then(
            ParameterDefinition::new("loud", "-loud", r"(-loud\s*=?)\s*(\w+)")
                .unwrap()
                .with_value_type(ValueType::Boolean),
        )
        .then(ParameterDefinition::positional("message"))
}

/// A command whose protocol depends on the parameter given.
pub fn moderate() -> CommandDefinition {
    CommandDefinition::new("moderate")
        .alias("mod")
        .then(
            ParameterDefinition::new("kick", "-kick", r"(-kick)\s+(\w+)")
                .unwrap()
                .with_protocol(KICK),
        )
        .then(
            ParameterDefinition::new("ban", "-ban", r"(-ban)\s+(\w+)")
                .unwrap()
                .with_protocol(BAN),
        )
}

/// Generates one test per case, named after the case.
#[macro_export]
macro_rules! coercion_cases {
    ( $( $name:ident: $raw:expr, $value_type:expr => $expected:expr; )* ) => {
        $(
            paste::paste! {
                #[test]
                fn [<coerce_ $name>]() {
                    assert_eq!(
                        parley_core::Value::coerce($raw, $value_type).ok(),
                        $expected
                    );
                }
            }
        )*
    };
}
