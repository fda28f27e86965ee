mod common;

use common::{catalog, protocols};
use parley_catalog::{Catalog, CatalogError, ProtocolTable};
use parley_core::{CommandRegistry, Protocol};
use std::path::Path;

#[test]
fn default_catalog_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("commands.toml");
    let catalog = Catalog::load(&path, &ProtocolTable::with_defaults()).unwrap();
    assert_eq!(catalog.header().author, "The Parley Developers");
    assert_eq!(catalog.definitions().len(), 3);
}

#[test]
fn lookups_by_name_and_alias() {
    let catalog = catalog();
    let quit = catalog.get_by_name("quit").unwrap();
    assert_eq!(quit.protocol(), Some(Protocol::QUIT));

    let help = catalog.get_by_name("help").unwrap();
    assert_eq!(help.parameter_by_name("category").unwrap().tag(), "-cat");
    assert_eq!(catalog.find_by_alias("h")[0].name(), "help");
    assert_eq!(catalog.find_by_alias("exit")[0].name(), "quit");
}

#[test]
fn catalog_definitions_register_and_interpret() {
    let mut registry = CommandRegistry::new();
    registry.register_all(catalog().into_definitions()).unwrap();

    let command = registry.interpret("/h -set normal").unwrap();
    assert_eq!(command.protocol(), Some(Protocol::HELP));
    assert_eq!(
        command.parameter("set").and_then(|p| p.value()).map(ToString::to_string),
        Some("normal".to_string())
    );
}

#[test]
fn catalog_registered_twice_is_rejected() {
    let mut registry = CommandRegistry::new();
    registry.register_all(catalog().into_definitions()).unwrap();
    assert!(registry.register_all(catalog().into_definitions()).is_err());
    assert_eq!(registry.len(), 3);
}

#[test]
fn protocols_must_be_known_to_the_table() {
    let source = "[[command]]\nname = \"repeat\"\nprotocol = \"repeat\"\n";
    assert!(Catalog::parse(source, &protocols()).is_ok());
    assert!(matches!(
        Catalog::parse(source, &ProtocolTable::with_defaults()),
        Err(CatalogError::UnknownProtocol(_))
    ));
}
