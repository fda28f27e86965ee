use crate::category::{Category, Domain, Group};
use crate::definition::CommandDefinition;
use crate::error::RegistryError;
use crate::protocol::Protocol;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Stores command definitions keyed by protocol.
///
/// Definitions are add-only. A definition without a command level protocol
/// is indexed once for every protocol carried by its parameters, but is only
/// stored (and returned by the lookups) once.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
    by_protocol: FxHashMap<Protocol, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), RegistryError> {
        let protocols = definition.protocols();
        if protocols.is_empty() {
            return Err(RegistryError::MissingProtocol {
                command: definition.name().to_string(),
            });
        }

        // Check everything up front so a rejected definition leaves no trace.
        for (i, protocol) in protocols.iter().enumerate() {
            if self.by_protocol.contains_key(protocol) || protocols[..i].contains(protocol) {
                return Err(RegistryError::DuplicateRegistration(*protocol));
            }
        }

        let index = self.definitions.len();
        for protocol in &protocols {
            self.by_protocol.insert(*protocol, index);
        }
        debug!(
            "Registered command '{}' for protocols {:?}",
            definition.name(),
            protocols
        );
        self.definitions.push(definition);
        Ok(())
    }

    /// Registers each definition in order, stopping at the first failure.
    /// Definitions registered before the failure stay registered.
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> Result<(), RegistryError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    pub fn all(&self) -> &[CommandDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn find_by(&self, matches: impl Fn(&Protocol) -> bool) -> Vec<&CommandDefinition> {
        self.definitions
            .iter()
            .filter(|definition| match definition.protocol() {
                Some(protocol) => matches(&protocol),
                None => definition
                    .parameters()
                    .iter()
                    .filter_map(|parameter| parameter.protocol())
                    .any(|protocol| matches(&protocol)),
            })
            .collect()
    }

    pub fn find_by_category(&self, category: Category) -> Vec<&CommandDefinition> {
        self.find_by(|protocol| protocol.category() == category)
    }

    pub fn find_by_group(&self, group: Group) -> Vec<&CommandDefinition> {
        self.find_by(|protocol| protocol.group() == group)
    }

    pub fn find_by_domain(&self, domain: Domain) -> Vec<&CommandDefinition> {
        self.find_by(|protocol| protocol.domain() == domain)
    }

    pub fn get_by_protocol(
        &self,
        protocol: Protocol,
        name_or_alias: &str,
    ) -> Option<&CommandDefinition> {
        let index = *self.by_protocol.get(&protocol)?;
        let definition = &self.definitions[index];
        definition.is_named(name_or_alias).then_some(definition)
    }

    pub fn get_by_category(
        &self,
        category: Category,
        name_or_alias: &str,
    ) -> Option<&CommandDefinition> {
        self.find_by_category(category)
            .into_iter()
            .find(|definition| definition.is_named(name_or_alias))
    }
}
