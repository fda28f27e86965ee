//! Loads command definitions from a TOML catalog.
//!
//! ```toml
//! [header]
//! author = "..."
//!
//! [[command]]
//! name = "help"
//! aliases = ["h"]
//! protocol = "help"
//!
//! [[command.parameter]]
//! name = "name"
//! tag = "-name"
//! pattern = '(-name\s*=?)\s*(\w+)'
//! ```

#![deny(rust_2018_idioms)]

mod error;
mod protocols;

pub use error::CatalogError;
pub use protocols::ProtocolTable;

use parley_core::{CommandDefinition, ParameterDefinition, ValueType};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Descriptive information about a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Header {
    pub author: String,
    pub company: String,
    pub version: String,
    pub description: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    header: Header,
    #[serde(default, rename = "command")]
    commands: Vec<CommandEntry>,
}

#[derive(Deserialize)]
struct CommandEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    syntax: String,
    #[serde(default)]
    aliases: Vec<String>,
    protocol: Option<String>,
    #[serde(default, rename = "parameter")]
    parameters: Vec<ParameterEntry>,
}

#[derive(Deserialize)]
struct ParameterEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tag: String,
    pattern: Option<String>,
    #[serde(rename = "type")]
    value_type: Option<String>,
    protocol: Option<String>,
    #[serde(default)]
    examples: Vec<String>,
}

impl ParameterEntry {
    fn into_definition(self, protocols: &ProtocolTable) -> Result<ParameterDefinition, CatalogError> {
        let mut parameter = match &self.pattern {
            Some(pattern) => ParameterDefinition::new(self.name, self.tag, pattern)?,
            None if !self.tag.is_empty() => {
                return Err(CatalogError::MissingPattern {
                    parameter: self.name,
                    tag: self.tag,
                });
            }
            None => ParameterDefinition::positional(self.name),
        };
        parameter = parameter.with_description(self.description);
        if let Some(value_type) = self.value_type {
            parameter = parameter.with_value_type(value_type.parse::<ValueType>()?);
        }
        if let Some(protocol) = self.protocol {
            parameter = parameter.with_protocol(protocols.resolve(&protocol)?);
        }
        Ok(self
            .examples
            .into_iter()
            .fold(parameter, ParameterDefinition::with_example))
    }
}

impl CommandEntry {
    fn into_definition(self, protocols: &ProtocolTable) -> Result<CommandDefinition, CatalogError> {
        let mut command = CommandDefinition::new(self.name)
            .with_description(self.description)
            .with_syntax(self.syntax);
        command = self.aliases.into_iter().fold(command, CommandDefinition::alias);
        if let Some(protocol) = self.protocol {
            command = command.with_protocol(protocols.resolve(&protocol)?);
        }
        for parameter in self.parameters {
            command = command.then(parameter.into_definition(protocols)?);
        }
        Ok(command)
    }
}

/// The content of one command catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    header: Header,
    definitions: Vec<CommandDefinition>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>, protocols: &ProtocolTable) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&source, protocols)?;
        debug!(
            "Loaded {} command definitions from {}",
            catalog.definitions.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn parse(source: &str, protocols: &ProtocolTable) -> Result<Catalog, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        let definitions = file
            .commands
            .into_iter()
            .map(|entry| entry.into_definition(protocols))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog {
            header: file.header,
            definitions,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }

    pub fn get_by_name(&self, name: &str) -> Option<&CommandDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.name() == name)
    }

    pub fn find_by_alias(&self, alias: &str) -> Vec<&CommandDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.aliases().iter().any(|a| a == alias))
            .collect()
    }

    pub fn into_definitions(self) -> Vec<CommandDefinition> {
        self.definitions
    }
}
