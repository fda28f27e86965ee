use crate::error::DefinitionError;
use crate::protocol::Protocol;
use crate::value::ValueType;
use once_cell::sync::Lazy;
use regex::Regex;

static CATCH_ALL: Lazy<Regex> = Lazy::new(|| Regex::new("(.*)").unwrap());

/// Describes one parameter a command accepts.
///
/// A parameter with a non-empty tag is located by its pattern, where capture
/// group 1 is the tag literal and any following groups are the values. A
/// parameter with an empty tag is positional and takes whatever text is left.
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    name: String,
    description: String,
    tag: String,
    pattern: Regex,
    value_type: ValueType,
    protocol: Option<Protocol>,
    examples: Vec<String>,
}

impl ParameterDefinition {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| DefinitionError::InvalidPattern {
            parameter: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            description: String::new(),
            tag: tag.into(),
            pattern,
            value_type: ValueType::default(),
            protocol: None,
            examples: Vec::new(),
        })
    }

    /// A catch-all parameter with no tag.
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tag: String::new(),
            pattern: CATCH_ALL.clone(),
            value_type: ValueType::default(),
            protocol: None,
            examples: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_positional(&self) -> bool {
        self.tag.is_empty()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

/// Describes one command: how it is named and which parameters it takes.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
    name: String,
    description: String,
    syntax: String,
    aliases: Vec<String>,
    parameters: Vec<ParameterDefinition>,
    protocol: Option<Protocol>,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            syntax: String::new(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            protocol: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn then(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    /// The command level protocol, if the command declares one.
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    /// Every protocol this definition is registered under: the command level
    /// protocol when present, otherwise the protocols of its parameters.
    pub fn protocols(&self) -> Vec<Protocol> {
        match self.protocol {
            Some(protocol) => vec![protocol],
            None => self
                .parameters
                .iter()
                .filter_map(ParameterDefinition::protocol)
                .collect(),
        }
    }

    pub fn is_named(&self, name_or_alias: &str) -> bool {
        self.name == name_or_alias || self.aliases.iter().any(|alias| alias == name_or_alias)
    }

    pub fn parameter_by_name(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn parameter_by_tag(&self, tag: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|parameter| parameter.tag == tag)
    }
}
