use crate::definition::{CommandDefinition, ParameterDefinition};
use crate::protocol::Protocol;
use crate::value::Value;

/// A parameter extracted from user input.
#[derive(Debug, Clone)]
pub struct Parameter<'a> {
    text: String,
    metadata: &'a ParameterDefinition,
    values: Vec<Value>,
}

impl<'a> Parameter<'a> {
    pub(crate) fn new(text: String, metadata: &'a ParameterDefinition, values: Vec<Value>) -> Self {
        Self {
            text,
            metadata,
            values,
        }
    }

    /// The substring of the input this parameter was extracted from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metadata(&self) -> &'a ParameterDefinition {
        self.metadata
    }

    pub fn name(&self) -> &'a str {
        self.metadata.name()
    }

    /// Empty when the pattern only captured the tag.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn value(&self) -> Option<&Value> {
        self.values.first()
    }
}

/// A fully interpreted command, ready to be dispatched on its protocol.
#[derive(Debug, Clone)]
pub struct Command<'a> {
    text: String,
    protocol: Option<Protocol>,
    metadata: &'a CommandDefinition,
    parameters: Vec<Parameter<'a>>,
}

impl<'a> Command<'a> {
    pub(crate) fn new(
        text: String,
        protocol: Option<Protocol>,
        metadata: &'a CommandDefinition,
        parameters: Vec<Parameter<'a>>,
    ) -> Self {
        Self {
            text,
            protocol,
            metadata,
            parameters,
        }
    }

    /// The original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` when the definition only declares protocols on parameters and
    /// the extracted parameters carry none of them.
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    pub fn metadata(&self) -> &'a CommandDefinition {
        self.metadata
    }

    pub fn parameters(&self) -> &[Parameter<'a>] {
        &self.parameters
    }

    /// The first extracted parameter whose definition has the given name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter<'a>> {
        self.parameters
            .iter()
            .find(|parameter| parameter.name() == name)
    }
}
