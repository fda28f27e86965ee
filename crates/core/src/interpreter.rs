use crate::category::Category;
use crate::command::{Command, Parameter};
use crate::definition::{CommandDefinition, ParameterDefinition};
use crate::error::{InterpretError, InterpretResult};
use crate::protocol::Protocol;
use crate::registry::CommandRegistry;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::{debug, trace};

/// Prefix character followed by the command name, both optionally preceded
/// by whitespace.
static COMMAND_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S)\s*([A-Za-z0-9_]*)").unwrap());

impl CommandRegistry {
    /// Interprets a line of user input against the registered definitions.
    ///
    /// The command is identified from the head of the text, then parameters
    /// are extracted one at a time from what remains. Each extraction removes
    /// the matched text, so later patterns never see text that was already
    /// consumed. Text that no parameter matches is ignored.
    pub fn interpret(&self, text: &str) -> InterpretResult<Command<'_>> {
        let mut working = text.trim().to_string();
        let definition = self.extract_command(text, &mut working)?;

        let mut protocol = definition.protocol();
        let mut parameters = Vec::new();
        while !working.is_empty() {
            match next_parameter(definition, &mut working, &mut protocol)? {
                Some(parameter) => parameters.push(parameter),
                None => break,
            }
        }

        if !working.is_empty() {
            trace!(
                "Ignoring unmatched text '{}' for command '{}'",
                working,
                definition.name()
            );
        }

        if protocol.is_none() && parameters.is_empty() && !definition.parameters().is_empty() {
            return Err(InterpretError::AmbiguousCommand(text.to_string()));
        }

        debug!(
            "Interpreted '{}' as {:?} with {} parameter(s)",
            text.trim(),
            protocol.map(|p| p.name()),
            parameters.len()
        );
        Ok(Command::new(
            text.to_string(),
            protocol,
            definition,
            parameters,
        ))
    }

    fn extract_command<'a>(
        &'a self,
        text: &str,
        working: &mut String,
    ) -> InterpretResult<&'a CommandDefinition> {
        let unknown = || InterpretError::UnknownCommand(text.to_string());

        let (head, prefix, name) = {
            let captures = COMMAND_HEAD.captures(working.as_str()).ok_or_else(unknown)?;
            let head = captures.get(0).ok_or_else(unknown)?.range();
            let prefix = captures
                .get(1)
                .and_then(|m| m.as_str().chars().next())
                .ok_or_else(unknown)?;
            let name = captures.get(2).map_or("", |m| m.as_str()).to_string();
            (head, prefix, name)
        };

        let category = Category::from_prefix(prefix).map_err(|_| unknown())?;
        let definition = self.get_by_category(category, &name).ok_or_else(unknown)?;
        trace!("Resolved '{}{}' to command '{}'", prefix, name, definition.name());

        consume(working, head);
        Ok(definition)
    }
}

/// Finds the first declared parameter present in the working copy and removes
/// its text. Returns `None` once no parameter matches.
fn next_parameter<'a>(
    definition: &'a CommandDefinition,
    working: &mut String,
    protocol: &mut Option<Protocol>,
) -> InterpretResult<Option<Parameter<'a>>> {
    for metadata in definition.parameters() {
        let parameter = if metadata.is_positional() {
            let text = std::mem::take(working);
            let value = coerce(metadata, &text)?;
            Parameter::new(text, metadata, vec![value])
        } else {
            let Some((range, values)) = match_tagged(metadata, working)? else {
                continue;
            };
            let text = working[range.clone()].to_string();
            consume(working, range);
            Parameter::new(text, metadata, values)
        };

        if protocol.is_none() {
            *protocol = metadata.protocol();
        }
        trace!("Extracted parameter '{}' from '{}'", metadata.name(), parameter.text());
        return Ok(Some(parameter));
    }

    Ok(None)
}

/// Applies a tagged parameter's pattern. A match only counts when capture
/// group 1, without any `=` separator, equals the declared tag.
fn match_tagged(
    metadata: &ParameterDefinition,
    working: &str,
) -> InterpretResult<Option<(Range<usize>, Vec<Value>)>> {
    let Some(captures) = metadata.pattern().captures(working) else {
        return Ok(None);
    };
    let (Some(whole), Some(tag)) = (captures.get(0), captures.get(1)) else {
        return Ok(None);
    };
    if tag.as_str().replace('=', "").trim() != metadata.tag() {
        return Ok(None);
    }

    let values = captures
        .iter()
        .skip(2)
        .flatten()
        .map(|m| coerce(metadata, m.as_str().trim()))
        .collect::<InterpretResult<Vec<_>>>()?;

    Ok(Some((whole.range(), values)))
}

fn coerce(metadata: &ParameterDefinition, raw: &str) -> InterpretResult<Value> {
    Value::coerce(raw, metadata.value_type()).map_err(|_| InterpretError::InvalidParameterValue {
        parameter_name: metadata.name().to_string(),
        raw: raw.to_string(),
        value_type: metadata.value_type(),
    })
}

fn consume(working: &mut String, range: Range<usize>) {
    working.replace_range(range, "");
    *working = working.trim().to_string();
}
