use super::{CommandResponse, CommandStatus, Executable};
use crate::category::Category;
use crate::command::Command;
use crate::definition::CommandDefinition;
use crate::protocol::Protocol;
use itertools::Itertools;

/// Answers help commands from a snapshot of the registered definitions.
///
/// Without parameters every command is listed. The `category` parameter lists
/// the command categories and their prefixes, `set` lists the commands of one
/// category and `name` prints the details of one command.
pub struct HelpExecutable {
    protocol: Protocol,
    definitions: Vec<CommandDefinition>,
}

impl HelpExecutable {
    pub fn new(protocol: Protocol, definitions: Vec<CommandDefinition>) -> Self {
        Self {
            protocol,
            definitions,
        }
    }

    fn list_commands<'a>(
        response: &mut CommandResponse,
        definitions: impl Iterator<Item = &'a CommandDefinition>,
    ) {
        for definition in definitions.sorted_by(|a, b| a.name().cmp(b.name())) {
            let name = if definition.aliases().is_empty() {
                definition.name().to_string()
            } else {
                format!("{} ({})", definition.name(), definition.aliases().join(", "))
            };
            response.reply(format!(" [{:<15}] {}", name, definition.description()));
        }
    }

    fn all_commands(&self, response: &mut CommandResponse) {
        response.reply("Available commands are:");
        Self::list_commands(response, self.definitions.iter());
    }

    fn categories(response: &mut CommandResponse) {
        response.reply("Available command categories are:");
        for category in Category::ALL {
            response.reply(format!(" [{}] {}", category.prefix(), category));
        }
    }

    fn category_commands(&self, response: &mut CommandResponse, category: &str) {
        let category = match category.parse::<Category>() {
            Ok(category) => category,
            Err(err) => {
                response.set_status(CommandStatus::Failed);
                response.add_error(err.to_string());
                return;
            }
        };

        response.reply(format!("Commands in category '{}':", category));
        Self::list_commands(
            response,
            self.definitions.iter().filter(|definition| {
                definition
                    .protocols()
                    .iter()
                    .any(|protocol| protocol.category() == category)
            }),
        );
    }

    fn command_help(&self, response: &mut CommandResponse, name: &str) {
        let Some(definition) = self
            .definitions
            .iter()
            .find(|definition| definition.name().eq_ignore_ascii_case(name))
        else {
            response.set_status(CommandStatus::Failed);
            response.add_error(format!("Unknown command: {}", name));
            return;
        };

        response.reply(format!(
            "Help on command: '{}' - {}",
            definition.name(),
            definition.description()
        ));
        if !definition.syntax().is_empty() {
            response.reply(format!("Syntax: {}", definition.syntax()));
        }

        if definition.aliases().is_empty() {
            response.reply("No alias defined!");
        } else {
            response.reply("Aliases:");
            for alias in definition.aliases() {
                response.reply(format!("|   {}", alias));
            }
        }

        if definition.parameters().is_empty() {
            response.reply("No parameter defined!");
            return;
        }
        response.reply("Parameters:");
        for parameter in definition.parameters() {
            response.reply(format!(
                " - '{}' - {}",
                parameter.name(),
                parameter.description()
            ));
            response.reply(format!(" |__ RegExp   : {}", parameter.pattern().as_str()));
            if parameter.examples().is_empty() {
                response.reply(" |__ No example defined!");
            } else {
                response.reply(" |__ Examples :");
                for example in parameter.examples() {
                    response.reply(format!("     |_ {}", example));
                }
            }
        }
    }
}

impl Executable for HelpExecutable {
    fn protocol(&self) -> Protocol {
        self.protocol
    }

    fn execute(&self, command: &Command<'_>) -> CommandResponse {
        let mut response = CommandResponse::processed();
        if command.parameters().is_empty() {
            self.all_commands(&mut response);
            return response;
        }

        for parameter in command.parameters() {
            let value = parameter.value().map(ToString::to_string).unwrap_or_default();
            match parameter.name() {
                "category" => Self::categories(&mut response),
                "set" => self.category_commands(&mut response, &value),
                "name" => self.command_help(&mut response, &value),
                _ => {}
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ParameterDefinition;
    use crate::registry::CommandRegistry;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register_all([
                CommandDefinition::new("help")
                    .alias("h")
                    .with_description("Displays help")
                    .with_protocol(Protocol::HELP)
                    .then(ParameterDefinition::new("category", "-cat", r"(-cat)").unwrap())
                    .then(ParameterDefinition::new("set", "-set", r"(-set=?)\s*(\w+)").unwrap())
                    .then(
                        ParameterDefinition::new("name", "-name", r"(-name=?)\s*(\w+)")
                            .unwrap()
                            .with_description("Command to describe")
                            .with_example("/help -name=quit"),
                    ),
                CommandDefinition::new("quit")
                    .with_description("Leaves")
                    .with_protocol(Protocol::QUIT),
            ])
            .unwrap();
        registry
    }

    fn run(registry: &CommandRegistry, text: &str) -> CommandResponse {
        let help = HelpExecutable::new(Protocol::HELP, registry.all().to_vec());
        help.execute(&registry.interpret(text).unwrap())
    }

    #[test]
    fn lists_all_commands() {
        let registry = registry();
        let response = run(&registry, "/help");
        assert_eq!(response.status(), CommandStatus::Processed);
        assert_eq!(response.messages()[0], "Available commands are:");
        assert_eq!(response.messages().len(), 3);
        assert!(response.messages()[1].contains("help (h)"));
        assert!(response.messages()[2].contains("Leaves"));
    }

    #[test]
    fn lists_categories() {
        let registry = registry();
        let response = run(&registry, "/h -cat");
        assert_eq!(response.messages().len(), 1 + Category::ALL.len());
        assert!(response.messages().contains(&" [%] super_administration".to_string()));
    }

    #[test]
    fn describes_one_command() {
        let registry = registry();
        let response = run(&registry, "/help -name=HELP");
        let messages = response.messages();
        assert_eq!(messages[0], "Help on command: 'help' - Displays help");
        assert!(messages.contains(&"|   h".to_string()));
        assert!(messages.contains(&"     |_ /help -name=quit".to_string()));
    }

    #[test]
    fn unknown_names_fail() {
        let registry = registry();
        let response = run(&registry, "/help -name=nothing");
        assert_eq!(response.status(), CommandStatus::Failed);
        assert_eq!(response.errors(), ["Unknown command: nothing"]);

        let response = run(&registry, "/help -set=bogus");
        assert_eq!(response.status(), CommandStatus::Failed);
    }

    #[test]
    fn lists_commands_of_a_category() {
        let registry = registry();
        let response = run(&registry, "/help -set=normal");
        assert_eq!(response.messages().len(), 3);
        let response = run(&registry, "/help -set=debug");
        assert_eq!(response.messages().len(), 1);
    }
}
