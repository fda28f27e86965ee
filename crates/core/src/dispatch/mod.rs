mod help;
mod response;

pub use help::HelpExecutable;
pub use response::{CommandResponse, CommandStatus};

use crate::command::Command;
use crate::error::DispatchError;
use crate::protocol::Protocol;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Runs interpreted commands of one protocol.
pub trait Executable: Send + Sync {
    fn protocol(&self) -> Protocol;

    fn execute(&self, command: &Command<'_>) -> CommandResponse;
}

/// Routes interpreted commands to the executable registered for their
/// protocol.
#[derive(Default)]
pub struct Dispatcher {
    executables: FxHashMap<Protocol, Box<dyn Executable>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an executable under its protocol. An executable already
    /// registered for that protocol is replaced.
    pub fn register_executable(&mut self, executable: Box<dyn Executable>) {
        let protocol = executable.protocol();
        if self.executables.insert(protocol, executable).is_some() {
            warn!("Replaced the executable registered for {}", protocol);
        }
    }

    pub fn is_registered(&self, protocol: Protocol) -> bool {
        self.executables.contains_key(&protocol)
    }

    pub fn dispatch(&self, command: &Command<'_>) -> Result<CommandResponse, DispatchError> {
        let protocol = command
            .protocol()
            .ok_or_else(|| DispatchError::MissingProtocol(command.metadata().name().to_string()))?;
        let executable = self
            .executables
            .get(&protocol)
            .ok_or(DispatchError::NoExecutable(protocol))?;

        debug!("Dispatching '{}' to {}", command.metadata().name(), protocol);
        Ok(executable.execute(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CommandDefinition, ParameterDefinition};
    use crate::registry::CommandRegistry;

    struct Quit(&'static str);

    impl Executable for Quit {
        fn protocol(&self) -> Protocol {
            Protocol::QUIT
        }

        fn execute(&self, _command: &Command<'_>) -> CommandResponse {
            let mut response = CommandResponse::processed();
            response.reply(self.0);
            response
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register_all([
                CommandDefinition::new("quit").with_protocol(Protocol::QUIT),
                CommandDefinition::new("afk").with_protocol(Protocol::AFK),
            ])
            .unwrap();
        registry
    }

    #[test]
    fn dispatches_by_protocol() {
        let registry = registry();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_executable(Box::new(Quit("bye")));

        let command = registry.interpret("/quit").unwrap();
        let response = dispatcher.dispatch(&command).unwrap();
        assert_eq!(response.status(), CommandStatus::Processed);
        assert_eq!(response.messages(), ["bye"]);
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = registry();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_executable(Box::new(Quit("first")));
        dispatcher.register_executable(Box::new(Quit("second")));

        let command = registry.interpret("/quit").unwrap();
        let response = dispatcher.dispatch(&command).unwrap();
        assert_eq!(response.messages(), ["second"]);
    }

    #[test]
    fn missing_executable_is_an_error() {
        let registry = registry();
        let dispatcher = Dispatcher::new();

        let command = registry.interpret("/afk").unwrap();
        assert!(!dispatcher.is_registered(Protocol::AFK));
        assert!(matches!(
            dispatcher.dispatch(&command),
            Err(DispatchError::NoExecutable(p)) if p == Protocol::AFK
        ));
    }

    #[test]
    fn command_without_protocol_is_not_dispatched() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                CommandDefinition::new("status")
                    .then(
                        ParameterDefinition::new("away", "-afk", r"(-afk)")
                            .unwrap()
                            .with_protocol(Protocol::AFK),
                    )
                    .then(ParameterDefinition::new("verbose", "-v", r"(-v)").unwrap()),
            )
            .unwrap();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_executable(Box::new(Quit("bye")));

        let command = registry.interpret("/status -v").unwrap();
        assert!(matches!(
            dispatcher.dispatch(&command),
            Err(DispatchError::MissingProtocol(name)) if name == "status"
        ));
    }
}
