#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandStatus {
    #[default]
    Unprocessed,
    Processed,
    Failed,
}

/// Outcome of executing a command: a status plus the lines to show the user.
#[derive(Debug, Clone, Default)]
pub struct CommandResponse {
    status: CommandStatus,
    messages: Vec<String>,
    errors: Vec<String>,
}

impl CommandResponse {
    pub fn new(status: CommandStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn processed() -> Self {
        Self::new(CommandStatus::Processed)
    }

    pub fn failed(error: impl Into<String>) -> Self {
        let mut response = Self::new(CommandStatus::Failed);
        response.add_error(error);
        response
    }

    pub fn status(&self) -> CommandStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CommandStatus) {
        self.status = status;
    }

    pub fn reply(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
