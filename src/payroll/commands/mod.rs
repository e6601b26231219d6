use crate::config::PayrollConfig;

pub mod access;
pub mod annual;
pub mod assign;
pub mod config;
pub mod parse;
pub mod raise;
pub mod team;
pub mod wage;

/// How a message is shown. Failures are errors, never messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn at(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Warning, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Plain output lines, printed as-is.
    pub lines: Vec<String>,
    pub config: Option<PayrollConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn with_config(mut self, config: PayrollConfig) -> Self {
        self.config = Some(config);
        self
    }
}
