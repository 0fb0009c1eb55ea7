/// Represents the types of errors that may occur while running external tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The program could not be found.
    ToolNotFound,
    /// The program could not be started, or could not be waited on.
    ToolExecError,
    /// The program ran and exited with a non-zero status.
    ToolFailed,
}

/// Represents an error that occurred while running a tool, with an explanation.
#[derive(Debug)]
pub struct Error {
    /// Describes the kind of error that occurred.
    kind: ErrorKind,
    /// More explanation of error that occurred.
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
    pub fn tool_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ToolNotFound, message)
    }
    pub fn tool_exec(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ToolExecError, message)
    }
    pub fn tool_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ToolFailed, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
