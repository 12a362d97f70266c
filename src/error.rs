use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Required tool '{0}' not found in PATH")]
    MissingTool(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} failed ({}): {command}", exit_label(.code))]
    CommandFailed {
        step: String,
        command: String,
        code: Option<i32>,
    },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Hub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
