//! Error taxonomy for the lookup pipeline.
//!
//! Every failure mode is terminal: the caller prints the error as a
//! single-line JSON object on stdout and exits non-zero. There is no retry,
//! no fallback interpreter, and no error chaining beyond embedding the
//! underlying message text.

use thiserror::Error;

/// A terminal lookup failure.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Wrong argument count or shape on the command line.
    #[error("Username required")]
    Usage,

    /// The current working directory could not be determined.
    /// Rendered as the underlying message alone, with no prefix.
    #[error("{0}")]
    Environment(String),

    /// The external script failed to start or exited with failure.
    #[error("Failed to execute Python script: {0}")]
    Invocation(String),

    /// The captured output was not valid JSON matching the expected shape.
    #[error("Failed to unmarshal data: {0}")]
    Validation(String),

    /// A profile URL passed with `--normalize` did not contain a username.
    #[error("Invalid e-z.bio URL")]
    InvalidUrl,

    /// A normalized username contained characters outside `[\w\-.]`.
    #[error("Invalid username format")]
    InvalidUsername,
}

impl LookupError {
    /// Renders the error as a single-line JSON object.
    ///
    /// The message is JSON-encoded so embedded OS error text (quotes,
    /// backslashes in paths) cannot break the object.
    #[must_use]
    pub fn to_json_line(&self) -> String {
        format!(
            "{{\"error\": {}}}",
            serde_json::Value::String(self.to_string())
        )
    }
}
