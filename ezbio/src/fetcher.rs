//! Profile fetching capability.
//!
//! The external lookup script is an implementation detail hidden behind
//! [`ProfileFetcher`], so the pipeline in `entry_point` can be exercised
//! with an in-memory fetcher and the script mechanism can be swapped out
//! without touching the validation or emission paths.

use crate::constants::{default_script_path, DEFAULT_INTERPRETER, WINDOWS_INTERPRETER};
use crate::error::LookupError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A source of raw profile bytes for a username.
pub trait ProfileFetcher {
    /// Fetches the raw profile payload for `username`.
    fn fetch(&self, username: &str) -> Result<Vec<u8>, LookupError>;
}

/// Resolves the interpreter executable name for an OS family.
///
/// A static two-way choice, not auto-detection of installed interpreters:
/// `windows` uses `python`, everything else uses `python3`. Parameterized on
/// the OS name so both branches are testable on any host.
#[must_use]
pub fn interpreter_for(os_family: &str) -> &'static str {
    if os_family == "windows" {
        WINDOWS_INTERPRETER
    } else {
        DEFAULT_INTERPRETER
    }
}

/// Fetches profiles by running the external lookup script through a script
/// interpreter, synchronously, with the username as the sole argument.
#[derive(Debug, Clone)]
pub struct ScriptFetcher {
    interpreter: String,
    script: PathBuf,
}

impl ScriptFetcher {
    /// Creates a fetcher from an explicit interpreter and script path.
    pub fn new(interpreter: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Creates a fetcher with the script path resolved against the current
    /// working directory.
    ///
    /// `interpreter` and `script` override the platform default and the
    /// built-in script location when given. A relative `script` is joined
    /// with the working directory; an absolute one stands alone.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Environment`] if the working directory cannot
    /// be determined.
    pub fn from_cwd(
        interpreter: Option<String>,
        script: Option<PathBuf>,
    ) -> Result<Self, LookupError> {
        let cwd =
            std::env::current_dir().map_err(|err| LookupError::Environment(err.to_string()))?;
        let interpreter = interpreter
            .unwrap_or_else(|| interpreter_for(std::env::consts::OS).to_owned());
        let script = cwd.join(script.unwrap_or_else(default_script_path));
        Ok(Self {
            interpreter,
            script,
        })
    }

    /// The interpreter executable this fetcher will run.
    #[must_use]
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// The resolved script path this fetcher will run.
    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl ProfileFetcher for ScriptFetcher {
    /// Runs `interpreter script username` and captures the child's stdout.
    ///
    /// Blocks until the child exits; no timeout is applied. Only stdout is
    /// captured. A spawn failure or a non-zero child exit maps to
    /// [`LookupError::Invocation`] with the underlying error text embedded.
    fn fetch(&self, username: &str) -> Result<Vec<u8>, LookupError> {
        let output = Command::new(&self.interpreter)
            .arg(&self.script)
            .arg(username)
            .output()
            .map_err(|err| LookupError::Invocation(err.to_string()))?;

        if !output.status.success() {
            return Err(LookupError::Invocation(output.status.to_string()));
        }

        Ok(output.stdout)
    }
}
