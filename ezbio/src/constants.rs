//! Shared constants and lazily compiled regex patterns.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Name of the configuration file searched for from the working directory upward.
pub const CONFIG_FILENAME: &str = ".ezbio.toml";

/// Interpreter executable used on every platform except Windows.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Interpreter executable used on Windows.
pub const WINDOWS_INTERPRETER: &str = "python";

/// Default location of the lookup script, relative to the working directory.
///
/// Built from components so the separators are correct on every platform.
#[must_use]
pub fn default_script_path() -> PathBuf {
    ["src", "app", "api", "python", "e-z.py"].iter().collect()
}

/// Regex accepting a bare username: non-empty, word characters, `-` and `.` only.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^[\w\-.]+$").expect("Invalid username regex pattern"))
}

/// Regex extracting the username segment of an `https://e-z.bio/<user>` URL.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn bio_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^https://e-z\.bio/([^/]+)").expect("Invalid bio URL regex pattern")
    })
}
