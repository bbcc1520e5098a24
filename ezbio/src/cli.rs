//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.ezbio.toml):
  Create this file in your project root to set defaults.

  [ezbio]
  interpreter = \"python3\"               # Script interpreter executable
  script = \"src/app/api/python/e-z.py\"  # Lookup script, relative to cwd
  normalize = false                      # Normalize @handles and bio URLs
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ezbio - Look up an e-z.bio user profile and emit its raw JSON",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Username to look up. Taken as-is unless --normalize is given.
    pub username: String,

    /// Interpreter executable used to run the lookup script
    /// (overrides the config file and the platform default).
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Path to the lookup script. Relative paths are joined with the
    /// working directory.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Accept an @handle or a full https://e-z.bio/ URL and reduce it to a
    /// bare username before invoking the script.
    #[arg(long)]
    pub normalize: bool,

    /// Enable verbose diagnostics on stderr (never touches stdout).
    #[arg(short, long)]
    pub verbose: bool,
}
