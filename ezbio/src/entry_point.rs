//! Entry point logic shared by every binary.
//!
//! Control flow is strictly linear: parse args, load config, normalize the
//! username when asked, resolve the fetcher, run the lookup pipeline. Every
//! failure prints one JSON error object on the output writer and yields exit
//! code 1; only the textual `error` field distinguishes the failure modes.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::LookupError;
use crate::fetcher::{ProfileFetcher, ScriptFetcher};
use crate::{output, profile, username};
use anyhow::Result;
use clap::Parser;
use std::io::Write;

/// Runs the lookup with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error only if writing to stdout fails; lookup failures are
/// reported through the returned exit code.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the lookup with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error only if writing to the writer fails.
pub fn run_with_args_to<W: Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["ezbio".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    // Any other parse failure is a usage error, reported the
                    // same way the lookup failures are: JSON on stdout.
                    writeln!(writer, "{}", LookupError::Usage.to_json_line())?;
                    return Ok(1);
                }
            }
        }
    };

    let config = Config::load();

    if cli.verbose {
        output::verbose_note(&format!("ezbio v{}", env!("CARGO_PKG_VERSION")));
        if let Some(path) = &config.config_file_path {
            output::verbose_note(&format!("config: {}", path.display()));
        }
    }

    let normalize = cli.normalize || config.ezbio.normalize.unwrap_or(false);
    let username = if normalize {
        match normalized_username(&cli.username) {
            Ok(name) => name,
            Err(err) => {
                writeln!(writer, "{}", err.to_json_line())?;
                return Ok(1);
            }
        }
    } else {
        cli.username
    };

    let interpreter = cli.interpreter.or_else(|| config.ezbio.interpreter.clone());
    let script = cli.script.or_else(|| config.ezbio.script.clone());
    let fetcher = match ScriptFetcher::from_cwd(interpreter, script) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            writeln!(writer, "{}", err.to_json_line())?;
            return Ok(1);
        }
    };

    if cli.verbose {
        output::verbose_note(&format!("interpreter: {}", fetcher.interpreter()));
        output::verbose_note(&format!("script: {}", fetcher.script().display()));
        output::verbose_note(&format!("username: {username}"));
    }

    run_lookup(&fetcher, &username, writer)
}

/// The validate-then-emit pipeline, independent of the fetch mechanism.
///
/// Fetches the raw profile bytes, passes them through the decode gate, and
/// on success emits the original bytes unmodified plus a trailing newline.
/// The decoded record is discarded.
///
/// # Errors
///
/// Returns an error only if writing to the writer fails.
pub fn run_lookup<F: ProfileFetcher, W: Write>(
    fetcher: &F,
    username: &str,
    writer: &mut W,
) -> Result<i32> {
    let spinner = output::create_spinner();
    let fetched = fetcher.fetch(username);
    spinner.finish_and_clear();

    let bytes = match fetched {
        Ok(bytes) => bytes,
        Err(err) => {
            writeln!(writer, "{}", err.to_json_line())?;
            return Ok(1);
        }
    };

    if let Err(err) = profile::decode_profile(&bytes) {
        writeln!(writer, "{}", err.to_json_line())?;
        return Ok(1);
    }

    output::emit_raw(writer, &bytes)?;
    Ok(0)
}

/// Applies normalization and format validation to raw user input.
fn normalized_username(input: &str) -> Result<String, LookupError> {
    let name = username::extract(input)?;
    if !username::is_valid(&name) {
        return Err(LookupError::InvalidUsername);
    }
    Ok(name)
}
