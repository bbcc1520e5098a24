//! Core library for the `ezbio` profile lookup tool.
//!
//! This library resolves an e-z.bio username to a raw JSON profile by
//! running an external lookup script, validating that the script's output
//! decodes into the known [`profile::UserProfile`] shape, and re-emitting
//! the captured bytes unmodified.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module defining the entry point logic.
/// This wires argument parsing, configuration, and the lookup pipeline together.
pub mod entry_point;

/// Module defining the error taxonomy.
/// Every failure mode is terminal and renders as a single-line JSON object.
pub mod error;

/// Module implementing the profile fetching capability.
/// The external script invocation lives behind the [`fetcher::ProfileFetcher`] trait.
pub mod fetcher;

/// Module for output emission and stderr diagnostics.
pub mod output;

/// Module defining the `UserProfile` decode target used as the validation gate.
pub mod profile;

/// Module for username normalization and validation.
pub mod username;
