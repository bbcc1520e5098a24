//! The `UserProfile` decode target.
//!
//! The record is never constructed manually and never re-serialized. It
//! exists only to confirm that the lookup script's output is well-formed
//! JSON matching the known shape; the caller emits the original captured
//! bytes, so unknown extra fields survive verbatim in the final output.

use crate::error::LookupError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// The fixed JSON shape the lookup script's output must satisfy.
///
/// Every field defaults when absent, matching the tolerant decode of the
/// upstream data source: `{}` is a valid (empty) profile, while a type
/// mismatch on a present field is a validation failure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Identifier the profile was looked up by.
    pub username: String,
    /// Display name.
    pub name: String,
    /// View counter.
    pub views: i64,
    /// Free-text description.
    pub description: String,
    /// Free-text title.
    pub title: String,
    /// Role/tier labels, in display order.
    pub ranks: Vec<String>,
    /// Loosely structured status blob.
    pub presence: HashMap<String, Value>,
    /// Loosely structured profile blob (avatar, banner, background).
    pub profile: HashMap<String, Value>,
    /// Social link entries.
    pub socials: Vec<HashMap<String, String>>,
    /// User-defined link entries.
    pub custom_links: Vec<HashMap<String, String>>,
    /// Embedded media entries.
    pub songs: Vec<HashMap<String, String>>,
    /// Styling key/value pairs.
    pub theme: HashMap<String, String>,
    /// Feature flags.
    pub features: HashMap<String, bool>,
}

/// Decodes captured script output into a [`UserProfile`].
///
/// This is purely a validation gate: callers discard the record and emit the
/// original bytes on success, so the gate can be tightened later without
/// affecting output fidelity.
pub fn decode_profile(bytes: &[u8]) -> Result<UserProfile, LookupError> {
    serde_json::from_slice(bytes).map_err(|err| LookupError::Validation(err.to_string()))
}
