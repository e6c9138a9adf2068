//! Serializable translator configuration.
//!
//! Only the path blacklist can be configured from a file. The alias table is
//! keyed by symbol handles, which exist only inside a running engine, so it is
//! registered programmatically with [`crate::TypeTranslator::with_alias`].

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ```
/// use tscc_translator::TranslatorOptions;
///
/// let options = TranslatorOptions::from_json_str(r#"{ "pathBlacklist": ["vendor/jquery.d.ts"] }"#).unwrap();
/// assert_eq!(options.path_blacklist.as_deref(), Some(&["vendor/jquery.d.ts".to_string()][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslatorOptions {
    /// Source paths whose symbols translate to `?`. `None` disables the
    /// blacklist entirely; an empty list still suppresses symbols without
    /// declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_blacklist: Option<Vec<String>>,
}

impl TranslatorOptions {
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
