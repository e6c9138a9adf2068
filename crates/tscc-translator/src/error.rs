//! Fatal translation errors.
//!
//! Everything a translation can degrade from goes through the diagnostics
//! sink instead. An error here means the engine handed the translator a graph
//! it was never taught to handle, and the result for the whole type is void.

use std::path::PathBuf;
use tscc_model::{SymbolId, TypeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// No dispatch arm (and no union/enum-literal fallback) matches the kind
    /// flags. The translator needs updating for a new engine type kind.
    #[error("unknown type flags 0x{flags:x} on {debug}")]
    UnrecognizedTypeFlags { flags: u32, debug: String },

    /// A reference whose target is the reference itself. The engine should
    /// have resolved a more specific type before this point.
    #[error("reference loop in {debug}")]
    ReferenceLoop { type_id: TypeId, debug: String },

    #[error("type {0:?} is not known to the type checker")]
    MissingType(TypeId),

    #[error("symbol {0:?} is not known to the type checker")]
    MissingSymbol(SymbolId),
}

/// Result type for translation.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

/// Errors loading [`crate::TranslatorOptions`].
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read translator options from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translator options: {0}")]
    Parse(#[from] serde_json::Error),
}
