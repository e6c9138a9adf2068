//! Type model for the tscc type translator.
//!
//! This crate is the translator's read-only view of the external
//! type-checking engine:
//!
//! - **Handles**: `TypeId`, `SymbolId`, `NodeIndex` (identity equality)
//! - **Flags**: `TypeFlags`, `ObjectFlags` (bitflags) and `symbol_flags`
//! - **Records**: `TypeInfo`, `Symbol`, `Signature`, `Declaration`
//! - **Queries**: the `TypeChecker` and `SymbolWriter` traits
//! - **`TypeStore`**: an in-memory engine implementing `TypeChecker`
//! - **Debug rendering** of types and symbols for diagnostics

pub mod checker;
pub mod debug;
pub mod store;
pub mod symbols;
pub mod types;

pub use checker::{SymbolWriter, TypeChecker};
pub use debug::{symbol_to_debug_string, type_to_debug_string};
pub use store::TypeStore;
pub use symbols::{
    CALL_MEMBER_NAME, Declaration, INDEX_MEMBER_NAME, Symbol, SymbolId,
    TYPE_LITERAL_SYMBOL_NAME, symbol_flags,
};
pub use types::{
    IndexKind, NodeIndex, OBJECT_FLAG_NAMES, ObjectFlags, Signature, SignatureKind,
    TYPE_FLAG_NAMES, TypeFlags, TypeId, TypeInfo,
};
