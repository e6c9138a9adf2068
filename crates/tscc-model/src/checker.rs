//! The query surface of the external type-checking engine.
//!
//! The translator only ever reads through these two traits. An engine adapter
//! implements [`TypeChecker`]; [`crate::TypeStore`] is the in-memory
//! implementation used by embedders that build the graph themselves and by
//! tests.

use crate::symbols::{Symbol, SymbolId};
use crate::types::{IndexKind, NodeIndex, Signature, SignatureKind, TypeId, TypeInfo};

/// Read-only access to resolved types, symbols and signatures.
///
/// Lookups of handles the engine does not know return `None`; callers treat
/// that as an inconsistency in the engine state, not as a property of the
/// user's code.
pub trait TypeChecker {
    fn type_info(&self, type_id: TypeId) -> Option<&TypeInfo>;

    fn symbol(&self, symbol_id: SymbolId) -> Option<&Symbol>;

    /// The type of `symbol` as seen from `location`.
    fn type_of_symbol_at_location(&self, symbol: SymbolId, location: NodeIndex) -> Option<TypeId>;

    fn signatures_of_type(&self, type_id: TypeId, kind: SignatureKind) -> &[Signature] {
        self.type_info(type_id)
            .map(|info| info.signatures(kind))
            .unwrap_or(&[])
    }

    fn index_type_of_type(&self, type_id: TypeId, kind: IndexKind) -> Option<TypeId> {
        self.type_info(type_id)
            .and_then(|info| info.index_type(kind))
    }

    /// Write the display form of `symbol` (qualified as needed when seen from
    /// `enclosing`) into `writer`.
    fn build_symbol_display(
        &self,
        symbol: SymbolId,
        writer: &mut dyn SymbolWriter,
        enclosing: NodeIndex,
    );
}

/// Fragment sink for the engine's symbol display.
///
/// Every text fragment kind is reported separately so a writer can style them;
/// formatting-only signals (`write_line`, indentation) carry no text.
pub trait SymbolWriter {
    fn write_keyword(&mut self, text: &str);
    fn write_operator(&mut self, text: &str);
    fn write_punctuation(&mut self, text: &str);
    fn write_space(&mut self, text: &str);
    fn write_string_literal(&mut self, text: &str);
    fn write_parameter(&mut self, text: &str);
    fn write_symbol(&mut self, text: &str, symbol: SymbolId);
    fn write_line(&mut self);
    fn increase_indent(&mut self);
    fn decrease_indent(&mut self);
    /// Discard everything written so far.
    fn clear(&mut self);
    /// Cross-reference bookkeeping hook; `meaning` is a `symbol_flags` mask.
    fn track_symbol(&mut self, symbol: SymbolId, enclosing: NodeIndex, meaning: u32);
}
