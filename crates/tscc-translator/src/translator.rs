//! Type Translator - convert engine types to Closure type annotations.
//!
//! One `TypeTranslator` is created per syntactic context: it is bound to an
//! anchor node (the location member types and qualified names are resolved
//! from), an optional path blacklist and an alias table. `translate` is then
//! called once per type that needs an annotation.
//!
//! The translation is lossy. Whatever the annotation dialect cannot
//! express is reported to the diagnostics sink and replaced by `?`. Only
//! inconsistencies in the engine's graph are returned as errors.
//!
//! # Session state
//!
//! The set of visited type literals lives as long as the translator. A type
//! literal translated once becomes `?` on every later encounter, including in
//! unrelated top-level `translate` calls on the same instance.
//!
//! # Example
//!
//! ```
//! use tscc_model::{NodeIndex, TypeFlags, TypeStore};
//! use tscc_translator::TypeTranslator;
//!
//! let mut store = TypeStore::new();
//! let string = store.primitive(TypeFlags::STRING);
//! let undefined = store.primitive(TypeFlags::UNDEFINED);
//! let optional = store.union(vec![string, undefined]);
//!
//! let mut translator = TypeTranslator::new(&store, NodeIndex::NONE);
//! assert_eq!(translator.translate(optional).unwrap(), "(string|undefined)");
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::options::TranslatorOptions;
use crate::type_kind::TypeKind;
use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};
use tscc_common::limits::{MAX_TRANSLATION_DEPTH, SEEN_TYPE_LITERALS_CAPACITY};
use tscc_common::{DiagnosticSink, NoopSink};
use tscc_model::{
    NodeIndex, Symbol, SymbolId, TypeChecker, TypeId, TypeInfo, type_to_debug_string,
};

/// The universal fallback annotation.
pub const UNKNOWN_ANNOTATION: &str = "?";

pub struct TypeTranslator<'a, C: TypeChecker + ?Sized, S: DiagnosticSink = NoopSink> {
    pub(crate) checker: &'a C,
    /// Anchor for location-relative lookups.
    pub(crate) node: NodeIndex,
    pub(crate) path_blacklist: Option<FxHashSet<String>>,
    pub(crate) symbols_to_aliased_names: FxHashMap<SymbolId, String>,
    pub(crate) seen_type_literals: FxHashSet<TypeId>,
    depth: u32,
    sink: S,
}

impl<'a, C: TypeChecker + ?Sized> TypeTranslator<'a, C> {
    pub fn new(checker: &'a C, node: NodeIndex) -> Self {
        Self {
            checker,
            node,
            path_blacklist: None,
            symbols_to_aliased_names: FxHashMap::default(),
            seen_type_literals: FxHashSet::with_capacity_and_hasher(
                SEEN_TYPE_LITERALS_CAPACITY,
                Default::default(),
            ),
            depth: 0,
            sink: NoopSink,
        }
    }
}

impl<'a, C: TypeChecker + ?Sized, S: DiagnosticSink> TypeTranslator<'a, C, S> {
    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the diagnostics sink.
    pub fn with_diagnostics<S2: DiagnosticSink>(self, sink: S2) -> TypeTranslator<'a, C, S2> {
        TypeTranslator {
            checker: self.checker,
            node: self.node,
            path_blacklist: self.path_blacklist,
            symbols_to_aliased_names: self.symbols_to_aliased_names,
            seen_type_literals: self.seen_type_literals,
            depth: self.depth,
            sink,
        }
    }

    /// Suppress symbols whose every declaration lies in one of `paths`.
    #[must_use]
    pub fn with_path_blacklist<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.path_blacklist = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Render `symbol` as `name`, bypassing display-name resolution.
    #[must_use]
    pub fn with_alias(mut self, symbol: SymbolId, name: impl Into<String>) -> Self {
        self.symbols_to_aliased_names.insert(symbol, name.into());
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = (SymbolId, String)>) -> Self {
        self.symbols_to_aliased_names.extend(aliases);
        self
    }

    #[must_use]
    pub fn with_options(self, options: &TranslatorOptions) -> Self {
        match &options.path_blacklist {
            Some(paths) => self.with_path_blacklist(paths.iter().cloned()),
            None => self,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub const fn anchor(&self) -> NodeIndex {
        self.node
    }

    pub fn diagnostics(&self) -> &S {
        &self.sink
    }

    pub fn into_diagnostics(self) -> S {
        self.sink
    }

    pub fn seen_type_literal_count(&self) -> usize {
        self.seen_type_literals.len()
    }

    pub fn is_type_literal_seen(&self, type_id: TypeId) -> bool {
        self.seen_type_literals.contains(&type_id)
    }

    // =========================================================================
    // Entry point
    // =========================================================================

    /// Convert `type_id` to a Closure type annotation.
    pub fn translate(&mut self, type_id: TypeId) -> TranslateResult<String> {
        if self.depth >= MAX_TRANSLATION_DEPTH {
            self.warn(&format!(
                "type nesting exceeds {MAX_TRANSLATION_DEPTH} levels at {}",
                type_to_debug_string(self.checker, type_id)
            ));
            return Ok(UNKNOWN_ANNOTATION.to_string());
        }
        self.depth += 1;
        let result = self.translate_type(type_id);
        self.depth -= 1;
        result
    }

    fn translate_type(&mut self, type_id: TypeId) -> TranslateResult<String> {
        let info = self.type_info(type_id)?;
        let kind = TypeKind::classify(info.flags);
        trace!(type_id = type_id.0, ?kind, depth = self.depth, "translate");

        if let Some(annotation) = kind.primitive_annotation() {
            return Ok(annotation.to_string());
        }

        match kind {
            TypeKind::Never => {
                self.warn("should not emit a 'never' type");
                Ok(UNKNOWN_ANNOTATION.to_string())
            }
            TypeKind::TypeParameter => {
                // Generic type parameters are erased.
                self.warn(&format!(
                    "unhandled type parameter {}",
                    type_to_debug_string(self.checker, type_id)
                ));
                Ok(UNKNOWN_ANNOTATION.to_string())
            }
            TypeKind::Object => self.translate_object(type_id, info),
            TypeKind::Union => self.translate_union(info),
            TypeKind::Intersection | TypeKind::Index | TypeKind::IndexedAccess => {
                self.warn(&format!(
                    "unhandled type {}",
                    type_to_debug_string(self.checker, type_id)
                ));
                Ok(UNKNOWN_ANNOTATION.to_string())
            }
            _ => Err(TranslateError::UnrecognizedTypeFlags {
                flags: info.flags.bits(),
                debug: type_to_debug_string(self.checker, type_id),
            }),
        }
    }

    /// Translate each constituent, drop repeated annotations (keeping the
    /// first occurrence), and parenthesize when more than one remains.
    fn translate_union(&mut self, info: &'a TypeInfo) -> TranslateResult<String> {
        let mut parts: IndexSet<String> = IndexSet::with_capacity(info.types.len());
        for &member in &info.types {
            parts.insert(self.translate(member)?);
        }

        match parts.len() {
            0 => {
                self.warn("union type has no constituents");
                Ok(UNKNOWN_ANNOTATION.to_string())
            }
            1 => Ok(parts.swap_remove_index(0).unwrap_or_default()),
            _ => {
                let joined: Vec<&str> = parts.iter().map(String::as_str).collect();
                Ok(format!("({})", joined.join("|")))
            }
        }
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    pub(crate) fn type_info(&self, type_id: TypeId) -> TranslateResult<&'a TypeInfo> {
        let checker: &'a C = self.checker;
        checker
            .type_info(type_id)
            .ok_or(TranslateError::MissingType(type_id))
    }

    pub(crate) fn symbol(&self, symbol_id: SymbolId) -> TranslateResult<&'a Symbol> {
        let checker: &'a C = self.checker;
        checker
            .symbol(symbol_id)
            .ok_or(TranslateError::MissingSymbol(symbol_id))
    }

    /// Translate the type of `symbol` as seen from the anchor node.
    pub(crate) fn translate_symbol_type(&mut self, symbol: SymbolId) -> TranslateResult<String> {
        match self.checker.type_of_symbol_at_location(symbol, self.node) {
            Some(type_id) => self.translate(type_id),
            None => {
                let name = self.symbol(symbol)?.name.as_str();
                self.warn(&format!("symbol {name} has no type"));
                Ok(UNKNOWN_ANNOTATION.to_string())
            }
        }
    }

    pub(crate) fn warn(&mut self, message: &str) {
        debug!(anchor = self.node.0, "{message}");
        self.sink.report(message);
    }
}
