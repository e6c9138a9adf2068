//! In-memory type graph implementing [`TypeChecker`].
//!
//! `TypeStore` plays the role of the engine for embedders that build the type
//! graph themselves (and for tests). Types and symbols are appended to arenas
//! and addressed by index; cycles are created by registering a symbol's type
//! after the type that contains the symbol has been allocated.
//!
//! # Example
//!
//! ```
//! use tscc_model::{TypeStore, TypeChecker, TypeFlags};
//!
//! let mut store = TypeStore::new();
//! let s = store.primitive(TypeFlags::STRING);
//! assert!(store.type_info(s).is_some());
//! ```

use crate::checker::{SymbolWriter, TypeChecker};
use crate::symbols::{Symbol, SymbolId, TYPE_LITERAL_SYMBOL_NAME, symbol_flags};
use crate::types::{NodeIndex, ObjectFlags, Signature, TypeFlags, TypeId, TypeInfo};
use rustc_hash::FxHashMap;
use tracing::trace;

#[derive(Clone, Debug, Default)]
pub struct TypeStore {
    types: Vec<TypeInfo>,
    symbols: Vec<Symbol>,
    /// Declared type of a symbol, valid at every location.
    symbol_types: FxHashMap<SymbolId, TypeId>,
    /// Location-specific overrides (narrowed or instantiated member types).
    symbol_types_at: FxHashMap<(SymbolId, NodeIndex), TypeId>,
    /// Namespace/module symbol enclosing a node.
    node_containers: FxHashMap<NodeIndex, SymbolId>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    pub fn add_type(&mut self, info: TypeInfo) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        trace!(type_id = id.0, flags = ?info.flags, "TypeStore::add_type");
        self.types.push(info);
        id
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn type_info_mut(&mut self, type_id: TypeId) -> Option<&mut TypeInfo> {
        self.types.get_mut(type_id.0 as usize)
    }

    pub fn symbol_mut(&mut self, symbol_id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(symbol_id.0 as usize)
    }

    /// Record the declared type of `symbol`.
    pub fn set_symbol_type(&mut self, symbol: SymbolId, type_id: TypeId) {
        self.symbol_types.insert(symbol, type_id);
    }

    /// Record the type of `symbol` as seen from `location`, overriding the
    /// declared type there.
    pub fn set_symbol_type_at(&mut self, symbol: SymbolId, location: NodeIndex, type_id: TypeId) {
        self.symbol_types_at.insert((symbol, location), type_id);
    }

    /// Mark `node` as being declared inside the namespace/module `container`.
    /// Qualified names seen from `node` stop at `container`.
    pub fn set_node_container(&mut self, node: NodeIndex, container: SymbolId) {
        self.node_containers.insert(node, container);
    }

    /// Add `member` to the member table of `owner`, returning the member.
    pub fn add_member(&mut self, owner: SymbolId, member: Symbol) -> SymbolId {
        let name = member.name.clone();
        let member_id = self.add_symbol(member);
        if let Some(owner) = self.symbol_mut(owner) {
            owner.members.insert(name, member_id);
        }
        member_id
    }

    /// Add a property member named `name` of type `type_id` to `owner`.
    pub fn add_property(&mut self, owner: SymbolId, name: &str, type_id: TypeId) -> SymbolId {
        let member = self.add_member(owner, Symbol::new(name, symbol_flags::PROPERTY));
        self.set_symbol_type(member, type_id);
        member
    }

    /// Add a parameter symbol of type `type_id` (not owned by any table).
    pub fn parameter(&mut self, name: &str, type_id: TypeId) -> SymbolId {
        let param = self.add_symbol(Symbol::new(name, symbol_flags::FUNCTION_SCOPED_VARIABLE));
        self.set_symbol_type(param, type_id);
        param
    }

    // =========================================================================
    // Type builders
    // =========================================================================

    pub fn primitive(&mut self, flags: TypeFlags) -> TypeId {
        self.add_type(TypeInfo::new(flags))
    }

    /// The engine's `boolean`: `BOOLEAN | UNION` over its two literal types.
    pub fn boolean(&mut self) -> TypeId {
        let true_type = self.primitive(TypeFlags::BOOLEAN_LITERAL);
        let false_type = self.primitive(TypeFlags::BOOLEAN_LITERAL);
        self.add_type(TypeInfo {
            types: vec![true_type, false_type],
            ..TypeInfo::new(TypeFlags::BOOLEAN | TypeFlags::UNION)
        })
    }

    pub fn union(&mut self, types: Vec<TypeId>) -> TypeId {
        self.add_type(TypeInfo {
            types,
            ..TypeInfo::new(TypeFlags::UNION)
        })
    }

    pub fn intersection(&mut self, types: Vec<TypeId>) -> TypeId {
        self.add_type(TypeInfo {
            types,
            ..TypeInfo::new(TypeFlags::INTERSECTION)
        })
    }

    /// Instance type of a class `name` declared in `file_name`.
    pub fn class(&mut self, name: &str, file_name: &str) -> TypeId {
        let symbol = self.add_symbol(Symbol::new(name, symbol_flags::CLASS).with_declaration(file_name));
        self.add_type(TypeInfo::object(ObjectFlags::CLASS, Some(symbol)))
    }

    /// Interface `name` declared in `file_name`.
    pub fn interface(&mut self, name: &str, file_name: &str) -> TypeId {
        let symbol =
            self.add_symbol(Symbol::new(name, symbol_flags::INTERFACE).with_declaration(file_name));
        self.add_type(TypeInfo::object(ObjectFlags::INTERFACE, Some(symbol)))
    }

    /// A use of `target` with `type_arguments`.
    pub fn reference(&mut self, target: TypeId, type_arguments: Vec<TypeId>) -> TypeId {
        let symbol = self.type_info(target).and_then(|info| info.symbol);
        self.add_type(TypeInfo {
            target: Some(target),
            type_arguments,
            ..TypeInfo::object(ObjectFlags::REFERENCE, symbol)
        })
    }

    /// An empty anonymous type literal declared in `file_name`. Members and
    /// signatures are added afterwards; the returned symbol owns the members.
    pub fn type_literal(&mut self, file_name: &str) -> (TypeId, SymbolId) {
        let symbol = self.add_symbol(
            Symbol::new(TYPE_LITERAL_SYMBOL_NAME, symbol_flags::TYPE_LITERAL)
                .with_declaration(file_name),
        );
        let type_id = self.add_type(TypeInfo::object(ObjectFlags::ANONYMOUS, Some(symbol)));
        (type_id, symbol)
    }

    /// An anonymous function type with a single call signature, as inferred
    /// for a function declaration named `name`.
    pub fn function(&mut self, name: &str, file_name: &str, signature: Signature) -> TypeId {
        let symbol =
            self.add_symbol(Symbol::new(name, symbol_flags::FUNCTION).with_declaration(file_name));
        self.add_type(TypeInfo {
            call_signatures: vec![signature],
            ..TypeInfo::object(ObjectFlags::ANONYMOUS, Some(symbol))
        })
    }

    // =========================================================================
    // Display helpers
    // =========================================================================

    /// Parent chain of `symbol`, outermost first, stopping below `stop`.
    fn qualification_chain(&self, symbol: SymbolId, stop: Option<SymbolId>) -> Vec<SymbolId> {
        let mut chain = vec![symbol];
        let mut current = symbol;
        // The chain is bounded by the arena size even if parents form a cycle.
        while chain.len() <= self.symbols.len() {
            let Some(parent) = self.symbol(current).and_then(|s| s.parent) else {
                break;
            };
            if Some(parent) == stop {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }
}

impl TypeChecker for TypeStore {
    fn type_info(&self, type_id: TypeId) -> Option<&TypeInfo> {
        self.types.get(type_id.0 as usize)
    }

    fn symbol(&self, symbol_id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(symbol_id.0 as usize)
    }

    fn type_of_symbol_at_location(&self, symbol: SymbolId, location: NodeIndex) -> Option<TypeId> {
        self.symbol_types_at
            .get(&(symbol, location))
            .or_else(|| self.symbol_types.get(&symbol))
            .copied()
    }

    fn build_symbol_display(
        &self,
        symbol: SymbolId,
        writer: &mut dyn SymbolWriter,
        enclosing: NodeIndex,
    ) {
        let stop = self.node_containers.get(&enclosing).copied();
        let chain = self.qualification_chain(symbol, stop);
        for (i, &id) in chain.iter().enumerate() {
            let Some(sym) = self.symbol(id) else {
                continue;
            };
            if i > 0 {
                writer.write_punctuation(".");
            }
            writer.track_symbol(id, enclosing, symbol_flags::TYPE);
            writer.write_symbol(&sym.name, id);
        }
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod store_tests;
