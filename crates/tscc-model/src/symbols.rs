//! Symbols: named entities and their declaration sites.

use crate::types::NodeIndex;
use indexmap::IndexMap;

/// Handle to an engine-owned symbol. Alias tables and blacklist decisions are
/// keyed by this handle, so equality is identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

/// Symbol role flags.
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const FUNCTION_SCOPED_VARIABLE: u32 = 1 << 0;
    pub const BLOCK_SCOPED_VARIABLE: u32 = 1 << 1;
    pub const PROPERTY: u32 = 1 << 2;
    pub const ENUM_MEMBER: u32 = 1 << 3;
    pub const FUNCTION: u32 = 1 << 4;
    pub const CLASS: u32 = 1 << 5;
    pub const INTERFACE: u32 = 1 << 6;
    pub const CONST_ENUM: u32 = 1 << 7;
    pub const REGULAR_ENUM: u32 = 1 << 8;
    pub const VALUE_MODULE: u32 = 1 << 9;
    pub const NAMESPACE_MODULE: u32 = 1 << 10;
    pub const TYPE_LITERAL: u32 = 1 << 11;
    pub const OBJECT_LITERAL: u32 = 1 << 12;
    pub const METHOD: u32 = 1 << 13;
    pub const CONSTRUCTOR: u32 = 1 << 14;
    pub const GET_ACCESSOR: u32 = 1 << 15;
    pub const SET_ACCESSOR: u32 = 1 << 16;
    pub const SIGNATURE: u32 = 1 << 17;
    pub const TYPE_PARAMETER: u32 = 1 << 18;
    pub const TYPE_ALIAS: u32 = 1 << 19;
    pub const ALIAS: u32 = 1 << 21;
    pub const OPTIONAL: u32 = 1 << 24;

    pub const VARIABLE: u32 = FUNCTION_SCOPED_VARIABLE | BLOCK_SCOPED_VARIABLE;
    pub const ENUM: u32 = REGULAR_ENUM | CONST_ENUM;
    pub const ACCESSOR: u32 = GET_ACCESSOR | SET_ACCESSOR;

    /// Symbols that can be referenced in expression position.
    pub const VALUE: u32 = VARIABLE
        | PROPERTY
        | ENUM_MEMBER
        | FUNCTION
        | CLASS
        | ENUM
        | VALUE_MODULE
        | METHOD
        | GET_ACCESSOR
        | SET_ACCESSOR;

    /// Symbols that can be referenced in type position.
    pub const TYPE: u32 =
        CLASS | INTERFACE | ENUM | ENUM_MEMBER | TYPE_LITERAL | TYPE_PARAMETER | TYPE_ALIAS;

    pub(crate) const NAMES: &[(u32, &str)] = &[
        (FUNCTION_SCOPED_VARIABLE, "FunctionScopedVariable"),
        (BLOCK_SCOPED_VARIABLE, "BlockScopedVariable"),
        (PROPERTY, "Property"),
        (ENUM_MEMBER, "EnumMember"),
        (FUNCTION, "Function"),
        (CLASS, "Class"),
        (INTERFACE, "Interface"),
        (CONST_ENUM, "ConstEnum"),
        (REGULAR_ENUM, "RegularEnum"),
        (VALUE_MODULE, "ValueModule"),
        (NAMESPACE_MODULE, "NamespaceModule"),
        (TYPE_LITERAL, "TypeLiteral"),
        (OBJECT_LITERAL, "ObjectLiteral"),
        (METHOD, "Method"),
        (CONSTRUCTOR, "Constructor"),
        (GET_ACCESSOR, "GetAccessor"),
        (SET_ACCESSOR, "SetAccessor"),
        (SIGNATURE, "Signature"),
        (TYPE_PARAMETER, "TypeParameter"),
        (TYPE_ALIAS, "TypeAlias"),
        (ALIAS, "Alias"),
        (OPTIONAL, "Optional"),
    ];
}

/// Reserved member name marking a call signature on a type literal.
pub const CALL_MEMBER_NAME: &str = "__call";
/// Reserved member name marking an index signature on a type literal.
pub const INDEX_MEMBER_NAME: &str = "__index";
/// Name the engine gives to anonymous type-literal symbols.
pub const TYPE_LITERAL_SYMBOL_NAME: &str = "__type";

/// One declaration site of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Path of the source file containing the declaration.
    pub file_name: String,
    pub node: NodeIndex,
}

impl Declaration {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            node: NodeIndex::NONE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    pub declarations: Vec<Declaration>,
    /// Members in the order the engine discovered them.
    pub members: IndexMap<String, SymbolId>,
    /// Enclosing namespace/module symbol, used for qualified names.
    pub parent: Option<SymbolId>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, flags: u32) -> Self {
        Self {
            name: name.into(),
            flags,
            declarations: Vec::new(),
            members: IndexMap::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_declaration(mut self, file_name: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(file_name));
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: SymbolId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub const fn has_any_flag(&self, flags: u32) -> bool {
        (self.flags & flags) != 0
    }

    /// The symbol names both a type and a value, e.g. an interface merged with
    /// a same-named `declare var`.
    pub const fn is_type_and_value(&self) -> bool {
        self.has_any_flag(symbol_flags::TYPE) && self.has_any_flag(symbol_flags::VALUE)
    }
}
