//! Type handles, flag sets and the per-type record exposed by the engine.
//!
//! A `TypeId` is an opaque handle into the engine's type graph. Two handles are
//! the same type iff they are equal; the translator never compares types
//! structurally.

use crate::symbols::SymbolId;
use bitflags::bitflags;

// =============================================================================
// Handles
// =============================================================================

/// Handle to an engine-owned type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Handle to a syntax node. Used as the anchor for location-relative lookups
/// (member types, qualified names).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no particular location".
    pub const NONE: Self = Self(u32::MAX);

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

// =============================================================================
// Flags
// =============================================================================

bitflags! {
    /// Kind bits of a type.
    ///
    /// Usually exactly one bit is set, but the engine combines bits for some
    /// types: `boolean` is `BOOLEAN | UNION` over its two literal types, and
    /// enum member literals carry `ENUM_LITERAL` alongside a literal bit.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const STRING = 1 << 1;
        const NUMBER = 1 << 2;
        const BOOLEAN = 1 << 3;
        const ENUM = 1 << 4;
        const STRING_LITERAL = 1 << 5;
        const NUMBER_LITERAL = 1 << 6;
        const BOOLEAN_LITERAL = 1 << 7;
        const ENUM_LITERAL = 1 << 8;
        const ES_SYMBOL = 1 << 9;
        const VOID = 1 << 10;
        const UNDEFINED = 1 << 11;
        const NULL = 1 << 12;
        const NEVER = 1 << 13;
        const TYPE_PARAMETER = 1 << 14;
        const OBJECT = 1 << 15;
        const UNION = 1 << 16;
        const INTERSECTION = 1 << 17;
        const INDEX = 1 << 18;
        const INDEXED_ACCESS = 1 << 19;
        /// The `object` keyword type.
        const NON_PRIMITIVE = 1 << 20;
        const BIG_INT = 1 << 21;
        const BIG_INT_LITERAL = 1 << 22;
        const UNIQUE_ES_SYMBOL = 1 << 23;
        const CONDITIONAL = 1 << 24;
        const SUBSTITUTION = 1 << 25;
        const TEMPLATE_LITERAL = 1 << 26;
        const STRING_MAPPING = 1 << 27;
        const UNKNOWN = 1 << 28;
    }
}

bitflags! {
    /// Sub-kind bits of an `OBJECT` type.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const CLASS = 1 << 0;
        const INTERFACE = 1 << 1;
        /// A use of a generic or named type, e.g. `Array<string>`.
        const REFERENCE = 1 << 2;
        const TUPLE = 1 << 3;
        const ANONYMOUS = 1 << 4;
        const MAPPED = 1 << 5;
        const INSTANTIATED = 1 << 6;
        const OBJECT_LITERAL = 1 << 7;
        const EVOLVING_ARRAY = 1 << 8;
        const OBJECT_LITERAL_PATTERN_WITH_COMPUTED_PROPERTIES = 1 << 9;
    }
}

/// Names of the single-bit type flags, in declaration order. Used for debug
/// output.
pub const TYPE_FLAG_NAMES: &[(TypeFlags, &str)] = &[
    (TypeFlags::ANY, "Any"),
    (TypeFlags::STRING, "String"),
    (TypeFlags::NUMBER, "Number"),
    (TypeFlags::BOOLEAN, "Boolean"),
    (TypeFlags::ENUM, "Enum"),
    (TypeFlags::STRING_LITERAL, "StringLiteral"),
    (TypeFlags::NUMBER_LITERAL, "NumberLiteral"),
    (TypeFlags::BOOLEAN_LITERAL, "BooleanLiteral"),
    (TypeFlags::ENUM_LITERAL, "EnumLiteral"),
    (TypeFlags::ES_SYMBOL, "ESSymbol"),
    (TypeFlags::VOID, "Void"),
    (TypeFlags::UNDEFINED, "Undefined"),
    (TypeFlags::NULL, "Null"),
    (TypeFlags::NEVER, "Never"),
    (TypeFlags::TYPE_PARAMETER, "TypeParameter"),
    (TypeFlags::OBJECT, "Object"),
    (TypeFlags::UNION, "Union"),
    (TypeFlags::INTERSECTION, "Intersection"),
    (TypeFlags::INDEX, "Index"),
    (TypeFlags::INDEXED_ACCESS, "IndexedAccess"),
    (TypeFlags::NON_PRIMITIVE, "NonPrimitive"),
    (TypeFlags::BIG_INT, "BigInt"),
    (TypeFlags::BIG_INT_LITERAL, "BigIntLiteral"),
    (TypeFlags::UNIQUE_ES_SYMBOL, "UniqueESSymbol"),
    (TypeFlags::CONDITIONAL, "Conditional"),
    (TypeFlags::SUBSTITUTION, "Substitution"),
    (TypeFlags::TEMPLATE_LITERAL, "TemplateLiteral"),
    (TypeFlags::STRING_MAPPING, "StringMapping"),
    (TypeFlags::UNKNOWN, "Unknown"),
];

/// Names of the single-bit object flags, in declaration order.
pub const OBJECT_FLAG_NAMES: &[(ObjectFlags, &str)] = &[
    (ObjectFlags::CLASS, "Class"),
    (ObjectFlags::INTERFACE, "Interface"),
    (ObjectFlags::REFERENCE, "Reference"),
    (ObjectFlags::TUPLE, "Tuple"),
    (ObjectFlags::ANONYMOUS, "Anonymous"),
    (ObjectFlags::MAPPED, "Mapped"),
    (ObjectFlags::INSTANTIATED, "Instantiated"),
    (ObjectFlags::OBJECT_LITERAL, "ObjectLiteral"),
    (ObjectFlags::EVOLVING_ARRAY, "EvolvingArray"),
    (
        ObjectFlags::OBJECT_LITERAL_PATTERN_WITH_COMPUTED_PROPERTIES,
        "ObjectLiteralPatternWithComputedProperties",
    ),
];

// =============================================================================
// Signatures
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Call,
    Construct,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    String,
    Number,
}

/// A callable or constructable shape.
///
/// Parameter types are not stored here; they are resolved from the parameter
/// symbols relative to the caller's anchor node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub kind: SignatureKind,
    pub parameters: Vec<SymbolId>,
    pub return_type: Option<TypeId>,
}

impl Signature {
    pub fn call(parameters: Vec<SymbolId>, return_type: TypeId) -> Self {
        Self {
            kind: SignatureKind::Call,
            parameters,
            return_type: Some(return_type),
        }
    }

    pub fn construct(parameters: Vec<SymbolId>, return_type: TypeId) -> Self {
        Self {
            kind: SignatureKind::Construct,
            parameters,
            return_type: Some(return_type),
        }
    }
}

// =============================================================================
// TypeInfo
// =============================================================================

/// Everything the engine exposes about one type.
///
/// Fields that do not apply to a kind stay empty: `target`/`type_arguments`
/// are only meaningful for `ObjectFlags::REFERENCE`, `types` only for unions and
/// intersections, signatures and index types only for object types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    pub flags: TypeFlags,
    pub object_flags: ObjectFlags,
    pub symbol: Option<SymbolId>,
    /// Set when the type was reached through a type alias.
    pub alias_symbol: Option<SymbolId>,
    pub alias_type_arguments: Vec<TypeId>,
    pub target: Option<TypeId>,
    pub type_arguments: Vec<TypeId>,
    pub types: Vec<TypeId>,
    pub call_signatures: Vec<Signature>,
    pub construct_signatures: Vec<Signature>,
    pub string_index: Option<TypeId>,
    pub number_index: Option<TypeId>,
    /// The type was inferred from a destructuring pattern.
    pub from_pattern: bool,
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl TypeInfo {
    pub fn new(flags: TypeFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    pub fn object(object_flags: ObjectFlags, symbol: Option<SymbolId>) -> Self {
        Self {
            flags: TypeFlags::OBJECT,
            object_flags,
            symbol,
            ..Self::default()
        }
    }

    pub fn signatures(&self, kind: SignatureKind) -> &[Signature] {
        match kind {
            SignatureKind::Call => &self.call_signatures,
            SignatureKind::Construct => &self.construct_signatures,
        }
    }

    pub const fn index_type(&self, kind: IndexKind) -> Option<TypeId> {
        match kind {
            IndexKind::String => self.string_index,
            IndexKind::Number => self.number_index,
        }
    }
}
