//! Classification of engine kind flags into the kinds the translator handles.
//!
//! The engine reports kinds as a bit set. Almost every type has exactly one
//! bit set, so classification first looks for an exact match among the
//! understood kinds. Two combinations are known and handled explicitly:
//!
//! - `UNION` together with another bit (`boolean` is `BOOLEAN | UNION` over
//!   its literal types; enums are unions of their members): union handling.
//! - `ENUM_LITERAL` together with a literal bit (an enum member): `string`
//!   for members of string enums, `number` otherwise.
//!
//! Everything else is [`TypeKind::Unrecognized`], which the translator treats
//! as a fatal error: a new engine kind needs a new arm here.

use tscc_model::TypeFlags;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Any,
    String,
    StringLiteral,
    Number,
    NumberLiteral,
    Boolean,
    BooleanLiteral,
    Enum,
    EnumLiteral,
    EsSymbol,
    Void,
    Undefined,
    Null,
    Never,
    TypeParameter,
    Object,
    Union,
    Intersection,
    Index,
    IndexedAccess,
    Unrecognized,
}

/// Kind bits the translator knows how to dispatch on. Bits outside this mask
/// are ignored by classification.
pub const TRANSLATABLE_FLAGS: TypeFlags = TypeFlags::ANY
    .union(TypeFlags::STRING)
    .union(TypeFlags::NUMBER)
    .union(TypeFlags::BOOLEAN)
    .union(TypeFlags::ENUM)
    .union(TypeFlags::ES_SYMBOL)
    .union(TypeFlags::STRING_LITERAL)
    .union(TypeFlags::NUMBER_LITERAL)
    .union(TypeFlags::BOOLEAN_LITERAL)
    .union(TypeFlags::ENUM_LITERAL)
    .union(TypeFlags::OBJECT)
    .union(TypeFlags::UNION)
    .union(TypeFlags::INTERSECTION)
    .union(TypeFlags::INDEX)
    .union(TypeFlags::INDEXED_ACCESS)
    .union(TypeFlags::NEVER)
    .union(TypeFlags::TYPE_PARAMETER)
    .union(TypeFlags::UNDEFINED)
    .union(TypeFlags::VOID)
    .union(TypeFlags::NULL);

const SINGLE_KINDS: &[(TypeFlags, TypeKind)] = &[
    (TypeFlags::ANY, TypeKind::Any),
    (TypeFlags::STRING, TypeKind::String),
    (TypeFlags::STRING_LITERAL, TypeKind::StringLiteral),
    (TypeFlags::NUMBER, TypeKind::Number),
    (TypeFlags::NUMBER_LITERAL, TypeKind::NumberLiteral),
    (TypeFlags::BOOLEAN, TypeKind::Boolean),
    (TypeFlags::BOOLEAN_LITERAL, TypeKind::BooleanLiteral),
    (TypeFlags::ENUM, TypeKind::Enum),
    (TypeFlags::ENUM_LITERAL, TypeKind::EnumLiteral),
    (TypeFlags::ES_SYMBOL, TypeKind::EsSymbol),
    (TypeFlags::VOID, TypeKind::Void),
    (TypeFlags::UNDEFINED, TypeKind::Undefined),
    (TypeFlags::NULL, TypeKind::Null),
    (TypeFlags::NEVER, TypeKind::Never),
    (TypeFlags::TYPE_PARAMETER, TypeKind::TypeParameter),
    (TypeFlags::OBJECT, TypeKind::Object),
    (TypeFlags::UNION, TypeKind::Union),
    (TypeFlags::INTERSECTION, TypeKind::Intersection),
    (TypeFlags::INDEX, TypeKind::Index),
    (TypeFlags::INDEXED_ACCESS, TypeKind::IndexedAccess),
];

impl TypeKind {
    pub fn classify(flags: TypeFlags) -> Self {
        let masked = flags & TRANSLATABLE_FLAGS;
        if let Some(&(_, kind)) = SINGLE_KINDS.iter().find(|(flag, _)| *flag == masked) {
            return kind;
        }
        if masked.contains(TypeFlags::UNION) {
            return Self::Union;
        }
        if masked.contains(TypeFlags::ENUM_LITERAL) {
            if masked.contains(TypeFlags::STRING_LITERAL) {
                return Self::StringLiteral;
            }
            return Self::EnumLiteral;
        }
        Self::Unrecognized
    }

    /// The fixed annotation for kinds that need no further inspection.
    pub const fn primitive_annotation(self) -> Option<&'static str> {
        match self {
            Self::Any => Some("?"),
            Self::String | Self::StringLiteral => Some("string"),
            Self::Number | Self::NumberLiteral => Some("number"),
            Self::Boolean | Self::BooleanLiteral => Some("boolean"),
            Self::Enum | Self::EnumLiteral => Some("number"),
            Self::EsSymbol => Some("symbol"),
            Self::Void => Some("void"),
            Self::Undefined => Some("undefined"),
            Self::Null => Some("null"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bits_classify_exactly() {
        for &(flag, kind) in SINGLE_KINDS {
            assert_eq!(TypeKind::classify(flag), kind, "{flag:?}");
        }
    }

    #[test]
    fn test_boolean_union_overlap_is_union() {
        assert_eq!(
            TypeKind::classify(TypeFlags::BOOLEAN | TypeFlags::UNION),
            TypeKind::Union
        );
        assert_eq!(
            TypeKind::classify(TypeFlags::ENUM | TypeFlags::UNION),
            TypeKind::Union
        );
    }

    #[test]
    fn test_enum_member_literal_is_enum_literal() {
        assert_eq!(
            TypeKind::classify(TypeFlags::ENUM_LITERAL | TypeFlags::NUMBER_LITERAL),
            TypeKind::EnumLiteral
        );
    }

    #[test]
    fn test_string_enum_member_is_string_literal() {
        assert_eq!(
            TypeKind::classify(TypeFlags::ENUM_LITERAL | TypeFlags::STRING_LITERAL),
            TypeKind::StringLiteral
        );
    }

    #[test]
    fn test_unknown_bits_are_masked_off() {
        assert_eq!(
            TypeKind::classify(TypeFlags::OBJECT | TypeFlags::NON_PRIMITIVE),
            TypeKind::Object
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(TypeKind::classify(TypeFlags::empty()), TypeKind::Unrecognized);
        assert_eq!(TypeKind::classify(TypeFlags::BIG_INT), TypeKind::Unrecognized);
        assert_eq!(
            TypeKind::classify(TypeFlags::TEMPLATE_LITERAL),
            TypeKind::Unrecognized
        );
        assert_eq!(
            TypeKind::classify(TypeFlags::STRING | TypeFlags::NUMBER),
            TypeKind::Unrecognized
        );
    }

    #[test]
    fn test_primitive_annotations() {
        assert_eq!(TypeKind::Any.primitive_annotation(), Some("?"));
        assert_eq!(TypeKind::StringLiteral.primitive_annotation(), Some("string"));
        assert_eq!(TypeKind::EnumLiteral.primitive_annotation(), Some("number"));
        assert_eq!(TypeKind::EsSymbol.primitive_annotation(), Some("symbol"));
        assert_eq!(TypeKind::Never.primitive_annotation(), None);
        assert_eq!(TypeKind::Object.primitive_annotation(), None);
    }
}
