use super::*;
use crate::test_fixtures::*;
use tscc_model::{TypeChecker, TypeFlags, TypeId, TypeInfo, TypeStore};

#[test]
fn test_primitive_annotations() {
    let (store, p) = store_with_primitives();

    assert_eq!(translate(&store, p.any), "?");
    assert_eq!(translate(&store, p.string), "string");
    assert_eq!(translate(&store, p.number), "number");
    assert_eq!(translate(&store, p.boolean), "boolean");
    assert_eq!(translate(&store, p.symbol), "symbol");
    assert_eq!(translate(&store, p.void), "void");
    assert_eq!(translate(&store, p.undefined), "undefined");
    assert_eq!(translate(&store, p.null), "null");
}

#[test]
fn test_literals_widen_to_their_primitive() {
    let mut store = TypeStore::new();
    let s = store.primitive(TypeFlags::STRING_LITERAL);
    let n = store.primitive(TypeFlags::NUMBER_LITERAL);
    let b = store.primitive(TypeFlags::BOOLEAN_LITERAL);

    assert_eq!(translate(&store, s), "string");
    assert_eq!(translate(&store, n), "number");
    assert_eq!(translate(&store, b), "boolean");
}

#[test]
fn test_enums_are_numbers() {
    let mut store = TypeStore::new();
    let enum_type = store.primitive(TypeFlags::ENUM);
    let enum_literal = store.primitive(TypeFlags::ENUM_LITERAL);
    let enum_member = store.primitive(TypeFlags::ENUM_LITERAL | TypeFlags::NUMBER_LITERAL);

    assert_eq!(translate(&store, enum_type), "number");
    assert_eq!(translate(&store, enum_literal), "number");
    assert_eq!(translate(&store, enum_member), "number");
}

#[test]
fn test_string_enum_members_are_strings() {
    let mut store = TypeStore::new();
    let up = store.primitive(TypeFlags::ENUM_LITERAL | TypeFlags::STRING_LITERAL);
    let down = store.primitive(TypeFlags::ENUM_LITERAL | TypeFlags::STRING_LITERAL);
    let direction = store.add_type(TypeInfo {
        types: vec![up, down],
        ..TypeInfo::new(TypeFlags::ENUM | TypeFlags::UNION)
    });

    assert_eq!(translate(&store, up), "string");
    assert_eq!(translate(&store, direction), "string");
}

#[test]
fn test_enum_declared_as_union_of_members() {
    let mut store = TypeStore::new();
    let red = store.primitive(TypeFlags::ENUM_LITERAL | TypeFlags::NUMBER_LITERAL);
    let green = store.primitive(TypeFlags::ENUM_LITERAL | TypeFlags::NUMBER_LITERAL);
    let color = store.add_type(TypeInfo {
        types: vec![red, green],
        ..TypeInfo::new(TypeFlags::ENUM | TypeFlags::UNION)
    });

    assert_eq!(translate(&store, color), "number");
}

#[test]
fn test_never_degrades_with_diagnostic() {
    let (store, p) = store_with_primitives();
    let mut translator = translator(&store);

    assert_eq!(translator.translate(p.never).unwrap(), "?");
    assert!(translator.diagnostics().contains("'never'"));
}

#[test]
fn test_type_parameter_is_erased_with_diagnostic() {
    let mut store = TypeStore::new();
    let t = store.primitive(TypeFlags::TYPE_PARAMETER);
    let mut translator = translator(&store);

    assert_eq!(translator.translate(t).unwrap(), "?");
    assert_eq!(translator.diagnostics().len(), 1);
    assert!(translator.diagnostics().contains("type parameter"));
}

#[test]
fn test_unsupported_kinds_degrade_with_diagnostic() {
    let (mut store, p) = store_with_primitives();
    let intersection = store.intersection(vec![p.string, p.number]);
    let index = store.primitive(TypeFlags::INDEX);
    let indexed_access = store.primitive(TypeFlags::INDEXED_ACCESS);
    let mut translator = translator(&store);

    assert_eq!(translator.translate(intersection).unwrap(), "?");
    assert_eq!(translator.translate(index).unwrap(), "?");
    assert_eq!(translator.translate(indexed_access).unwrap(), "?");
    assert_eq!(translator.diagnostics().len(), 3);
    assert!(translator.diagnostics().contains("Intersection"));
    assert!(translator.diagnostics().contains("IndexedAccess"));
}

#[test]
fn test_unrecognized_flags_are_fatal() {
    let mut store = TypeStore::new();
    let bigint = store.primitive(TypeFlags::BIG_INT);
    let non_primitive = store.primitive(TypeFlags::NON_PRIMITIVE);
    let no_flags = store.primitive(TypeFlags::empty());
    let mut translator = translator(&store);

    for type_id in [bigint, non_primitive, no_flags] {
        match translator.translate(type_id) {
            Err(TranslateError::UnrecognizedTypeFlags { flags, debug }) => {
                let info = store.type_info(type_id).unwrap();
                assert_eq!(flags, info.flags.bits());
                assert!(debug.starts_with("{type flags:0x"), "{debug}");
            }
            other => panic!("expected UnrecognizedTypeFlags, got {other:?}"),
        }
    }
}

#[test]
fn test_unrecognized_flags_error_message() {
    let mut store = TypeStore::new();
    let bigint = store.primitive(TypeFlags::BIG_INT);
    let err = translator(&store).translate(bigint).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown type flags 0x200000 on {type flags:0x200000 BigInt}"
    );
}

#[test]
fn test_multiple_primitive_bits_without_union_are_fatal() {
    let mut store = TypeStore::new();
    let odd = store.primitive(TypeFlags::STRING | TypeFlags::NUMBER);
    assert!(matches!(
        translator(&store).translate(odd),
        Err(TranslateError::UnrecognizedTypeFlags { .. })
    ));
}

#[test]
fn test_missing_type_is_fatal() {
    let store = TypeStore::new();
    assert_eq!(
        translator(&store).translate(TypeId(42)),
        Err(TranslateError::MissingType(TypeId(42)))
    );
}

#[test]
fn test_fatal_error_inside_union_propagates() {
    let (mut store, p) = store_with_primitives();
    let bigint = store.primitive(TypeFlags::BIG_INT);
    let union = store.union(vec![p.string, bigint]);
    assert!(translator(&store).translate(union).is_err());
}

#[test]
fn test_cyclic_type_arguments_hit_depth_limit() {
    let mut store = TypeStore::new();
    let class = store.class("Node", "node.ts");
    let reference = store.reference(class, vec![]);
    store
        .type_info_mut(reference)
        .unwrap()
        .type_arguments
        .push(reference);

    let mut translator = translator(&store);
    let annotation = translator.translate(reference).unwrap();

    assert!(annotation.starts_with("!Node<!Node<"), "{annotation}");
    assert!(annotation.contains("<?>"), "{annotation}");
    assert!(translator.diagnostics().contains("nesting exceeds"));
}

#[test]
fn test_translator_can_be_reused_after_depth_limit() {
    let (mut store, p) = store_with_primitives();
    let class = store.class("Node", "node.ts");
    let reference = store.reference(class, vec![]);
    store
        .type_info_mut(reference)
        .unwrap()
        .type_arguments
        .push(reference);

    let mut translator = translator(&store);
    translator.translate(reference).unwrap();
    assert_eq!(translator.translate(p.string).unwrap(), "string");
}

#[test]
fn test_default_translator_has_noop_diagnostics() {
    let (store, p) = store_with_primitives();
    let mut translator = TypeTranslator::new(&store, ANCHOR);
    assert_eq!(translator.translate(p.never).unwrap(), "?");
    assert_eq!(translator.anchor(), ANCHOR);
}

#[test]
fn test_closure_diagnostics_hook() {
    let (store, p) = store_with_primitives();
    let mut messages = Vec::new();
    {
        let mut translator = TypeTranslator::new(&store, ANCHOR)
            .with_diagnostics(|message: &str| messages.push(message.to_string()));
        translator.translate(p.never).unwrap();
        translator.translate(p.string).unwrap();
    }
    assert_eq!(messages, vec!["should not emit a 'never' type".to_string()]);
}

#[test]
fn test_into_diagnostics_returns_sink() {
    let (store, p) = store_with_primitives();
    let mut translator = translator(&store);
    translator.translate(p.never).unwrap();
    let collector = translator.into_diagnostics();
    assert_eq!(collector.len(), 1);
}
