//! Debug renderings of types and symbols for diagnostics and error messages.

use crate::checker::TypeChecker;
use crate::symbols::{Symbol, TYPE_LITERAL_SYMBOL_NAME, symbol_flags};
use crate::types::{OBJECT_FLAG_NAMES, TYPE_FLAG_NAMES, TypeFlags, TypeId};

/// Render a type as `{type flags:0x.. <FlagName>... object:<Kind> symbol.name:".."}`.
///
/// Type alias arguments are rendered recursively; a missing handle renders as
/// `{type missing:<id>}`.
pub fn type_to_debug_string<C: TypeChecker + ?Sized>(checker: &C, type_id: TypeId) -> String {
    type_to_debug_string_at_depth(checker, type_id, 0)
}

// Alias arguments can refer back to the aliased type.
const MAX_DEBUG_DEPTH: u32 = 4;

fn type_to_debug_string_at_depth<C: TypeChecker + ?Sized>(
    checker: &C,
    type_id: TypeId,
    depth: u32,
) -> String {
    let Some(info) = checker.type_info(type_id) else {
        return format!("{{type missing:{}}}", type_id.0);
    };
    if depth > MAX_DEBUG_DEPTH {
        return "{type ...}".to_string();
    }

    let mut debug = format!("flags:0x{:x}", info.flags.bits());

    if let Some(alias) = info.alias_symbol.and_then(|id| checker.symbol(id)) {
        debug.push_str(&format!(" alias:{}", symbol_to_debug_string(alias)));
    }
    if !info.alias_type_arguments.is_empty() {
        let args: Vec<String> = info
            .alias_type_arguments
            .iter()
            .map(|&arg| type_to_debug_string_at_depth(checker, arg, depth + 1))
            .collect();
        debug.push_str(&format!(" aliasArgs:<{}>", args.join(",")));
    }

    for &(flag, name) in TYPE_FLAG_NAMES {
        if info.flags.contains(flag) {
            debug.push(' ');
            debug.push_str(name);
        }
    }

    // Only plain object types get their sub-kind listed.
    if info.flags == TypeFlags::OBJECT {
        for &(flag, name) in OBJECT_FLAG_NAMES {
            if info.object_flags.contains(flag) {
                debug.push_str(" object:");
                debug.push_str(name);
            }
        }
    }

    if let Some(symbol) = info.symbol.and_then(|id| checker.symbol(id)) {
        if symbol.name != TYPE_LITERAL_SYMBOL_NAME {
            debug.push_str(&format!(" symbol.name:{}", quote(&symbol.name)));
        }
    }

    if info.from_pattern {
        debug.push_str(" destructuring:true");
    }

    format!("{{type {debug}}}")
}

/// Render a symbol as `"name" flags:0x.. <FlagName>...`.
pub fn symbol_to_debug_string(symbol: &Symbol) -> String {
    let mut debug = format!("{} flags:0x{:x}", quote(&symbol.name), symbol.flags);
    for &(flag, name) in symbol_flags::NAMES {
        if symbol.flags & flag != 0 {
            debug.push(' ');
            debug.push_str(name);
        }
    }
    debug
}

fn quote(name: &str) -> String {
    serde_json::to_string(name).unwrap_or_else(|_| format!("\"{name}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TypeStore;
    use crate::symbols::Symbol;

    #[test]
    fn test_primitive_debug_string() {
        let mut store = TypeStore::new();
        let s = store.primitive(TypeFlags::STRING);
        assert_eq!(type_to_debug_string(&store, s), "{type flags:0x2 String}");
    }

    #[test]
    fn test_boolean_lists_both_flags() {
        let mut store = TypeStore::new();
        let b = store.boolean();
        assert_eq!(
            type_to_debug_string(&store, b),
            "{type flags:0x10008 Boolean Union}"
        );
    }

    #[test]
    fn test_class_debug_string_has_object_kind_and_name() {
        let mut store = TypeStore::new();
        let c = store.class("Widget", "widget.ts");
        assert_eq!(
            type_to_debug_string(&store, c),
            "{type flags:0x8000 Object object:Class symbol.name:\"Widget\"}"
        );
    }

    #[test]
    fn test_type_literal_symbol_name_is_hidden() {
        let mut store = TypeStore::new();
        let (lit, _) = store.type_literal("a.ts");
        assert_eq!(
            type_to_debug_string(&store, lit),
            "{type flags:0x8000 Object object:Anonymous}"
        );
    }

    #[test]
    fn test_missing_type() {
        let store = TypeStore::new();
        assert_eq!(type_to_debug_string(&store, TypeId(7)), "{type missing:7}");
    }

    #[test]
    fn test_symbol_debug_string() {
        let symbol = Symbol::new("Foo", symbol_flags::CLASS | symbol_flags::INTERFACE);
        assert_eq!(
            symbol_to_debug_string(&symbol),
            "\"Foo\" flags:0x60 Class Interface"
        );
    }

    #[test]
    fn test_symbol_name_is_json_escaped() {
        let symbol = Symbol::new("a\"b", symbol_flags::PROPERTY);
        assert_eq!(symbol_to_debug_string(&symbol), "\"a\\\"b\" flags:0x4 Property");
    }
}
