//! Object types: classes, interfaces, references and anonymous types.

use crate::error::{TranslateError, TranslateResult};
use crate::names::is_builtin_lib_path;
use crate::translator::{TypeTranslator, UNKNOWN_ANNOTATION};
use tscc_common::DiagnosticSink;
use tscc_model::{
    ObjectFlags, SignatureKind, TypeChecker, TypeId, TypeInfo, symbol_flags, type_to_debug_string,
};

/// Closure has no tuples; every tuple becomes an array of unknowns.
pub const TUPLE_ANNOTATION: &str = "!Array<?>";

impl<'a, C: TypeChecker + ?Sized, S: DiagnosticSink> TypeTranslator<'a, C, S> {
    pub(crate) fn translate_object(
        &mut self,
        type_id: TypeId,
        info: &'a TypeInfo,
    ) -> TranslateResult<String> {
        if let Some(symbol) = info.symbol {
            if self.is_blacklisted(symbol)? {
                return Ok(UNKNOWN_ANNOTATION.to_string());
            }
        }

        let flags = info.object_flags;
        if flags.contains(ObjectFlags::CLASS) {
            let Some(symbol) = info.symbol else {
                self.warn("class has no symbol");
                return Ok(UNKNOWN_ANNOTATION.to_string());
            };
            return Ok(format!("!{}", self.symbol_to_string(symbol)));
        }

        if flags.contains(ObjectFlags::INTERFACE) {
            // Interfaces are checked before references: a generic interface's
            // declared type is also a reference to itself.
            let Some(symbol_id) = info.symbol else {
                self.warn("interface has no symbol");
                return Ok(UNKNOWN_ANNOTATION.to_string());
            };
            let symbol = self.symbol(symbol_id)?;
            if symbol.is_type_and_value() && !self.has_alias(symbol_id) {
                // Only the builtin lib types are assumed to line up with
                // Closure's externs. User augmentations of them do not count.
                let builtin = symbol
                    .declarations
                    .iter()
                    .any(|decl| is_builtin_lib_path(&decl.file_name));
                if !builtin {
                    self.warn(&format!(
                        "type/symbol conflict for {}, using {{?}} for now",
                        symbol.name
                    ));
                    return Ok(UNKNOWN_ANNOTATION.to_string());
                }
            }
            return Ok(format!("!{}", self.symbol_to_string(symbol_id)));
        }

        if flags.contains(ObjectFlags::REFERENCE) {
            return self.translate_reference(type_id, info);
        }

        if flags.contains(ObjectFlags::ANONYMOUS) {
            return self.translate_anonymous(type_id, info);
        }

        // Mapped, instantiated, object-literal-pattern and evolving-array
        // types have no Closure equivalent.
        self.warn(&format!(
            "unhandled object type {}",
            type_to_debug_string(self.checker, type_id)
        ));
        Ok(UNKNOWN_ANNOTATION.to_string())
    }

    fn translate_reference(
        &mut self,
        type_id: TypeId,
        info: &'a TypeInfo,
    ) -> TranslateResult<String> {
        let Some(target) = info.target else {
            self.warn(&format!(
                "reference has no target {}",
                type_to_debug_string(self.checker, type_id)
            ));
            return Ok(UNKNOWN_ANNOTATION.to_string());
        };

        if self.type_info(target)?.object_flags.contains(ObjectFlags::TUPLE) {
            return Ok(TUPLE_ANNOTATION.to_string());
        }

        if target == type_id {
            return Err(TranslateError::ReferenceLoop {
                type_id,
                debug: type_to_debug_string(self.checker, type_id),
            });
        }

        let mut annotation = self.translate(target)?;
        if !info.type_arguments.is_empty() {
            let mut args = Vec::with_capacity(info.type_arguments.len());
            for &arg in &info.type_arguments {
                args.push(self.translate(arg)?);
            }
            annotation.push('<');
            annotation.push_str(&args.join(", "));
            annotation.push('>');
        }
        Ok(annotation)
    }

    fn translate_anonymous(
        &mut self,
        type_id: TypeId,
        info: &'a TypeInfo,
    ) -> TranslateResult<String> {
        // Untyped callback parameters inferred from context land here.
        let Some(symbol_id) = info.symbol else {
            self.warn("anonymous type has no symbol");
            return Ok(UNKNOWN_ANNOTATION.to_string());
        };
        let symbol = self.symbol(symbol_id)?;

        if symbol.has_any_flag(symbol_flags::TYPE_LITERAL) {
            return self.translate_type_literal(type_id, symbol);
        }

        if symbol.has_any_flag(symbol_flags::FUNCTION | symbol_flags::METHOD) {
            let checker: &'a C = self.checker;
            if let [signature] = checker.signatures_of_type(type_id, SignatureKind::Call) {
                return self.signature_to_closure(signature);
            }
        }

        self.warn(&format!(
            "unhandled anonymous type {}",
            type_to_debug_string(self.checker, type_id)
        ));
        Ok(UNKNOWN_ANNOTATION.to_string())
    }
}
