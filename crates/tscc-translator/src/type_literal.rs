//! Structural type literals and signatures.
//!
//! A type literal is rendered as one of: a constructor function (first
//! construct signature only), a plain function (single call signature, no
//! fields), a map (index signature only), the generic object (no members),
//! or a record of its named fields.

use crate::error::TranslateResult;
use crate::translator::{TypeTranslator, UNKNOWN_ANNOTATION};
use tscc_common::DiagnosticSink;
use tscc_model::{
    CALL_MEMBER_NAME, INDEX_MEMBER_NAME, IndexKind, Signature, SignatureKind, Symbol, TypeChecker,
    TypeId,
};

/// Annotation for a shape without any members.
pub const EMPTY_OBJECT_ANNOTATION: &str = "!Object";
/// Annotation for an index signature whose key type could not be found.
pub const UNKNOWN_MAP_ANNOTATION: &str = "!Object<?,?>";

impl<'a, C: TypeChecker + ?Sized, S: DiagnosticSink> TypeTranslator<'a, C, S> {
    pub(crate) fn translate_type_literal(
        &mut self,
        type_id: TypeId,
        symbol: &'a Symbol,
    ) -> TranslateResult<String> {
        // Never reset: a literal seen by any earlier call on this translator
        // is not expanded again.
        if !self.seen_type_literals.insert(type_id) {
            return Ok(UNKNOWN_ANNOTATION.to_string());
        }

        let checker: &'a C = self.checker;

        // Extra properties next to a constructor, and further constructors,
        // cannot be expressed.
        if let Some(ctor) = checker
            .signatures_of_type(type_id, SignatureKind::Construct)
            .first()
        {
            return self.constructor_to_closure(ctor);
        }

        let mut fields = Vec::new();
        let mut callable = false;
        let mut indexable = false;
        for (name, &member) in &symbol.members {
            match name.as_str() {
                CALL_MEMBER_NAME => callable = true,
                INDEX_MEMBER_NAME => indexable = true,
                _ => {
                    // Optional members already carry `|undefined` in their type.
                    let member_type = self.translate_symbol_type(member)?;
                    fields.push(format!("{name}: {member_type}"));
                }
            }
        }

        if fields.is_empty() {
            match (callable, indexable) {
                (true, false) => {
                    if let [signature] = checker.signatures_of_type(type_id, SignatureKind::Call) {
                        return self.signature_to_closure(signature);
                    }
                }
                (false, true) => return self.translate_index_signature(type_id),
                // Closure rejects `{}` as a record type.
                (false, false) => return Ok(EMPTY_OBJECT_ANNOTATION.to_string()),
                (true, true) => {}
            }
        } else if !(callable && indexable) {
            return Ok(format!("{{{}}}", fields.join(", ")));
        }

        self.warn("unhandled type literal");
        Ok(UNKNOWN_ANNOTATION.to_string())
    }

    fn translate_index_signature(&mut self, type_id: TypeId) -> TranslateResult<String> {
        let checker: &'a C = self.checker;
        let (key_type, value_type) =
            if let Some(value) = checker.index_type_of_type(type_id, IndexKind::String) {
                ("string", value)
            } else if let Some(value) = checker.index_type_of_type(type_id, IndexKind::Number) {
                ("number", value)
            } else {
                self.warn("unknown index key type");
                return Ok(UNKNOWN_MAP_ANNOTATION.to_string());
            };
        let value = self.translate(value_type)?;
        Ok(format!("!Object<{key_type},{value}>"))
    }

    /// Render a call signature as `function(p1, p2): Ret`.
    pub fn signature_to_closure(&mut self, signature: &Signature) -> TranslateResult<String> {
        let params = self.translate_parameters(signature)?;
        let mut closure = format!("function({})", params.join(", "));
        if let Some(return_type) = signature.return_type {
            let ret = self.translate(return_type)?;
            if !ret.is_empty() {
                closure.push_str(": ");
                closure.push_str(&ret);
            }
        }
        Ok(closure)
    }

    /// Render a construct signature as `function(new: (Ctor), p1, ...): ?`.
    fn constructor_to_closure(&mut self, signature: &Signature) -> TranslateResult<String> {
        let params = self.translate_parameters(signature)?;
        let constructed = match signature.return_type {
            Some(return_type) => self.translate(return_type)?,
            None => UNKNOWN_ANNOTATION.to_string(),
        };
        let params = if params.is_empty() {
            String::new()
        } else {
            format!(", {}", params.join(", "))
        };
        Ok(format!("function(new: ({constructed}){params}): ?"))
    }

    fn translate_parameters(&mut self, signature: &Signature) -> TranslateResult<Vec<String>> {
        let mut params = Vec::with_capacity(signature.parameters.len());
        for &param in &signature.parameters {
            params.push(self.translate_symbol_type(param)?);
        }
        Ok(params)
    }
}
