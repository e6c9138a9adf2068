//! Name resolution and path blacklisting.

use crate::error::TranslateResult;
use crate::translator::TypeTranslator;
use tscc_common::DiagnosticSink;
use tscc_model::{NodeIndex, SymbolId, SymbolWriter, TypeChecker};

/// Collects the engine's symbol display into a single string.
///
/// Every text fragment is appended as-is; line and indentation signals are
/// dropped since annotations are single-line.
#[derive(Debug, Default)]
pub struct NameWriter {
    text: String,
}

impl NameWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl SymbolWriter for NameWriter {
    fn write_keyword(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_operator(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_punctuation(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_space(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_string_literal(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_parameter(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_symbol(&mut self, text: &str, _symbol: SymbolId) {
        self.text.push_str(text);
    }

    fn write_line(&mut self) {}

    fn increase_indent(&mut self) {}

    fn decrease_indent(&mut self) {}

    fn clear(&mut self) {
        self.text.clear();
    }

    fn track_symbol(&mut self, _symbol: SymbolId, _enclosing: NodeIndex, _meaning: u32) {}
}

/// True for the engine's own library declaration files (`lib.d.ts`,
/// `lib.es2015.core.d.ts`, ...), whose types Closure already knows by name.
pub fn is_builtin_lib_path(path: &str) -> bool {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.starts_with("lib.") && file_name.ends_with(".d.ts")
}

impl<'a, C: TypeChecker + ?Sized, S: DiagnosticSink> TypeTranslator<'a, C, S> {
    /// The name `symbol` is written as: its alias when one is registered,
    /// otherwise the engine's qualified display name seen from the anchor.
    pub fn symbol_to_string(&self, symbol: SymbolId) -> String {
        if let Some(alias) = self.symbols_to_aliased_names.get(&symbol) {
            return alias.clone();
        }
        let mut writer = NameWriter::new();
        self.checker
            .build_symbol_display(symbol, &mut writer, self.node);
        writer.into_string()
    }

    pub(crate) fn has_alias(&self, symbol: SymbolId) -> bool {
        self.symbols_to_aliased_names.contains_key(&symbol)
    }

    /// Whether `symbol` is suppressed by the path blacklist.
    ///
    /// Aliased symbols are never suppressed. A symbol without declarations
    /// cannot be placed, so it is suppressed whenever a blacklist is set.
    pub fn is_blacklisted(&mut self, symbol: SymbolId) -> TranslateResult<bool> {
        if self.path_blacklist.is_none() || self.has_alias(symbol) {
            return Ok(false);
        }
        let declarations = &self.symbol(symbol)?.declarations;
        if declarations.is_empty() {
            self.warn("symbol has no declarations");
            return Ok(true);
        }
        let Some(blacklist) = &self.path_blacklist else {
            return Ok(false);
        };
        Ok(declarations
            .iter()
            .all(|decl| blacklist.contains(&decl.file_name)))
    }
}
