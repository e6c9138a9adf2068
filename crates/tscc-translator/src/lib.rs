//! Closure type-annotation translator.
//!
//! Converts fully-resolved types from a TypeScript type-checking engine into
//! the type expressions understood by the Closure Compiler:
//!
//! | TypeScript | Closure |
//! |------------|---------|
//! | `any`, type parameters, `never` | `?` |
//! | `string \| undefined` | `(string\|undefined)` |
//! | `class Foo` | `!Foo` |
//! | `Map<string, number>` | `!Map<string, number>` |
//! | `[number, string]` | `!Array<?>` |
//! | `{a: number}` | `{a: number}` |
//! | `{[k: string]: T}` | `!Object<string,T>` |
//! | `(x: number) => string` | `function(number): string` |
//! | `{new (x: number): Foo}` | `function(new: (!Foo), number): ?` |
//!
//! Lossy cases are reported to a [`tscc_common::DiagnosticSink`] and fall
//! back to `?`; engine inconsistencies are returned as [`TranslateError`].

pub mod error;
mod names;
mod object;
pub mod options;
mod translator;
pub mod type_kind;
mod type_literal;

pub use error::{OptionsError, TranslateError, TranslateResult};
pub use names::{NameWriter, is_builtin_lib_path};
pub use object::TUPLE_ANNOTATION;
pub use options::TranslatorOptions;
pub use translator::{TypeTranslator, UNKNOWN_ANNOTATION};
pub use type_kind::TypeKind;
pub use type_literal::{EMPTY_OBJECT_ANNOTATION, UNKNOWN_MAP_ANNOTATION};

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/translator_tests.rs"]
mod translator_tests;
#[cfg(test)]
#[path = "../tests/union_tests.rs"]
mod union_tests;
#[cfg(test)]
#[path = "../tests/object_tests.rs"]
mod object_tests;
#[cfg(test)]
#[path = "../tests/type_literal_tests.rs"]
mod type_literal_tests;
#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod names_tests;
