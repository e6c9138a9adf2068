//! Shared test fixtures for translator tests.
//!
//! Builds the handful of engine types nearly every test needs and a translator
//! wired to a `DiagnosticCollector` so tests can assert on degradations.

use crate::TypeTranslator;
use tscc_common::DiagnosticCollector;
use tscc_model::{NodeIndex, TypeFlags, TypeId, TypeStore};

/// Anchor node used by every fixture translator.
pub const ANCHOR: NodeIndex = NodeIndex(0);

pub type TestTranslator<'a> = TypeTranslator<'a, TypeStore, DiagnosticCollector>;

/// One instance of each primitive kind.
pub struct Primitives {
    pub any: TypeId,
    pub string: TypeId,
    pub number: TypeId,
    pub boolean: TypeId,
    pub symbol: TypeId,
    pub void: TypeId,
    pub undefined: TypeId,
    pub null: TypeId,
    pub never: TypeId,
}

impl Primitives {
    pub fn new(store: &mut TypeStore) -> Self {
        Self {
            any: store.primitive(TypeFlags::ANY),
            string: store.primitive(TypeFlags::STRING),
            number: store.primitive(TypeFlags::NUMBER),
            boolean: store.boolean(),
            symbol: store.primitive(TypeFlags::ES_SYMBOL),
            void: store.primitive(TypeFlags::VOID),
            undefined: store.primitive(TypeFlags::UNDEFINED),
            null: store.primitive(TypeFlags::NULL),
            never: store.primitive(TypeFlags::NEVER),
        }
    }
}

/// A store pre-populated with [`Primitives`].
pub fn store_with_primitives() -> (TypeStore, Primitives) {
    let mut store = TypeStore::new();
    let primitives = Primitives::new(&mut store);
    (store, primitives)
}

pub fn translator(store: &TypeStore) -> TestTranslator<'_> {
    tscc_common::tracing_config::init_tracing();
    TypeTranslator::new(store, ANCHOR).with_diagnostics(DiagnosticCollector::new())
}

/// Translate with a fresh translator, panicking on fatal errors.
pub fn translate(store: &TypeStore, type_id: TypeId) -> String {
    translator(store)
        .translate(type_id)
        .expect("translation should not fail")
}
