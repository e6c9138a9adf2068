//! Diagnostics hook for the type translator.
//!
//! Translation never fails for a type it merely cannot express. Instead it
//! reports a human-readable message through a [`DiagnosticSink`] and falls back
//! to a safe annotation (usually `?`). The embedding pipeline decides what to
//! do with the messages: ignore them (the default [`NoopSink`]), collect them
//! ([`DiagnosticCollector`]), or forward them with a closure.
//!
//! # Example
//!
//! ```
//! use tscc_common::{DiagnosticCollector, DiagnosticSink};
//!
//! let mut collector = DiagnosticCollector::new();
//! collector.report("unhandled anonymous type");
//! assert_eq!(collector.messages(), ["unhandled anonymous type"]);
//! ```

/// Receives a message for every degraded or unhandled translation case.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Closures are the lightest way to override the hook.
impl<F> DiagnosticSink for F
where
    F: FnMut(&str),
{
    fn report(&mut self, message: &str) {
        self(message);
    }
}

/// Discards every message. This is the translator's default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn report(&mut self, _message: &str) {}
}

/// Records messages in the order they were reported.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
