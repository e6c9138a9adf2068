//! Common types and utilities for the tscc type translator.
//!
//! This crate provides the pieces shared by the type model and the
//! translation engine:
//! - The diagnostics hook (`DiagnosticSink`, `NoopSink`, `DiagnosticCollector`)
//! - Translation limits and thresholds
//! - Tracing subscriber configuration

// Diagnostics hook for degraded translations
pub mod diagnostics;
pub use diagnostics::{DiagnosticCollector, DiagnosticSink, NoopSink};

// Centralized limits and thresholds
pub mod limits;

// Opt-in tracing subscriber (TSCC_LOG / TSCC_LOG_FORMAT)
pub mod tracing_config;
