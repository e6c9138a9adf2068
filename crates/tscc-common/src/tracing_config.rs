//! Opt-in tracing subscriber for debugging translations.
//!
//! The translator crates only emit `tracing` events; nothing is printed until
//! an embedder calls [`init_tracing`] with one of the filter variables set:
//!
//! ```bash
//! # Flat text, everything at debug
//! TSCC_LOG=debug my-pipeline
//!
//! # Indented tree of the translator's trace events
//! TSCC_LOG="tscc_translator=trace" TSCC_LOG_FORMAT=tree my-pipeline
//! ```
//!
//! `TSCC_LOG` takes precedence over `RUST_LOG`. Output always goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Filter directives for the translator crates.
pub const LOG_ENV: &str = "TSCC_LOG";
/// Output format selector, see [`LogFormat::parse`].
pub const LOG_FORMAT_ENV: &str = "TSCC_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Hierarchical output via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Subscriber settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// `None` when neither filter variable is set.
    pub fn from_vars(
        tscc_log: Option<String>,
        rust_log: Option<String>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = tscc_log.or(rust_log)?;
        Some(Self {
            directives,
            format: format.map_or(LogFormat::Text, LogFormat::parse),
        })
    }

    pub fn from_env() -> Option<Self> {
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_vars(
            std::env::var(LOG_ENV).ok(),
            std::env::var(FALLBACK_LOG_ENV).ok(),
            format.as_deref(),
        )
    }

    /// Install the global subscriber. Returns `false` when one was already
    /// installed, in which case the existing subscriber is kept.
    pub fn install(&self) -> bool {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        let registry = Registry::default().with(filter);
        let installed = match self.format {
            LogFormat::Tree => registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_indent_lines(true)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        }
        .is_ok();

        if installed {
            tracing::debug!(
                directives = %self.directives,
                format = ?self.format,
                "tracing subscriber installed"
            );
        }
        installed
    }
}

/// Install the subscriber described by `TSCC_LOG`/`RUST_LOG` and
/// `TSCC_LOG_FORMAT`. Does nothing when no filter is set. Safe to call more
/// than once.
pub fn init_tracing() {
    if let Some(settings) = TracingSettings::from_env() {
        settings.install();
    }
}
