// src/lib.rs
// Public library surface for the three binaries and the integration tests.

pub mod analyze;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod model;
pub mod sentiment;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::analyze::Categorizer;
pub use crate::api::router;
pub use crate::catalog::ArticleCatalog;
pub use crate::model::Article;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs to stderr. `RUST_LOG` wins; otherwise `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
