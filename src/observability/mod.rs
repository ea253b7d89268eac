//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → structured log events (tracing, initialized in main)
//!     → metrics.rs (page request counters)
//!
//! Consumers:
//!     → stdout log output
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log lines via tower-http layers
//! - Metrics are cheap atomic increments; the exporter is opt-in

pub mod metrics;
