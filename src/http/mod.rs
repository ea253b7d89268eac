//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request path
//!     → server.rs (Axum setup, middleware, dispatch into the resolver)
//!     → route fetch against the post store
//!     → document.rs (full page shell around the rendered view)
//!     → Send to client
//!
//! /bundle.js → bundle.rs (write-once cached artifact)
//! ```

pub mod bundle;
pub mod document;
pub mod server;

pub use bundle::BundleCache;
pub use server::HttpServer;
