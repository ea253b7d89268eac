//! Grumblr: an isomorphic blog.
//!
//! The routing table, resolver, data-fetch contract and view components
//! are shared between the HTTP server and the client runtime; the
//! server renders the initial document, the client picks up from its
//! embedded props and keeps navigating without full reloads.

// Shared isomorphic core
pub mod app;
pub mod markup;
pub mod routing;
pub mod store;
pub mod views;

// Execution environments
pub mod client;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use app::{NavState, Navigator, Notice};
pub use client::{ClientRuntime, Environment};
pub use config::AppConfig;
pub use http::HttpServer;
pub use routing::{resolve, NavData, RouteKey};
pub use store::MemoryStore;
