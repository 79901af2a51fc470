//! Core types and service wiring for the collecte waste-collection aggregator.

/// Domain models and identifiers shared by all sources.
pub mod model;
/// Registry and helpers for plugging municipal sources into the service.
pub mod plugin;
/// Traits describing the source interfaces, plus the shared error type.
pub mod ports;
/// High-level service facade used by hosts.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
