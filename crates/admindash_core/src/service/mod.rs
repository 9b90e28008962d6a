//! Core use-case services.
//!
//! # Responsibility
//! - Compose transform, theme lookup, and page assembly into one call.
//! - Keep CLI and embedding callers decoupled from renderer internals.

pub mod dashboard_service;
