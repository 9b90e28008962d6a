//! Data model shared across the render pipeline.
//!
//! # Responsibility
//! - Define the theme-agnostic Atom tree every theme renders.
//! - Define the read-only dashboard input consumed by the transformer.
//!
//! # Invariants
//! - Atoms form a strict tree: each child is owned by exactly one parent.
//! - Core code never mutates a dashboard model.

pub mod atom;
pub mod dashboard;
