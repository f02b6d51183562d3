//! Business logic for skillplan.
//!
//! The catalog is built once from static skill data and never mutated. A
//! `SelectionEngine` owns one build's selection and keeps it closed under
//! prerequisites and within the point cap. Aggregation, profession naming and
//! export are pure functions over a catalog and a selection snapshot.
//!
//! This crate depends only on `skillplan-types` plus file loading for the
//! catalog and config. No terminal or UI code.

pub mod build;
pub mod catalog;
pub mod config;
pub mod loader;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::Catalog;
pub use selection::{Selection, SelectionEngine};
