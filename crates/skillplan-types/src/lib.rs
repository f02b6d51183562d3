//! Shared domain types for skillplan.
//!
//! This crate contains the data shapes used across the planner: the raw skill
//! data as shipped with the calculator, the normalized `Skill` and
//! `Profession` types, the planner configuration, and the error enums.
//!
//! No infrastructure dependencies: only serde, serde_json and thiserror.

pub mod config;
pub mod error;
pub mod skill;
pub mod step;
