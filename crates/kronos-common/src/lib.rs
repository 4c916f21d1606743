//! # kronos-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire kronos workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and knows nothing about terminals or rendering backends.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
