//! # pantry-core
//!
//! Core types and error types for Pantry.
//!
//! This crate provides the foundational types shared across all Pantry crates:
//! - Catalogue entities (recipes and the entries an audit iterates over)
//! - Audit records (issues, per-recipe analyses, library summaries)
//! - Section and severity enums
//! - Cross-cutting error types
//! - ID prefix constants

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
