//! Random arithmetic-expression generation library.
//!
//! This crate builds synthetic input lines for an expression parser:
//! - Flat expression strings of alternating numeric literals and operators
//! - Random lowercase identifiers used as assignment targets
//! - A line emitter batching expressions onto an output stream
//!
//! Generation is pure string building: nothing here parses or evaluates
//! the produced expressions. All randomness flows through an explicit
//! `rand::Rng` handle so callers can seed generation for reproducible runs.

/// Expression, identifier and line generation.
///
/// This module exposes the whole generation surface; there is no internal
/// state to protect, so every submodule is public.
pub mod generate;
