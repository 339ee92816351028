//! Top-level module for the expression generation system.
//!
//! This crate provides a flat expression-string generator, including:
//! - Literal sampling bounds and the expression builder (`expression`)
//! - Random assignment-target identifiers (`identifier`)
//! - Batched line emission to an output stream (`emitter`)

/// Numeric literal bounds (`NumericRange`) and the flat expression builder.
///
/// Produces single-space separated strings alternating literal and
/// operator tokens. Pure with respect to I/O.
pub mod expression;

/// Random lowercase identifiers simulating variable names.
pub mod identifier;

/// Batched emission of expression lines to a writable stream.
///
/// Owns all writing; the expression builder itself never touches a stream.
pub mod emitter;
