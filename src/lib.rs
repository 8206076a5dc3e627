//! # mathkit
//!
//! mathkit is a small numeric toolkit written in Rust. It bundles five
//! independent engines: complex arithmetic with step-by-step derivations, set
//! algebra over raw string elements, boolean and bitwise logic, integer base
//! conversion, and a classifier for number properties.
//!
//! Every engine is a set of pure functions over plain values. Results carry
//! enough structure (equations, traces, rows) for a front end to render them
//! without recomputing anything.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree used by the arithmetic evaluator.
///
/// The tree is built by [`expression::parse_tokens`] and consumed by
/// [`expression::eval_expr`]. Each node records the byte offset of the token
/// it came from.
pub mod ast;
/// Integer conversion between bases 2 through 36.
///
/// # Responsibilities
/// - Validates every digit against the source base before any arithmetic.
/// - Converts exactly, with overflow reported rather than wrapped.
/// - Reports the requested targets in a fixed, labelled order.
pub mod base;
/// Complex arithmetic with derivation traces.
///
/// Operand text is parsed eagerly, the selected operation is computed, and the
/// result is packaged with the equation it satisfies and the intermediate
/// steps that produced it.
pub mod complex;
/// Provides unified error types for every engine.
///
/// # Responsibilities
/// - Separates malformed text (`ParseError`) from domain failures
///   (`MathError`).
/// - Carries the offending input and the rule it broke in every variant.
pub mod error;
/// A restricted arithmetic-expression evaluator.
///
/// Accepts numeric and imaginary literals, unary signs, `+ - * /` and
/// parentheses, and nothing else. It is the only way text becomes a number in
/// the property classifier.
pub mod expression;
/// The caller-owned log of number analyses and its export format.
pub mod history;
/// Boolean and bitwise logic.
///
/// Bit strings, single booleans and truth tables all go through one per-bit
/// function per operation, so the three views can never disagree.
pub mod logic;
/// Classification of numbers into the usual number-theoretic families.
pub mod property;
/// Set algebra over raw string elements.
pub mod set;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert between `f64`, `u64`, `usize` and `i128` without silent
///   data loss.
/// - Render reals consistently across engines.
pub mod util;
