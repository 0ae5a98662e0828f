//! # timesum-core
//!
//! Recognition-and-conversion pipeline for summing time expressions.
//!
//! Each input token is one of three textual shapes:
//!
//! - a clock range — `07:45-11:19` counts as the absolute difference
//!   between the two clock times (214 minutes here)
//! - an absolute clock time — `14:30` counts as minutes since midnight
//! - decimal hours — `2.25` or bare `3` count as whole and fractional hours
//!
//! Tokens are classified against the three grammars, validated, converted to
//! minute counts, summed in input order, and rendered as `HH:MM`. The first
//! invalid token aborts the whole run.
//!
//! ## Quick start
//!
//! ```rust
//! use timesum_core::{sum_and_format, Grammar};
//!
//! let grammar = Grammar::new();
//! let total = sum_and_format(&grammar, ["1:00", "2:30"]).unwrap();
//! assert_eq!(total, "03:30");
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] — classifies a token into one of the supported shapes
//! - [`convert`] — per-shape conversion into minute counts
//! - [`eval`] — single-token evaluation, accumulation, and formatting
//! - [`error`] — evaluation failure types

pub mod convert;
pub mod error;
pub mod eval;
pub mod grammar;

pub use error::{EvalError, Result, TimeField};
pub use eval::{evaluate, format_minutes, sum_and_format};
pub use grammar::{Grammar, Shape};

/// A non-negative count of minutes — the common currency between the
/// converters and the accumulator.
pub type MinuteCount = u64;
