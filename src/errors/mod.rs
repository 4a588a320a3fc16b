//! Error types shared by every parser.
//!
//! A failed parse produces an [`errors::Error`] value rather than aborting.
//! The error wraps one of the [`errors::ErrorImpl`] variants:
//!
//! - Empty input reached by a character primitive
//! - A character or character class mismatch
//! - Integer conversion and identifier validation failures
//! - Pattern primitive failures

pub mod errors;
