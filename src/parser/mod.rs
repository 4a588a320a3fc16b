//! Parser combinator engine.
//!
//! This module contains the generic [`parser::Parser`] value and the
//! operators used to compose parsers:
//!
//! - `sequence` runs two parsers one after the other
//! - `or_else` tries an alternative on the original input
//! - `map` and `try_map` transform parsed values
//! - `repeat` applies a parser zero or more times
//!
//! The [`choice!`](crate::choice) macro folds `or_else` over any number of
//! alternatives.

pub mod parser;
