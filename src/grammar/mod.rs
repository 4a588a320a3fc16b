//! Arithmetic expressions with variable assignment.
//!
//! The grammar is composed entirely from the combinator engine and the
//! character primitives. It handles:
//!
//! - Numbers and variable names
//! - The four binary operators `+ - * /`
//! - Parenthesised sub-expressions
//! - Assignments such as `x=3+y`

pub mod grammar;

#[cfg(test)]
mod tests;
