//! Character-level primitives.
//!
//! These parsers look at the front of the remaining input and consume at
//! most one character, except for `pattern_parser`, which consumes whatever
//! an anchored regular expression matches. Everything else in the grammar is
//! composed from them.

pub mod lexer;
