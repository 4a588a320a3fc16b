//! Utility macros for building grammars.
//!
//! - `choice!` - Ordered alternation over any number of parsers

/// Tries each parser in order on the same input and returns the first
/// success. If every alternative fails, the last failure is returned.
///
/// # Example
///
/// ```ignore
/// let sign = choice!(char_parser('+'), char_parser('-'));
/// ```
#[macro_export]
macro_rules! choice {
    ($first:expr $(, $rest:expr)+ $(,)?) => {
        $first$(.or_else($rest))+
    };
}
