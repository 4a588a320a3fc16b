#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

use crate::{ast::ast::Expr, parser::parser::ParseResult};

/// Renders a parse outcome as `Success(<expr>, "<remainder>")` or
/// `Failure(<message>)`.
pub fn describe_result(result: &ParseResult<'_, Expr>) -> String {
    match result {
        Ok((expr, rest)) => format!("Success({}, {:?})", expr, rest),
        Err(error) => format!("Failure({})", error),
    }
}
