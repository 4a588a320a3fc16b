//! Arithmetic grammar rules.
//!
//! Every rule is built once, on first use, and cached. The public functions
//! hand out cheap clones of the cached parsers.
//!
//! ```text
//! expr       := assignment | factor (operator factor)*
//! assignment := variable '=' expr
//! term       := factor operator factor
//! factor     := number | variable | '(' expr ')'
//! operator   := '+' | '-' | '*' | '/'
//! ```
//!
//! There is no precedence: operator chains fold strictly left to right.

use lazy_static::lazy_static;

use crate::{
    ast::ast::Expr,
    choice,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::{
        addition_parser, char_parser, close_bracket_parser, digit_parser, division_parser,
        letter_parser, multiplication_parser, open_bracket_parser, subtraction_parser,
    },
    parser::parser::Parser,
};

lazy_static! {
    static ref IDENTIFIER: Parser<String> =
        choice!(letter_parser(), digit_parser(), char_parser('_'))
            .repeat()
            .map(|chars| chars.into_iter().collect());

    static ref VARIABLE_NAME: Parser<Expr> = identifier_parser().map(Expr::Variable);

    static ref NAMED_VARIABLE: Parser<String> = identifier_parser().try_map(|name| {
        if is_variable_name(&name) {
            Ok(name)
        } else {
            Err(Error::new(ErrorImpl::InvalidVariableName { name }))
        }
    });

    static ref NUMBER: Parser<Expr> = digit_parser().repeat().try_map(|digits| {
        let token: String = digits.into_iter().collect();
        token
            .parse::<i64>()
            .map(Expr::Number)
            .map_err(|_| Error::new(ErrorImpl::NumberParseError { token }))
    });

    static ref OPERATOR_CHAR: Parser<char> = choice!(
        addition_parser(),
        subtraction_parser(),
        multiplication_parser(),
        division_parser()
    );

    static ref OPERATOR: Parser<Expr> = operator_char().map(Expr::Operator);

    static ref FACTOR: Parser<Expr> = choice!(
        number_parser(),
        named_variable().map(Expr::Variable),
        open_bracket_parser()
            .sequence(Parser::defer(expr))
            .sequence(close_bracket_parser())
            .map(|((_, inner), _)| inner)
    );

    static ref TERM: Parser<Expr> = factor()
        .sequence(operator_char())
        .sequence(factor())
        .map(|((left, op), right)| Expr::bin_op(op, left, right));

    static ref ASSIGNMENT: Parser<Expr> = named_variable()
        .sequence(char_parser('='))
        .sequence(Parser::defer(expr))
        .map(|((variable, _), value)| Expr::assignment(variable, value));

    static ref EXPR: Parser<Expr> = {
        // Every operand is parsed exactly once
        let tail = operator_char().sequence(factor()).repeat();
        let chain = factor().sequence(tail).map(|(head, tail)| {
            if !tail.is_empty() {
                log::debug!("folding {} trailing operations onto {}", tail.len(), head);
            }
            tail.into_iter()
                .fold(head, |left, (op, right)| Expr::bin_op(op, left, right))
        });

        parse_assignment().or_else(chain)
    };
}

fn is_variable_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| !first.is_ascii_digit())
}

fn operator_char() -> Parser<char> {
    OPERATOR_CHAR.clone()
}

/// A variable name that is non-empty and does not start with a digit.
fn named_variable() -> Parser<String> {
    NAMED_VARIABLE.clone()
}

/// The longest run of letters, digits and underscores. May be empty.
pub fn identifier_parser() -> Parser<String> {
    IDENTIFIER.clone()
}

/// Wraps [`identifier_parser`] as a `Variable`. Matches the empty string when
/// the input does not start with an identifier character.
pub fn variable_name_parser() -> Parser<Expr> {
    VARIABLE_NAME.clone()
}

/// One or more digits as an `i64`.
pub fn number_parser() -> Parser<Expr> {
    NUMBER.clone()
}

pub fn operator_parser() -> Parser<Expr> {
    OPERATOR.clone()
}

/// A number, a variable, or a parenthesised expression, tried in that order.
pub fn factor() -> Parser<Expr> {
    FACTOR.clone()
}

/// Exactly one binary operation between two factors.
pub fn term() -> Parser<Expr> {
    TERM.clone()
}

pub fn parse_assignment() -> Parser<Expr> {
    ASSIGNMENT.clone()
}

/// An assignment, or an operator chain folded left to right.
///
/// Assignment is tried first: a bare variable would otherwise match as a
/// factor and leave the `=` unconsumed.
pub fn expr() -> Parser<Expr> {
    EXPR.clone()
}
