//! Unit tests for the arithmetic grammar.
//!
//! This module contains tests for each rule:
//! - Numbers and variable names
//! - Operators and factors
//! - Terms and operator chains
//! - Assignments
//! - Error cases

use crate::{ast::ast::Expr, errors::errors::ErrorImpl};

use super::grammar::{
    expr, factor, identifier_parser, number_parser, operator_parser, parse_assignment, term,
    variable_name_parser,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn num(value: i64) -> Expr {
    Expr::Number(value)
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

#[test]
fn test_number() {
    assert_eq!(number_parser().parse("42").unwrap(), (num(42), ""));
    assert_eq!(number_parser().parse("007+1").unwrap(), (num(7), "+1"));
}

#[test]
fn test_number_requires_a_digit() {
    let error = number_parser().parse("x").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NumberParseError {
            token: String::new()
        }
    );
}

#[test]
fn test_number_overflow() {
    let error = number_parser().parse("99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_identifier_run() {
    assert_eq!(
        identifier_parser().parse("x9_y=1").unwrap(),
        ("x9_y".to_string(), "=1")
    );
}

#[test]
fn test_variable_name_accepts_empty() {
    assert_eq!(variable_name_parser().parse("+1").unwrap(), (var(""), "+1"));
    assert_eq!(variable_name_parser().parse("").unwrap(), (var(""), ""));
}

#[test]
fn test_operator() {
    for op in ['+', '-', '*', '/'] {
        let input = op.to_string();
        assert_eq!(
            operator_parser().parse(&input).unwrap(),
            (Expr::Operator(op), "")
        );
    }

    let error = operator_parser().parse("%").unwrap_err();
    assert_eq!(error.to_string(), "Parsing failure, got % expected /");
}

#[test]
fn test_factor_number_first() {
    assert_eq!(factor().parse("12ab").unwrap(), (num(12), "ab"));
}

#[test]
fn test_factor_variable() {
    assert_eq!(factor().parse("x9_y").unwrap(), (var("x9_y"), ""));
    assert_eq!(factor().parse("_tmp+1").unwrap(), (var("_tmp"), "+1"));
}

#[test]
fn test_factor_rejects_empty_input() {
    assert!(factor().parse("").is_err());
    assert!(factor().parse("+").is_err());
}

#[test]
fn test_factor_parenthesised() {
    assert_eq!(
        factor().parse("(1+2)").unwrap(),
        (Expr::bin_op('+', num(1), num(2)), "")
    );
    assert!(factor().parse("(1+2").is_err());
}

#[test]
fn test_term() {
    assert_eq!(
        term().parse("3+4").unwrap(),
        (Expr::bin_op('+', num(3), num(4)), "")
    );
    assert_eq!(
        term().parse("a*b-c").unwrap(),
        (Expr::bin_op('*', var("a"), var("b")), "-c")
    );
}

#[test]
fn test_term_needs_operator() {
    assert!(term().parse("3").is_err());
    assert!(term().parse("3+").is_err());
}

#[test]
fn test_assignment() {
    init_logger();

    assert_eq!(
        parse_assignment().parse("x=3").unwrap(),
        (Expr::assignment("x", num(3)), "")
    );
}

#[test]
fn test_assignment_of_chain() {
    init_logger();

    assert_eq!(
        parse_assignment().parse("total=a+1*2").unwrap(),
        (
            Expr::assignment(
                "total",
                Expr::bin_op('*', Expr::bin_op('+', var("a"), num(1)), num(2))
            ),
            ""
        )
    );
}

#[test]
fn test_assignment_requires_name() {
    assert!(parse_assignment().parse("=3").is_err());
    assert!(parse_assignment().parse("1x=3").is_err());
}

#[test]
fn test_assignment_nested() {
    assert_eq!(
        expr().parse("x=y=2").unwrap(),
        (Expr::assignment("x", Expr::assignment("y", num(2))), "")
    );
}

#[test]
fn test_expr_single_factor() {
    assert_eq!(expr().parse("3").unwrap(), (num(3), ""));
    assert_eq!(expr().parse("x").unwrap(), (var("x"), ""));
}

#[test]
fn test_expr_folds_left() {
    init_logger();

    assert_eq!(
        expr().parse("1-2-3").unwrap(),
        (
            Expr::bin_op('-', Expr::bin_op('-', num(1), num(2)), num(3)),
            ""
        )
    );
}

#[test]
fn test_expr_has_no_precedence() {
    let (parsed, rest) = expr().parse("1+2*3").unwrap();

    assert_eq!(rest, "");
    assert_eq!(parsed.to_string(), "((1 + 2) * 3)");
}

#[test]
fn test_expr_parentheses() {
    let (parsed, rest) = expr().parse("(1+2)*(x-4)/2").unwrap();

    assert_eq!(rest, "");
    assert_eq!(parsed.to_string(), "(((1 + 2) * (x - 4)) / 2)");
}

#[test]
fn test_expr_deep_nesting() {
    let input = format!("{}1{}", "(".repeat(40), ")".repeat(40));

    assert_eq!(expr().parse(&input).unwrap(), (num(1), ""));
}

#[test]
fn test_expr_deep_nesting_unclosed() {
    let input = format!("{}1+2", "(".repeat(40));

    assert!(expr().parse(&input).is_err());
}

#[test]
fn test_expr_deep_nesting_in_chain() {
    let input = format!("x={}a-b{}*2", "(".repeat(30), ")".repeat(30));
    let (parsed, rest) = expr().parse(&input).unwrap();

    assert_eq!(rest, "");
    assert_eq!(parsed.to_string(), "x = ((a - b) * 2)");
}

fn assert_operators_folded(expr: &Expr) {
    match expr {
        Expr::BinOp { op, left, right } => {
            assert!(matches!(**op, Expr::Operator(_)), "{:?} is not an operator", op);
            assert_operators_folded(left);
            assert_operators_folded(right);
        }
        Expr::Assignment { expr, .. } => assert_operators_folded(expr),
        _ => (),
    }
}

#[test]
fn test_chain_binops_hold_operators() {
    let (parsed, _) = expr().parse("y=a-(b*c)/4+d").unwrap();

    assert_operators_folded(&parsed);
    assert_eq!(parsed.to_string(), "y = (((a - (b * c)) / 4) + d)");
}

#[test]
fn test_expr_stops_at_unknown_input() {
    assert_eq!(
        expr().parse("1+2 rest").unwrap(),
        (Expr::bin_op('+', num(1), num(2)), " rest")
    );
    assert_eq!(expr().parse("3=4").unwrap(), (num(3), "=4"));
}

#[test]
fn test_expr_dangling_operator() {
    // The trailing operator has no right operand so it is left unconsumed
    assert_eq!(expr().parse("1+2+").unwrap(), (Expr::bin_op('+', num(1), num(2)), "+"));
}

#[test]
fn test_expr_failure_surfaces_last_alternative() {
    let error = expr().parse("+").unwrap_err();

    assert_eq!(error.to_string(), "Parsing failure, got + expected (");
}
