use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::parser::Parser,
};

/// Splits the first character off `input`.
fn split_first(input: &str) -> Result<(char, &str), Error> {
    let mut chars = input.chars();
    match chars.next() {
        Some(ch) => Ok((ch, chars.as_str())),
        None => Err(Error::new(ErrorImpl::EmptyInput)),
    }
}

/// Consumes one character of the given class.
fn class_parser(class: &'static str, predicate: fn(char) -> bool) -> Parser<char> {
    Parser::new(move |input| {
        let (found, rest) = split_first(input)?;
        if predicate(found) {
            Ok((found, rest))
        } else {
            Err(Error::new(ErrorImpl::UnexpectedClass { found, class }))
        }
    })
}

/// Matches exactly `expected` at the front of the input.
pub fn char_parser(expected: char) -> Parser<char> {
    Parser::new(move |input| {
        let (found, rest) = split_first(input)?;
        if found == expected {
            Ok((found, rest))
        } else {
            Err(Error::new(ErrorImpl::UnexpectedChar { found, expected }))
        }
    })
}

pub fn letter_parser() -> Parser<char> {
    class_parser("letter", char::is_alphabetic)
}

pub fn digit_parser() -> Parser<char> {
    class_parser("digit", |ch| ch.is_ascii_digit())
}

pub fn addition_parser() -> Parser<char> {
    char_parser('+')
}

pub fn subtraction_parser() -> Parser<char> {
    char_parser('-')
}

pub fn multiplication_parser() -> Parser<char> {
    char_parser('*')
}

pub fn division_parser() -> Parser<char> {
    char_parser('/')
}

pub fn open_bracket_parser() -> Parser<char> {
    char_parser('(')
}

pub fn close_bracket_parser() -> Parser<char> {
    char_parser(')')
}

/// Matches a regular expression at the very front of the input and returns
/// the matched text.
///
/// Fails with `InvalidPattern` if `pattern` does not compile.
pub fn pattern_parser(pattern: &str) -> Result<Parser<String>, Error> {
    let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|err| {
        Error::new(ErrorImpl::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
    })?;
    let pattern = pattern.to_string();

    Ok(Parser::new(move |input| match regex.find(input) {
        Some(matched) => Ok((matched.as_str().to_string(), &input[matched.end()..])),
        None => Err(Error::new(ErrorImpl::NoPatternMatch {
            pattern: pattern.clone(),
        })),
    }))
}
