use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyInput => "EmptyInput",
            ErrorImpl::UnexpectedChar { .. } => "UnexpectedChar",
            ErrorImpl::UnexpectedClass { .. } => "UnexpectedClass",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidVariableName { .. } => "InvalidVariableName",
            ErrorImpl::NoPatternMatch { .. } => "NoPatternMatch",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyInput => ErrorTip::None,
            ErrorImpl::UnexpectedChar { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedClass { class, .. } => {
                ErrorTip::Suggestion(format!("Expected a {} here", class))
            }
            ErrorImpl::NumberParseError { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Expected at least one digit"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidVariableName { name } if name.is_empty() => {
                ErrorTip::Suggestion(String::from("Expected a variable name"))
            }
            ErrorImpl::InvalidVariableName { name } => ErrorTip::Suggestion(format!(
                "Variable `{}` must start with a letter or an underscore",
                name
            )),
            ErrorImpl::NoPatternMatch { .. } => ErrorTip::None,
            ErrorImpl::InvalidPattern { message, .. } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Parsing failure, empty string")]
    EmptyInput,
    #[error("Parsing failure, got {found} expected {expected}")]
    UnexpectedChar { found: char, expected: char },
    #[error("Parsing failure, got {found} expected {class}")]
    UnexpectedClass { found: char, class: &'static str },
    #[error("Parsing failure, invalid number {token:?}")]
    NumberParseError { token: String },
    #[error("Parsing failure, invalid variable name {name:?}")]
    InvalidVariableName { name: String },
    #[error("Parsing failure, no match for pattern {pattern:?}")]
    NoPatternMatch { pattern: String },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
