//! The combinator engine.
//!
//! A [`Parser`] wraps a function from the remaining input to a
//! [`ParseResult`]. On success the function returns the parsed value together
//! with the unconsumed suffix of its input; on failure it returns an
//! [`Error`] describing what was expected.
//!
//! Parsers are immutable and hold no mutable state, so cloning one only bumps
//! a reference count and the same parser may be run any number of times,
//! from any thread.

use std::sync::Arc;

use crate::errors::errors::Error;

/// Either the parsed value and the remainder of the input, or a failure.
///
/// The remainder is always a suffix of the input the parser was called with.
pub type ParseResult<'a, A> = Result<(A, &'a str), Error>;

/// The function type stored inside every [`Parser`].
pub type ParseFn<A> = dyn for<'a> Fn(&'a str) -> ParseResult<'a, A> + Send + Sync;

pub struct Parser<A> {
    p: Arc<ParseFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Parser {
            p: Arc::clone(&self.p),
        }
    }
}

impl<A: 'static> Parser<A> {
    /// Creates a parser from a parsing function.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a, A> + Send + Sync + 'static,
    {
        Parser { p: Arc::new(f) }
    }

    /// Creates a parser that looks up `rule` each time it runs.
    ///
    /// Lets grammar rules refer to each other recursively without building
    /// an infinitely deep parser up front.
    pub fn defer(rule: fn() -> Parser<A>) -> Self {
        Parser::new(move |input| rule().parse(input))
    }

    /// Returns the underlying parsing function, ready to be called with the
    /// full input.
    pub fn start(&self) -> Arc<ParseFn<A>> {
        Arc::clone(&self.p)
    }

    /// Runs the parser against `input`.
    pub fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, A> {
        (self.p)(input)
    }

    /// Runs `self`, then `that` on whatever `self` left over, pairing both
    /// values.
    ///
    /// If `self` fails its failure is returned unchanged and `that` is never
    /// attempted.
    pub fn sequence<B: 'static>(self, that: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |input| {
            let (a, rest) = self.parse(input)?;
            let (b, rest) = that.parse(rest)?;
            Ok(((a, b), rest))
        })
    }

    /// Ordered choice.
    ///
    /// Tries `self` on the input; if that fails, its error is discarded and
    /// `that` is tried on the same, unconsumed input. The first alternative
    /// that succeeds wins. If both fail, the failure of `that` is returned.
    pub fn or_else(self, that: Parser<A>) -> Parser<A> {
        Parser::new(move |input| {
            self.parse(input).or_else(|error| {
                log::trace!("alternative failed ({}), trying next", error);
                that.parse(input)
            })
        })
    }

    /// Transforms the parsed value. The remainder and any failure pass
    /// through untouched.
    pub fn map<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Parser::new(move |input| self.parse(input).map(|(value, rest)| (f(value), rest)))
    }

    /// Like [`Parser::map`], but the transformation may reject the value.
    pub fn try_map<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> Result<B, Error> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            Ok((f(value)?, rest))
        })
    }

    /// Zero or more repetitions.
    ///
    /// Empty input always succeeds with no values. Otherwise `self` is applied
    /// until it fails or the input runs out, and the values matched so far are
    /// returned with the remainder at that point.
    ///
    /// `self` must consume input whenever it succeeds, otherwise this never
    /// terminates.
    pub fn repeat(self) -> Parser<Vec<A>> {
        Parser::new(move |input| {
            let mut values = Vec::new();
            let mut rest = input;

            while !rest.is_empty() {
                match self.parse(rest) {
                    Ok((value, remainder)) => {
                        values.push(value);
                        rest = remainder;
                    }
                    Err(error) => {
                        log::trace!("repeat stopped after {} matches: {}", values.len(), error);
                        break;
                    }
                }
            }

            Ok((values, rest))
        })
    }
}
