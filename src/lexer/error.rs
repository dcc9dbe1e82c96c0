//! Errors that abort a lexing pass.
use std::{
    fmt::{Display, Formatter},
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;

use crate::{error::PositionalError, position::Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Unclosed string literal")]
    UnclosedStringLiteral,
    #[error("Malformed number: {0}")]
    MalformedNumber(NumberError),
    #[error("Unknown token '{0}'")]
    UnknownCharacter(char),
}

/// The reason a numeric literal was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("more than one decimal point")]
    MultipleDecimalPoints,
    #[error("{0}")]
    InvalidInteger(#[from] ParseIntError),
    #[error("{0}")]
    InvalidFloat(#[from] ParseFloatError),
}

/// A lexing failure, located at the start of the offending token.
#[derive(Error, Debug, PartialEq, Eq)]
pub struct LexError {
    pub position: Position,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn new(position: Position, error_type: ErrorType) -> Self {
        Self {
            position,
            error_type,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.error_type, self.position)
    }
}

impl PositionalError for LexError {
    fn position(&self) -> Position {
        self.position
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_reason_and_position() {
        let error = LexError::new(
            Position::new(2, 7),
            ErrorType::MalformedNumber(NumberError::MultipleDecimalPoints),
        );

        assert_eq!(
            error.to_string(),
            "Malformed number: more than one decimal point at (2, 7)"
        );
    }

    #[test]
    fn unknown_character_names_the_character() {
        let error = LexError::new(Position::new(0, 0), ErrorType::UnknownCharacter('~'));

        assert_eq!(error.describe(), "Unknown token '~'");
    }
}
