//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::position::Position;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub value: Option<Value>,
}
impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            position,
            value: None,
        }
    }

    pub fn with_value(kind: TokenKind, position: Position, value: Value) -> Self {
        Self {
            kind,
            position,
            value: Some(value),
        }
    }

    /// The text carried by identifier, declarator, string and comment tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Formats the token as a single listing line: kind, position, then value.
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<28}{:<10}",
            self.kind.to_string(),
            self.position.to_string()
        )?;
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Parentheses
    LeftParen,
    RightParen,
    // Brackets
    LeftCurlyBracket,
    RightCurlyBracket,
    LeftSquareBracket,
    RightSquareBracket,
    // Binary operators
    BinPlus,
    BinMinus,
    BinMultiply,
    BinDivide,
    BinPercent,
    BinGreaterThan,
    BinLessThan,
    BinEquals,
    // Punctuation
    Accessor,
    Separator,
    Assign,
    Terminator,
    // Reserved symbols
    Underscore,
    Ampersand,
    Caret,
    Dollar,
    Hash,
    At,
    Exclamation,
    // Words and literals
    Declarator(Declarator),
    Identifier,
    Number,
    String,
    Comment,
    EndOfInput,
}

impl TokenKind {
    /// Looks up a single-character binary operator.
    /// `==` is two characters wide and is not covered here.
    pub fn binary_operator(ch: char) -> Option<Self> {
        Some(match ch {
            '+' => Self::BinPlus,
            '-' => Self::BinMinus,
            '/' => Self::BinDivide,
            '*' => Self::BinMultiply,
            '%' => Self::BinPercent,
            '>' => Self::BinGreaterThan,
            '<' => Self::BinLessThan,
            _ => return None,
        })
    }

    pub fn bracket(ch: char) -> Option<Self> {
        Some(match ch {
            '{' => Self::LeftCurlyBracket,
            '}' => Self::RightCurlyBracket,
            '[' => Self::LeftSquareBracket,
            ']' => Self::RightSquareBracket,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            _ => return None,
        })
    }

    /// Looks up punctuation and the reserved single-character symbols.
    pub fn punctuation(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Accessor,
            ',' => Self::Separator,
            '=' => Self::Assign,
            ';' => Self::Terminator,
            '_' => Self::Underscore,
            '&' => Self::Ampersand,
            '^' => Self::Caret,
            '$' => Self::Dollar,
            '#' => Self::Hash,
            '@' => Self::At,
            '!' => Self::Exclamation,
            _ => return None,
        })
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Self::BinPlus
                | Self::BinMinus
                | Self::BinMultiply
                | Self::BinDivide
                | Self::BinPercent
                | Self::BinGreaterThan
                | Self::BinLessThan
                | Self::BinEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Declarator(_) => f.write_str("Declarator"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// A reserved word that introduces a declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Declarator {
    Let,
    Function,
    Class,
    Enum,
}

impl Declarator {
    /// Case-sensitive lookup of a scanned word.
    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "let" => Self::Let,
            "function" => Self::Function,
            "class" => Self::Class,
            "enum" => Self::Enum,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{}", float),
            Self::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_operators_are_binary() {
        let operators: Vec<TokenKind> = "+-*/%><"
            .chars()
            .filter_map(TokenKind::binary_operator)
            .chain([TokenKind::BinEquals])
            .collect();

        assert_eq!(operators.len(), 8);
        assert!(operators.iter().all(TokenKind::is_binary_operator));
        assert!(!TokenKind::Assign.is_binary_operator());
    }

    #[test]
    fn declarators_are_case_sensitive() {
        assert_eq!(Declarator::from_word("let"), Some(Declarator::Let));
        assert_eq!(Declarator::from_word("enum"), Some(Declarator::Enum));
        assert_eq!(Declarator::from_word("Let"), None);
        assert_eq!(Declarator::from_word("letter"), None);
    }

    #[test]
    fn listing_line_without_value() {
        let token = Token::new(TokenKind::Assign, Position::new(0, 2));

        assert_eq!(token.to_string(), format!("{:<28}{:<10}", "Assign", "(0, 2)"));
    }

    #[test]
    fn listing_line_quotes_text() {
        let token = Token::with_value(
            TokenKind::Declarator(Declarator::Let),
            Position::new(1, 0),
            Value::Text("let".to_string()),
        );

        assert_eq!(
            token.to_string(),
            format!("{:<28}{:<10}\"let\"", "Declarator", "(1, 0)")
        );
    }

    #[test]
    fn listing_line_leaves_numbers_bare() {
        let int = Token::with_value(TokenKind::Number, Position::new(0, 0), Value::Integer(42));
        let float = Token::with_value(TokenKind::Number, Position::new(0, 0), Value::Float(3.5));

        assert!(int.to_string().ends_with(" 42"));
        assert!(float.to_string().ends_with(" 3.5"));
    }
}
