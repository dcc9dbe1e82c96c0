//! Lexing functions for constructing a token stream.
use crate::prelude::{debug, trace};

use super::{char_ext::*, char_lexer::*, error::*, tokens::*};

type LexResult<T> = Result<T, LexError>;

/// Converts `source` into a token stream ending in [`TokenKind::EndOfInput`].
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source.to_string()).run()
}

/// Scans a single source text. Construct one per source and discard it
/// after calling [`Lexer::run`].
pub struct Lexer {
    lexer: CharLexer,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        Self {
            lexer: CharLexer::new(&source),
            tokens: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read. The first error aborts the pass.
    pub fn run(mut self) -> LexResult<Vec<Token>> {
        debug!("Lexing started");

        while let Some(ch) = self.lexer.current() {
            self.step(ch)?;
        }

        let end = self.lexer.position();
        self.push(Token::new(TokenKind::EndOfInput, end));

        debug!(
            "Lexing finished: {} characters, {} tokens",
            self.lexer.offset(),
            self.tokens.len()
        );
        Ok(self.tokens)
    }

    /// Dispatches on the character under the cursor. Every branch consumes
    /// at least one character.
    fn step(&mut self, ch: char) -> LexResult<()> {
        match (ch, self.lexer.peek(1)) {
            (' ', _) => self.lexer.advance(1),
            ('\n', _) => self.lexer.consume_newline(),
            ('\t', _) => self.lexer.consume_tab(),
            // Two-character lookahead must win over the single-character tables.
            ('=', Some('=')) => self.binary_equals(),
            ('/', Some('/')) => self.comment(),
            _ => {
                if let Some(kind) = TokenKind::binary_operator(ch)
                    .or_else(|| TokenKind::bracket(ch))
                    .or_else(|| TokenKind::punctuation(ch))
                {
                    self.single_character(kind);
                } else if ch.is_identifier_start() {
                    self.word();
                } else if ch.is_ascii_digit() {
                    self.number()?;
                } else if ch.is_quote() {
                    self.string_literal()?;
                } else {
                    return Err(self.make_error(ErrorType::UnknownCharacter(ch)));
                }
            }
        }
        Ok(())
    }

    fn single_character(&mut self, kind: TokenKind) {
        let position = self.lexer.position();
        self.lexer.advance(1);
        self.push(Token::new(kind, position));
    }

    fn binary_equals(&mut self) {
        let position = self.lexer.position();
        self.lexer.advance(2);
        self.push(Token::new(TokenKind::BinEquals, position));
    }

    /// Reads a `//` comment up to (not including) the end of the line.
    fn comment(&mut self) {
        let position = self.lexer.position();
        self.lexer.advance(2);
        let text = self.lexer.consume_while(CharExt::is_not_linebreak);

        self.push(Token::with_value(
            TokenKind::Comment,
            position,
            Value::Text(text.trim_start().to_string()),
        ));
    }

    /// Reads an identifier, classifying it as a declarator if it is a reserved word.
    fn word(&mut self) {
        let position = self.lexer.position();
        let word = self.lexer.consume_while(CharExt::is_identifier_continuation);

        let kind = match Declarator::from_word(&word) {
            Some(declarator) => TokenKind::Declarator(declarator),
            None => TokenKind::Identifier,
        };
        self.push(Token::with_value(kind, position, Value::Text(word)));
    }

    /// Reads digits and decimal points. No decimal point makes an integer,
    /// one makes a float, and more than one is an error.
    fn number(&mut self) -> LexResult<()> {
        let position = self.lexer.position();
        let text = self.lexer.consume_while(CharExt::is_number_part);
        let dots = text.chars().filter(|&ch| ch == '.').count();

        let value = match dots {
            0 => text.parse().map(Value::Integer).map_err(NumberError::from),
            1 => text.parse().map(Value::Float).map_err(NumberError::from),
            _ => Err(NumberError::MultipleDecimalPoints),
        }
        .map_err(|err| LexError::new(position, ErrorType::MalformedNumber(err)))?;

        self.push(Token::with_value(TokenKind::Number, position, value));
        Ok(())
    }

    /// Reads a string literal. Escapes are not processed.
    ///
    /// Both delimiters are skipped two characters at a time, so the character
    /// after the opening quote and the character after the closing quote are
    /// dropped as well.
    fn string_literal(&mut self) -> LexResult<()> {
        let position = self.lexer.position();
        self.lexer.advance(2);
        let text = self.lexer.consume_while(|ch| !ch.is_quote());

        if self.lexer.is_finished() {
            return Err(LexError::new(position, ErrorType::UnclosedStringLiteral));
        }
        self.lexer.advance(2);

        self.push(Token::with_value(TokenKind::String, position, Value::Text(text)));
        Ok(())
    }

    fn push(&mut self, token: Token) {
        trace!("{:?} at {}", token.kind, token.position);
        self.tokens.push(token);
    }

    fn make_error(&self, error_type: ErrorType) -> LexError {
        LexError::new(self.lexer.position(), error_type)
    }
}
