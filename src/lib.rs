//! Lexical analysis for the PQ language.
//!
//! The [`lexer`] converts source text into a flat sequence of
//! [`Token`](lexer::tokens::Token)s, terminated by an end-of-input token.
pub mod error;
pub mod lexer;
pub mod position;
pub mod prelude;
pub mod source_map;
