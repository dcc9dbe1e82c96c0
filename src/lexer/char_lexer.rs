use crate::{position::Position, source_map::TAB_WIDTH};

/// A cursor over the characters of a source string, with position information.
///
/// The offset only ever moves forward. End of input is represented by
/// [`CharLexer::current`] returning [`None`].
#[derive(Clone)]
pub struct CharLexer {
    chars: Vec<char>,
    offset: usize,
    position: Position,
}

impl CharLexer {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at offset `0`, position `(0, 0)`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            offset: 0,
            position: Position::default(),
        }
    }

    /// Returns the character under the cursor, or [`None`] at the end of input.
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character `distance` characters ahead of the cursor
    /// without consuming anything.
    pub fn peek(&self, distance: usize) -> Option<char> {
        self.chars.get(self.offset + distance).copied()
    }

    /// Retrieves the position of the character under the cursor.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Retrieves the number of characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor `amount` characters forward, adding `amount` to the column.
    /// The column is advanced by the full amount even if the input runs out first.
    pub fn advance(&mut self, amount: usize) {
        self.position.column += amount;
        self.offset = (self.offset + amount).min(self.chars.len());
    }

    /// Consumes a line feed: the row goes up by one and the column resets.
    pub fn consume_newline(&mut self) {
        self.position.row += 1;
        self.position.column = 0;
        self.offset += 1;
    }

    /// Consumes a tab, which takes up a single character but several columns.
    pub fn consume_tab(&mut self) {
        self.position.column += TAB_WIDTH;
        self.offset += 1;
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.current() {
            if !predicate(&ch) {
                break;
            }
            matches.push(ch);
            self.advance(1);
        }
        matches
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&self) -> bool {
        self.current().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let lexer = CharLexer::new("ab");

        assert_eq!(lexer.position(), Position::new(0, 0));
        assert_eq!(lexer.current(), Some('a'));
        assert_eq!(lexer.peek(1), Some('b'));
        assert_eq!(lexer.peek(2), None);
    }

    #[test]
    fn advance_moves_column_and_offset() {
        let mut lexer = CharLexer::new("abc");
        lexer.advance(2);

        assert_eq!(lexer.position(), Position::new(0, 2));
        assert_eq!(lexer.offset(), 2);
        assert_eq!(lexer.current(), Some('c'));
    }

    #[test]
    fn advance_past_the_end_stops_offset_but_not_column() {
        let mut lexer = CharLexer::new("a");
        lexer.advance(2);

        assert!(lexer.is_finished());
        assert_eq!(lexer.offset(), 1);
        assert_eq!(lexer.position(), Position::new(0, 2));
    }

    #[test]
    fn newline_resets_column() {
        let mut lexer = CharLexer::new("a\nb");
        lexer.advance(1);
        lexer.consume_newline();

        assert_eq!(lexer.position(), Position::new(1, 0));
        assert_eq!(lexer.current(), Some('b'));
    }

    #[test]
    fn tab_is_one_character_four_columns() {
        let mut lexer = CharLexer::new("\tb");
        lexer.consume_tab();

        assert_eq!(lexer.offset(), 1);
        assert_eq!(lexer.position(), Position::new(0, 4));
        assert_eq!(lexer.current(), Some('b'));
    }

    #[test]
    fn consume_while_stops_at_first_mismatch() {
        let mut lexer = CharLexer::new("abc1 d");
        let read = lexer.consume_while(char::is_ascii_alphabetic);

        assert_eq!(read, "abc");
        assert_eq!(lexer.current(), Some('1'));
        assert_eq!(lexer.position(), Position::new(0, 3));
    }

    #[test]
    fn handles_multibyte_characters_as_single_units() {
        let mut lexer = CharLexer::new("é~");
        lexer.advance(1);

        assert_eq!(lexer.current(), Some('~'));
        assert_eq!(lexer.position(), Position::new(0, 1));
    }
}
