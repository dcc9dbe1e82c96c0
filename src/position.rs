//! Contains the [`Position`] type, which describes source code positions.
use std::fmt::{self, Display, Formatter};

/// A `(row, column)` pair, both zero-based.
///
/// Rows are counted in line feeds. Columns advance by one per character,
/// except for tabs, which advance the column by four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_tuple() {
        assert_eq!(Position::new(3, 14).to_string(), "(3, 14)");
    }

    #[test]
    fn orders_by_row_first() {
        assert!(Position::new(0, 40) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 5));
    }
}
