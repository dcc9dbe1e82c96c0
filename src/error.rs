use crate::position::Position;

/// An error that can be traced back to a single position in the source.
pub trait PositionalError {
    fn position(&self) -> Position;
    fn describe(&self) -> String;
}
