//! Useful character extensions.
pub trait CharExt {
    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continuation(&self) -> bool;

    fn is_number_part(&self) -> bool;

    fn is_quote(&self) -> bool;

    fn is_not_linebreak(&self) -> bool;
}
impl CharExt for char {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn is_identifier_continuation(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }

    fn is_number_part(&self) -> bool {
        self.is_ascii_digit() || *self == '.'
    }

    fn is_quote(&self) -> bool {
        *self == '"' || *self == '\''
    }

    fn is_not_linebreak(&self) -> bool {
        *self != '\n'
    }
}
