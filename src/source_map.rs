//! Functionality for looking up lines in the source code.

/// Width of a tab in columns. Must agree with the lexer's column bookkeeping.
pub const TAB_WIDTH: usize = 4;

/// Finds the line with the given zero-based `row`.
/// Rows are separated by line feeds only, matching the way the lexer counts them.
pub fn find_line(source: &str, row: usize) -> Option<LineContext> {
    source.split('\n').nth(row).map(|line| LineContext {
        source: line,
        line_no: row + 1,
    })
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with its line number.
pub struct LineContext<'a> {
    source: &'a str,
    line_no: usize,
}
impl LineContext<'_> {
    /// The line with tabs expanded, so that lexer columns can be used as
    /// offsets into it.
    pub fn for_display(&self) -> String {
        self.source.replace('\t', &" ".repeat(TAB_WIDTH))
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
