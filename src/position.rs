use derive_more::Display;

/// Defines a position in a file
#[derive(Display, Clone, Copy, Debug, PartialEq)]
#[display(fmt = "{}:{}", line, column)]
pub struct Position {
    /// the line index starting at 1
    pub line: usize,

    /// the column index starting at 1
    pub column: usize,

    /// the character offset starting at 0
    pub offset: usize,
}

impl Position {
    /// Move the position past the given char
    pub fn advance(&mut self, c: char) {
        self.offset += 1;
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}
