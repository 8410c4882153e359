use std::iter::Peekable;

use crate::position::Position;

/// A Peekable char iterator that keeps track of the current position
pub struct IteratorWithPosition<I: Iterator<Item = char>> {
    /// The underlying iterator
    iter: Peekable<I>,

    /// Position of the next char
    position: Position,
}

impl<I: Iterator<Item = char>> IteratorWithPosition<I> {
    /// Returns a new IteratorWithPosition
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.peekable(),
            position: Position::default(),
        }
    }

    /// Returns the next char if the given closure returns true.
    pub fn next_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        if self.iter.peek().map_or(false, func) {
            self.next()
        } else {
            None
        }
    }

    /// Returns the position of the next char
    pub fn current_position(&self) -> Position {
        self.position
    }
}

impl<I: Iterator<Item = char>> Iterator for IteratorWithPosition<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.iter.next()?;
        self.position.advance(c);
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::IteratorWithPosition;
    use crate::position::Position;

    #[test]
    fn it_should_track_lines_and_columns() {
        let mut iter = IteratorWithPosition::new("ab\ncd".chars());
        iter.next();
        iter.next();
        assert_eq!(iter.current_position().column, 3);

        iter.next();
        assert_eq!(
            iter.current_position(),
            Position {
                line: 2,
                column: 1,
                offset: 3
            }
        );
    }

    #[test]
    fn it_should_not_advance_on_rejected_next_if() {
        let mut iter = IteratorWithPosition::new("a1".chars());
        assert_eq!(iter.next_if(|c| c.is_ascii_digit()), None);
        assert_eq!(iter.current_position().offset, 0);
        assert_eq!(iter.next_if(|c| c.is_ascii_alphabetic()), Some('a'));
        assert_eq!(iter.next(), Some('1'));
    }
}
