/// Where the current element sits within the valid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Nothing recorded.
    Empty,
    /// Exactly one element; it is both oldest and newest.
    Singleton,
    AtOldest,
    AtNewest,
    Middle,
}

impl Position {
    pub(crate) fn of(start: usize, end: usize, current: Option<usize>) -> Self {
        match current {
            None => Position::Empty,
            Some(_) if start == end => Position::Singleton,
            Some(c) if c == start => Position::AtOldest,
            Some(c) if c == end => Position::AtNewest,
            Some(_) => Position::Middle,
        }
    }

    pub fn can_undo(self) -> bool {
        matches!(self, Position::AtNewest | Position::Middle)
    }

    pub fn can_redo(self) -> bool {
        matches!(self, Position::AtOldest | Position::Middle)
    }
}
