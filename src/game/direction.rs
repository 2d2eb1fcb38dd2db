/// A heading on the grid. One cell per tick, no diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit vector this direction adds to a coordinate per tick.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when `other` points straight back at `self`.
    pub fn opposes(self, other: Direction) -> bool {
        let (dx, dy) = self.vector();
        let (ox, oy) = other.vector();
        dx == -ox && dy == -oy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_are_unit_steps() {
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Down.vector(), (0, 1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
        assert_eq!(Direction::Right.vector(), (1, 0));
    }

    #[test]
    fn only_reversals_oppose() {
        assert!(Direction::Up.opposes(Direction::Down));
        assert!(Direction::Left.opposes(Direction::Right));
        assert!(Direction::Right.opposes(Direction::Left));
        assert!(!Direction::Up.opposes(Direction::Left));
        assert!(!Direction::Down.opposes(Direction::Down));
    }
}
