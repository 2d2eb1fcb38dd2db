use super::direction::Direction;

/// A cell on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The playable area, `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// The snake: an ordered run of cells, head first, plus its heading.
///
/// Outside of `advanced` no two segments share a cell; a head that lands on
/// the body is a collision, not a state the snake ever holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Coordinate>,
    pub heading: Direction,
}

impl Snake {
    /// Lay out a snake of `length` cells with the body trailing the head
    /// opposite to `heading`.
    pub fn new(head: Coordinate, heading: Direction, length: usize) -> Self {
        let (dx, dy) = heading.vector();
        let segments = (0..length.max(1) as i32)
            .map(|i| Coordinate::new(head.x - dx * i, head.y - dy * i))
            .collect();
        Self { segments, heading }
    }

    /// Build a snake from explicit segments, head first. The caller vouches
    /// for the shape; mainly useful for setting up specific board positions.
    pub fn from_segments(segments: Vec<Coordinate>, heading: Direction) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments, heading }
    }

    pub fn head(&self) -> Coordinate {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, head first.
    pub fn segments(&self) -> &[Coordinate] {
        &self.segments
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.segments.contains(&cell)
    }

    /// The snake one tick later: `new_head` prepended and, unless growing,
    /// the tail dropped. Head insertion and tail removal are one atomic
    /// transformation; callers never observe a half-moved snake.
    pub fn advanced(&self, new_head: Coordinate, grow: bool) -> Snake {
        let keep = if grow {
            self.segments.len()
        } else {
            self.segments.len() - 1
        };
        let segments = std::iter::once(new_head)
            .chain(self.segments.iter().copied().take(keep))
            .collect();
        Snake {
            segments,
            heading: self.heading,
        }
    }

    /// True iff the head shares a cell with any other segment.
    pub fn bites_itself(&self) -> bool {
        self.segments[1..].contains(&self.segments[0])
    }
}

/// Which run the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// The single game-state snapshot the controller owns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Coordinate,
    pub bounds: GridBounds,
    pub score: u32,
    pub ticks: u32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(snake: Snake, food: Coordinate, bounds: GridBounds) -> Self {
        Self {
            snake,
            food,
            bounds,
            score: 0,
            ticks: 0,
            phase: GamePhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
