#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Transition rule for a heading change: turning back onto the neck is
    /// refused, anything else (including the current heading) is accepted.
    pub fn request_change(current: Direction, requested: Direction) -> Direction {
        if requested.is_opposite(&current) {
            current
        } else {
            requested
        }
    }

    /// Offset of one step of `distance` units along this direction.
    pub fn offset(&self, distance: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -distance),
            Direction::Down => (0, distance),
            Direction::Left => (-distance, 0),
            Direction::Right => (distance, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaSize {
    pub width: i32,
    pub height: i32,
}

impl ArenaSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
