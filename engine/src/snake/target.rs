use crate::SessionRng;
use super::segment::Segment;
use super::settings::SnakeSettings;

const MAX_SPAWN_ATTEMPTS: usize = 100;

/// Anything the head can run into that is not fatal.
pub trait Target {
    fn overlaps(&self, segment: &Segment) -> bool;
}

/// A one-cell target placed on the segment grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    cell: Segment,
}

impl Food {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self {
            cell: Segment::new(x, y, size),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.cell.position()
    }

    /// Picks a random grid cell not covered by `occupied`. Gives up after a
    /// fixed number of attempts and returns `None`; also `None` when the arena
    /// holds no whole cell.
    pub fn spawn(rng: &mut SessionRng, settings: &SnakeSettings, occupied: &[Segment]) -> Option<Self> {
        let size = settings.segment_size;
        if size < 1 {
            return None;
        }
        let columns = settings.arena_width / size;
        let rows = settings.arena_height / size;
        if columns < 1 || rows < 1 {
            return None;
        }

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let column = rng.random_range(0..columns);
            let row = rng.random_range(0..rows);
            let food = Food::new(column * size, row * size, size);

            if !occupied.iter().any(|segment| food.overlaps(segment)) {
                return Some(food);
            }
        }

        None
    }
}

impl Target for Food {
    fn overlaps(&self, segment: &Segment) -> bool {
        self.cell.overlaps(segment)
    }
}
