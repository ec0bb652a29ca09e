use super::segment::Segment;
use super::types::{ArenaSize, Direction};

/// The creature's body, head first. Adjacent entries are adjacent cells.
#[derive(Clone, Debug)]
pub struct SegmentChain {
    segments: Vec<Segment>,
    segment_size: i32,
    arena: ArenaSize,
}

impl SegmentChain {
    pub fn new(segment_size: i32, arena: ArenaSize) -> Self {
        Self {
            segments: Vec::new(),
            segment_size,
            arena,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_size(&self) -> i32 {
        self.segment_size
    }

    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    pub fn head(&self) -> &Segment {
        self.segments.first().expect("Segment chain should never be empty after init")
    }

    pub fn tail(&self) -> &Segment {
        self.segments.last().expect("Segment chain should never be empty after init")
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Appends a segment behind the tail.
    ///
    /// The first segment is centred in the arena. During `init` every next
    /// segment is laid one cell behind the tail, opposite to `direction`, so the
    /// chain starts stretched out. Later growth stacks the new segment on the
    /// tail; the next propagation pulls the rest of the body away from it.
    pub fn grow(&mut self, at_init: bool, direction: Direction) {
        let size = self.segment_size;
        let segment = match self.segments.last() {
            Some(tail) if at_init => {
                let (dx, dy) = direction.opposite().offset(size);
                Segment::new(tail.x() + dx, tail.y() + dy, size)
            }
            Some(tail) => Segment::new(tail.x(), tail.y(), size),
            None => Segment::new(
                self.arena.width / 2 - size / 2,
                self.arena.height / 2 - size / 2,
                size,
            ),
        };
        self.segments.push(segment);
    }

    /// Advances the chain by one cell: the head steps along `direction`, every
    /// other segment takes its predecessor's position from before this call.
    pub fn propagate(&mut self, direction: Direction) {
        assert!(
            !self.segments.is_empty(),
            "propagate called on an empty chain; call init first"
        );

        let (dx, dy) = direction.offset(self.segment_size);
        let mut previous_position: Option<(i32, i32)> = None;
        for segment in self.segments.iter_mut() {
            let old_position = segment.position();
            match previous_position {
                None => segment.translate(dx, dy),
                Some((x, y)) => segment.set_position(x, y),
            }
            previous_position = Some(old_position);
        }
    }

    /// Swaps head and tail, then applies the post-reversal shift. Returns the
    /// new direction of travel, which is the opposite of `direction`.
    pub fn reverse(&mut self, direction: Direction, shrink_amount: i32) -> Direction {
        self.segments.reverse();
        let new_direction = direction.opposite();
        self.shift_after_reversal(new_direction, shrink_amount);
        new_direction
    }

    // Only Left and Up are shifted. Right and Down keep their positions; see
    // DESIGN.md before changing this.
    fn shift_after_reversal(&mut self, new_direction: Direction, shrink_amount: i32) {
        match new_direction {
            Direction::Left | Direction::Up => {
                let (dx, dy) = new_direction.offset(self.segment_size + shrink_amount);
                for segment in self.segments.iter_mut() {
                    segment.translate(dx, dy);
                }
            }
            Direction::Right | Direction::Down => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }
}
