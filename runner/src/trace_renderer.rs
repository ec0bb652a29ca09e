use snake_engine::snake::{Segment, SegmentRenderer};

/// Stands in for a drawing surface: tracks how many segments were drawn and
/// the bounding box they covered.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    drawn: u64,
    min: Option<(i32, i32)>,
    max: Option<(i32, i32)>,
}

impl TraceRenderer {
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    pub fn bounds(&self) -> Option<((i32, i32), (i32, i32))> {
        self.min.zip(self.max)
    }
}

impl SegmentRenderer for TraceRenderer {
    fn draw(&mut self, segment: &Segment) {
        self.drawn += 1;
        let (x, y) = segment.position();
        self.min = Some(match self.min {
            Some((min_x, min_y)) => (min_x.min(x), min_y.min(y)),
            None => (x, y),
        });
        self.max = Some(match self.max {
            Some((max_x, max_y)) => (max_x.max(x), max_y.max(y)),
            None => (x, y),
        });
    }
}
