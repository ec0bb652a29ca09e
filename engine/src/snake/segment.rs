/// One square body cell. `x`/`y` is the top-left corner in arena units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    x: i32,
    y: i32,
    size: i32,
}

impl Segment {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> i32 {
        self.size
    }

    pub fn height(&self) -> i32 {
        self.size
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Strict box intersection: segments that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_cell_overlaps() {
        let a = Segment::new(40, 40, 20);
        assert!(a.overlaps(&Segment::new(40, 40, 20)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Segment::new(40, 40, 20);
        assert!(!a.overlaps(&Segment::new(60, 40, 20)));
        assert!(!a.overlaps(&Segment::new(20, 40, 20)));
        assert!(!a.overlaps(&Segment::new(40, 60, 20)));
        assert!(!a.overlaps(&Segment::new(40, 20, 20)));
        assert!(!a.overlaps(&Segment::new(60, 60, 20)));
    }

    #[test]
    fn test_partial_overlap_counts() {
        let a = Segment::new(40, 40, 20);
        assert!(a.overlaps(&Segment::new(59, 40, 20)));
        assert!(a.overlaps(&Segment::new(30, 55, 20)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let mut segment = Segment::new(0, 0, 20);
        segment.translate(-25, 10);
        assert_eq!(segment.position(), (-25, 10));
        assert_eq!(segment.width(), 20);
        assert_eq!(segment.height(), 20);
    }
}
