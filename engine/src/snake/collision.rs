use super::chain::SegmentChain;
use super::target::Target;
use super::types::ArenaSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    Target,
    Border,
    SelfHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    pub fatal: bool,
}

impl CollisionEvent {
    pub fn new(kind: CollisionKind) -> Self {
        let fatal = matches!(kind, CollisionKind::Border | CollisionKind::SelfHit);
        Self { kind, fatal }
    }
}

// The segment right behind the head always touches it, so the body scan
// starts past it.
const FIRST_SELF_CHECK_INDEX: usize = 2;

pub struct CollisionDetector;

impl CollisionDetector {
    /// Checks the head against the target, the arena border and the body, in
    /// that order. The checks are independent and each may add one event.
    pub fn detect(
        chain: &SegmentChain,
        arena: ArenaSize,
        target: Option<&dyn Target>,
    ) -> Vec<CollisionEvent> {
        let mut events = Vec::new();

        if let Some(target) = target
            && target.overlaps(chain.head())
        {
            events.push(CollisionEvent::new(CollisionKind::Target));
        }

        if Self::hits_border(chain, arena) {
            events.push(CollisionEvent::new(CollisionKind::Border));
        }

        if Self::hits_self(chain) {
            events.push(CollisionEvent::new(CollisionKind::SelfHit));
        }

        events
    }

    pub fn hits_border(chain: &SegmentChain, arena: ArenaSize) -> bool {
        let head = chain.head();
        head.x() < 0
            || head.y() < 0
            || head.x() + head.width() > arena.width
            || head.y() + head.height() > arena.height
    }

    pub fn hits_self(chain: &SegmentChain) -> bool {
        let head = chain.head();
        chain
            .segments()
            .iter()
            .skip(FIRST_SELF_CHECK_INDEX)
            .any(|segment| segment.overlaps(head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::segment::Segment;
    use crate::snake::target::Food;
    use crate::snake::types::Direction;

    struct AlwaysHit;

    impl Target for AlwaysHit {
        fn overlaps(&self, _segment: &Segment) -> bool {
            true
        }
    }

    fn arena() -> ArenaSize {
        ArenaSize::new(400, 400)
    }

    fn create_chain(length: usize) -> SegmentChain {
        let mut chain = SegmentChain::new(20, arena());
        for _ in 0..length {
            chain.grow(true, Direction::Right);
        }
        chain
    }

    fn kinds(events: &[CollisionEvent]) -> Vec<CollisionKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_fatal_flag_by_kind() {
        assert!(!CollisionEvent::new(CollisionKind::Target).fatal);
        assert!(CollisionEvent::new(CollisionKind::Border).fatal);
        assert!(CollisionEvent::new(CollisionKind::SelfHit).fatal);
    }

    #[test]
    fn test_no_events_in_open_space() {
        let chain = create_chain(5);
        assert!(CollisionDetector::detect(&chain, arena(), None).is_empty());
    }

    #[test]
    fn test_border_boundary_is_exclusive() {
        let mut chain = create_chain(1);
        chain.segments_mut()[0].set_position(380, 100);
        assert!(!CollisionDetector::hits_border(&chain, arena()));

        chain.segments_mut()[0].set_position(381, 100);
        assert!(CollisionDetector::hits_border(&chain, arena()));
    }

    #[test]
    fn test_border_on_every_edge() {
        let mut chain = create_chain(1);
        for (x, y) in [(-1, 100), (100, -1), (381, 100), (100, 381)] {
            chain.segments_mut()[0].set_position(x, y);
            assert!(CollisionDetector::hits_border(&chain, arena()), "({}, {})", x, y);
        }
        chain.segments_mut()[0].set_position(0, 0);
        assert!(!CollisionDetector::hits_border(&chain, arena()));
    }

    #[test]
    fn test_head_outside_left_edge_reports_single_border_hit() {
        let mut chain = create_chain(5);
        chain.segments_mut()[0].set_position(-1, 100);
        let food = Food::new(200, 200, 20);

        let events = CollisionDetector::detect(&chain, arena(), Some(&food));

        assert_eq!(events, vec![CollisionEvent::new(CollisionKind::Border)]);
        assert!(events[0].fatal);
    }

    #[test]
    fn test_target_hit_is_not_fatal() {
        let chain = create_chain(3);
        let events = CollisionDetector::detect(&chain, arena(), Some(&AlwaysHit));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CollisionKind::Target);
        assert!(!events[0].fatal);
    }

    #[test]
    fn test_neck_is_skipped() {
        let mut chain = create_chain(2);
        let head = chain.segments()[0].position();
        chain.segments_mut()[1].set_position(head.0, head.1);
        assert!(!CollisionDetector::hits_self(&chain));
    }

    #[test]
    fn test_short_chain_never_hits_itself() {
        for length in 1..=2 {
            let mut chain = create_chain(length);
            for segment in chain.segments_mut() {
                segment.set_position(100, 100);
            }
            assert!(!CollisionDetector::hits_self(&chain));
        }
    }

    #[test]
    fn test_body_overlap_is_self_hit() {
        let mut chain = create_chain(5);
        let (x, y) = chain.segments()[4].position();
        chain.segments_mut()[0].set_position(x, y);

        let events = CollisionDetector::detect(&chain, arena(), None);

        assert_eq!(kinds(&events), vec![CollisionKind::SelfHit]);
    }

    #[test]
    fn test_multiple_body_overlaps_report_once() {
        let mut chain = create_chain(6);
        for segment in chain.segments_mut() {
            segment.set_position(100, 100);
        }
        let events = CollisionDetector::detect(&chain, arena(), None);
        assert_eq!(kinds(&events), vec![CollisionKind::SelfHit]);
    }

    #[test]
    fn test_all_channels_fire_together() {
        let mut chain = create_chain(4);
        for segment in chain.segments_mut() {
            segment.set_position(-10, 50);
        }

        let events = CollisionDetector::detect(&chain, arena(), Some(&AlwaysHit));

        assert_eq!(
            kinds(&events),
            vec![CollisionKind::Target, CollisionKind::Border, CollisionKind::SelfHit]
        );
    }
}
