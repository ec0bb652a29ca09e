use crate::{debug_log, log};
use super::chain::SegmentChain;
use super::collision::{CollisionDetector, CollisionEvent};
use super::events::{CollisionEventChannel, ListenerId};
use super::segment::Segment;
use super::settings::SnakeSettings;
use super::target::Target;
use super::types::Direction;

/// Drawing surface supplied by the host.
pub trait SegmentRenderer {
    fn draw(&mut self, segment: &Segment);
}

/// Renderer for headless use; draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl SegmentRenderer for NullRenderer {
    fn draw(&mut self, _segment: &Segment) {}
}

/// Owns one creature: its body, heading and collision listeners.
///
/// The host drives it once per tick with [`update`](Self::update) followed by
/// [`detect_collision`](Self::detect_collision). A fatal event does not stop
/// the controller; the host is expected to stop ticking.
pub struct SnakeController<R: SegmentRenderer = NullRenderer> {
    settings: SnakeSettings,
    chain: SegmentChain,
    direction: Direction,
    pending_direction: Option<Direction>,
    events: CollisionEventChannel,
    renderer: R,
}

impl<R: SegmentRenderer> SnakeController<R> {
    pub fn new(settings: SnakeSettings, renderer: R) -> Self {
        let chain = SegmentChain::new(settings.segment_size, settings.arena());
        Self {
            settings,
            chain,
            direction: Direction::Right,
            pending_direction: None,
            events: CollisionEventChannel::new(),
            renderer,
        }
    }

    pub fn init(&mut self) {
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.chain.clear();
        for _ in 0..self.settings.initial_length {
            self.chain.grow(true, self.direction);
        }
        self.update();
    }

    /// Buffers a heading change for the next tick; the latest accepted request
    /// wins. A request is ignored when it reverses either the heading of the
    /// last tick (the neck) or the heading already reported by `direction()`.
    pub fn change_direction(&mut self, requested: Direction) {
        let reported = self.direction();
        let reverses_neck = Direction::request_change(self.direction, requested) != requested;
        let reverses_pending = Direction::request_change(reported, requested) != requested;
        if reverses_neck || reverses_pending {
            debug_log!(
                "Ignored direction change {:?} -> {:?}",
                reported,
                requested
            );
            return;
        }

        debug_log!(
            "Current direction {:?}, new snake direction {:?}",
            reported,
            requested
        );
        self.pending_direction = Some(requested);
    }

    pub fn update(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        self.chain.propagate(self.direction);
        for segment in self.chain.segments() {
            self.renderer.draw(segment);
        }
    }

    /// Runs collision detection on the current head, publishes every event to
    /// the listeners and returns the same events.
    pub fn detect_collision(&mut self, target: Option<&dyn Target>) -> Vec<CollisionEvent> {
        let events = CollisionDetector::detect(&self.chain, self.settings.arena(), target);
        for event in &events {
            if event.fatal {
                let (x, y) = self.chain.head().position();
                log!("Fatal {:?} collision at ({}, {})", event.kind, x, y);
            }
            self.events.publish(event);
        }
        events
    }

    pub fn on_collision<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CollisionEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Turns the creature around: the tail becomes the head and the heading
    /// of the last tick flips. Any buffered direction request is dropped.
    pub fn reverse(&mut self) {
        let current = self.direction;
        self.pending_direction = None;
        self.direction = self.chain.reverse(current, self.settings.shrink_amount);
        debug_log!("Reversed from {:?} to {:?}", current, self.direction);
    }

    pub fn grow(&mut self) {
        self.chain.grow(false, self.direction);
    }

    pub fn pieces(&self) -> &[Segment] {
        self.chain.segments()
    }

    pub fn head(&self) -> &Segment {
        self.chain.head()
    }

    /// Heading the next tick will use.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Total length of the body in arena units.
    pub fn width(&self) -> i32 {
        self.chain.len() as i32 * self.settings.segment_size
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn chain_mut(&mut self) -> &mut SegmentChain {
        &mut self.chain
    }
}
