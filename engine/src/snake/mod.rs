mod chain;
mod collision;
mod controller;
mod events;
mod segment;
mod settings;
mod target;
mod types;

pub use chain::SegmentChain;
pub use collision::{CollisionDetector, CollisionEvent, CollisionKind};
pub use controller::{NullRenderer, SegmentRenderer, SnakeController};
pub use events::{CollisionEventChannel, ListenerId};
pub use segment::Segment;
pub use settings::SnakeSettings;
pub use target::{Food, Target};
pub use types::{ArenaSize, Direction};
