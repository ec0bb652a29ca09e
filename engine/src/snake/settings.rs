use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::ArenaSize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub arena_width: i32,
    pub arena_height: i32,
    pub segment_size: i32,
    /// Capped at one arena row of segments. The chain is laid out leftwards
    /// from the centre, so anything longer than half a row starts with its
    /// tail beyond the left border; only the head is checked for collisions.
    pub initial_length: usize,
    /// Extra distance added to the post-reversal shift.
    pub shrink_amount: i32,
    pub tick_interval_ms: u64,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            arena_width: 400,
            arena_height: 400,
            segment_size: 20,
            initial_length: 12,
            shrink_amount: 0,
            tick_interval_ms: 100,
        }
    }
}

impl SnakeSettings {
    pub fn arena(&self) -> ArenaSize {
        ArenaSize::new(self.arena_width, self.arena_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.segment_size < 1 {
            return Err("Segment size must be at least 1".to_string());
        }
        if self.arena_width < self.segment_size * 2 || self.arena_height < self.segment_size * 2 {
            return Err(format!(
                "Arena must be at least {}x{} for segment size {}",
                self.segment_size * 2,
                self.segment_size * 2,
                self.segment_size
            ));
        }
        let max_length = (self.arena_width / self.segment_size) as usize;
        if self.initial_length < 1 || self.initial_length > max_length {
            return Err(format!("Initial length must be between 1 and {}", max_length));
        }
        if self.shrink_amount < 0 {
            return Err("Shrink amount cannot be negative".to_string());
        }
        if self.tick_interval_ms < 10 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 10ms and 5000ms".to_string());
        }
        Ok(())
    }
}
