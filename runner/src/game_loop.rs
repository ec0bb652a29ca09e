use std::fmt;

use tokio::time::interval;
use snake_engine::snake::{CollisionKind, Food, SnakeController, SnakeSettings};
use snake_engine::{debug_log, log, SessionRng};

use crate::steering::steer_towards;
use crate::trace_renderer::TraceRenderer;

pub struct LoopOptions {
    pub max_ticks: u64,
    pub reverse_every: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Collision(CollisionKind),
    NoRoomForFood,
    TickLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Collision(CollisionKind::Border) => write!(f, "hit the border"),
            EndReason::Collision(CollisionKind::SelfHit) => write!(f, "ran into itself"),
            EndReason::Collision(CollisionKind::Target) => write!(f, "target collision"),
            EndReason::NoRoomForFood => write!(f, "no free cell left for food"),
            EndReason::TickLimit => write!(f, "tick limit reached"),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub ticks: u64,
    pub targets_eaten: u32,
    pub final_length: usize,
    pub end_reason: EndReason,
}

/// Host loop: one `update` plus one collision check per timer tick.
pub struct GameLoop {
    controller: SnakeController<TraceRenderer>,
    rng: SessionRng,
    options: LoopOptions,
}

impl GameLoop {
    pub fn new(settings: SnakeSettings, rng: SessionRng, options: LoopOptions) -> Self {
        Self {
            controller: SnakeController::new(settings, TraceRenderer::default()),
            rng,
            options,
        }
    }

    pub async fn run(mut self) -> RunSummary {
        let mut tick_timer = interval(self.controller.settings().tick_interval());

        self.controller.init();
        let mut targets_eaten = 0u32;
        let mut ticks = 0u64;

        let mut food = match self.spawn_food() {
            Some(food) => food,
            None => return self.summary(ticks, targets_eaten, EndReason::NoRoomForFood),
        };

        let end_reason = loop {
            if ticks >= self.options.max_ticks {
                break EndReason::TickLimit;
            }
            tick_timer.tick().await;
            ticks += 1;

            let next = steer_towards(
                self.controller.head(),
                food.position(),
                self.controller.direction(),
            );
            self.controller.change_direction(next);
            self.controller.update();

            let events = self.controller.detect_collision(Some(&food));
            if let Some(fatal) = events.iter().find(|event| event.fatal) {
                break EndReason::Collision(fatal.kind);
            }

            if events.iter().any(|event| event.kind == CollisionKind::Target) {
                targets_eaten += 1;
                self.controller.grow();
                log!(
                    "Ate food at ({}, {}). Length: {}",
                    food.position().0,
                    food.position().1,
                    self.controller.len()
                );

                if let Some(every) = self.options.reverse_every
                    && targets_eaten % every == 0
                {
                    self.controller.reverse();
                }

                food = match self.spawn_food() {
                    Some(food) => food,
                    None => break EndReason::NoRoomForFood,
                };
            }
        };

        self.summary(ticks, targets_eaten, end_reason)
    }

    fn spawn_food(&mut self) -> Option<Food> {
        let food = Food::spawn(
            &mut self.rng,
            self.controller.settings(),
            self.controller.pieces(),
        )?;
        debug_log!("Food spawned at ({}, {})", food.position().0, food.position().1);
        Some(food)
    }

    fn summary(&self, ticks: u64, targets_eaten: u32, end_reason: EndReason) -> RunSummary {
        let renderer = self.controller.renderer();
        if let Some(((min_x, min_y), (max_x, max_y))) = renderer.bounds() {
            debug_log!(
                "Drew {} segments within ({}, {})..({}, {})",
                renderer.drawn(),
                min_x,
                min_y,
                max_x,
                max_y
            );
        }

        RunSummary {
            ticks,
            targets_eaten,
            final_length: self.controller.len(),
            end_reason,
        }
    }
}
