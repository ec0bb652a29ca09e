use snake_engine::snake::{Direction, Segment};

/// Greedy steering toward a target cell: close the larger gap first, never
/// pick the reverse of the current heading.
pub fn steer_towards(head: &Segment, target: (i32, i32), current: Direction) -> Direction {
    let dx = target.0 - head.x();
    let dy = target.1 - head.y();

    let horizontal = if dx > 0 {
        Some(Direction::Right)
    } else if dx < 0 {
        Some(Direction::Left)
    } else {
        None
    };
    let vertical = if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    };

    let preferred = if dx.abs() >= dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };

    preferred
        .into_iter()
        .flatten()
        .find(|direction| !direction.is_opposite(&current))
        .unwrap_or(current)
}
