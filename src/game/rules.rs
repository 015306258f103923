//! Collision rules
//!
//! These are the only checks that end a snake session by collision. Both take
//! the snake *after* the new head has been prepended, so `snake[0]` is the
//! head being tested and is skipped.

use super::state::Position;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit the wall ring
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Classify a collision for `head`, wall first
pub fn collision_kind(
    head: Position,
    snake: &[Position],
    height: usize,
    width: usize,
) -> Option<CollisionType> {
    let (last_row, last_col) = (height as i32 - 1, width as i32 - 1);

    if head.row <= 0 || head.row >= last_row || head.col <= 0 || head.col >= last_col {
        return Some(CollisionType::Wall);
    }

    if snake.iter().skip(1).any(|segment| *segment == head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True iff `head` is on the wall ring or on any segment after `snake[0]`
pub fn check_collision(head: Position, snake: &[Position], height: usize, width: usize) -> bool {
    collision_kind(head, snake, height, width).is_some()
}
