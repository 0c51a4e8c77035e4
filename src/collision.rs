use crate::config::Size;
use crate::snake::Snake;

// What the head ran into. Only used for logging; the session treats both
// the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

pub fn detect(snake: &Snake, size: Size) -> Option<Collision> {
    let head = snake.head();

    if !size.contains(head) {
        return Some(Collision::Wall);
    }

    if snake.segments()[1..].contains(&head) {
        return Some(Collision::Body);
    }

    None
}

pub fn check(snake: &Snake, size: Size) -> bool {
    detect(snake, size).is_some()
}
