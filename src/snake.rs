use crate::direction::{Direction, PosDelta};

// Grid cell as (column, row). Signed so that a step off the playfield is
// representable and can be reported as a wall collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn offset(&self, delta: PosDelta) -> Pos {
        Pos {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

#[derive(Debug)]
pub struct Snake {
    segments: Vec<Pos>,
}

impl Snake {
    pub fn new(start: Pos, length: u16) -> Self {
        let mut snake = Snake {
            segments: Vec::new(),
        };
        snake.initialize(start, length);
        snake
    }

    pub fn initialize(&mut self, start: Pos, length: u16) {
        let tail_step: PosDelta = Direction::Left.into();

        self.segments.clear();
        let mut pos = start;
        for _ in 0..length.max(1) {
            self.segments.push(pos);
            pos = pos.offset(tail_step);
        }
    }

    pub fn advance(&mut self, direction: Direction) {
        // Tail first, so every segment copies its predecessor's old position
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].offset(direction.into());
    }

    // Adds a segment on top of the current tail. It separates from the
    // tail on the next advance.
    pub fn grow(&mut self) {
        let tail = self.segments[self.segments.len() - 1];
        self.segments.push(tail);
    }

    pub fn head(&self) -> Pos {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Pos] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    // Always false after initialize: the head is never removed
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Pos>) -> Self {
        assert!(!segments.is_empty());
        Snake { segments }
    }
}
