use log::debug;

// Heading of the snake on the grid. Rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const START_DIRECTION: Direction = Direction::Right;

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

// Requests are applied as they arrive; whichever one was accepted last is
// what the next tick reads.
#[derive(Debug)]
pub struct DirectionState {
    current: Direction,
}

impl Default for DirectionState {
    fn default() -> Self {
        Self {
            current: START_DIRECTION,
        }
    }
}

impl DirectionState {
    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.current.opposite() {
            debug!("Ignoring reversal from {:?} to {:?}", self.current, requested);
            return;
        }
        self.current = requested;
    }

    pub fn reset(&mut self) {
        self.current = START_DIRECTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_deltas() {
        assert_eq!(PosDelta::from(Direction::Up), PosDelta { x: 0, y: -1 });
        assert_eq!(PosDelta::from(Direction::Down), PosDelta { x: 0, y: 1 });
        assert_eq!(PosDelta::from(Direction::Left), PosDelta { x: -1, y: 0 });
        assert_eq!(PosDelta::from(Direction::Right), PosDelta { x: 1, y: 0 });
    }

    #[test]
    fn test_starts_heading_right() {
        assert_eq!(DirectionState::default().current(), Direction::Right);
    }

    #[test]
    fn test_reversal_is_ignored() {
        for dir in ALL {
            let mut state = DirectionState { current: dir };
            state.set_direction(dir.opposite());
            assert_eq!(state.current(), dir, "reversal from {:?} accepted", dir);
        }
    }

    #[test]
    fn test_perpendicular_and_same_turns_accepted() {
        let mut state = DirectionState::default();

        state.set_direction(Direction::Right);
        assert_eq!(state.current(), Direction::Right);

        state.set_direction(Direction::Up);
        assert_eq!(state.current(), Direction::Up);

        state.set_direction(Direction::Left);
        assert_eq!(state.current(), Direction::Left);
    }

    #[test]
    fn test_last_accepted_request_wins() {
        let mut state = DirectionState::default();

        // Two requests between ticks: only the latest one sticks
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Down); // reversal of Up, ignored
        state.set_direction(Direction::Left); // not a reversal of Up
        assert_eq!(state.current(), Direction::Left);
    }

    #[test]
    fn test_reset() {
        let mut state = DirectionState::default();
        state.set_direction(Direction::Down);
        state.reset();
        assert_eq!(state.current(), START_DIRECTION);
    }
}
