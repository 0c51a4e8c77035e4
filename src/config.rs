use std::time::Duration;

use crate::snake::Pos;

pub const CELL_SIZE: u16 = 20;
pub const START_LENGTH: u16 = 5;
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);
// Head of a fresh snake: 100px from the top-left corner at the default cell size.
pub const START_CELL: Pos = Pos { x: 5, y: 5 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn from_surface(width_px: u32, height_px: u32, cell_size: u16) -> Size {
        let cell = u32::from(cell_size.max(1));
        Size {
            width: (width_px / cell).min(u32::from(u16::MAX)) as u16,
            height: (height_px / cell).min(u32::from(u16::MAX)) as u16,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < i32::from(self.width) && pos.y < i32::from(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub cell_size: u16,
    pub start_length: u16,
    pub tick_interval: Duration,
    pub start_cell: Pos,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            start_length: START_LENGTH,
            tick_interval: TICK_INTERVAL,
            start_cell: START_CELL,
        }
    }
}

impl Config {
    pub fn fits(&self, size: Size) -> bool {
        let tail_x = self.start_cell.x - i32::from(self.start_length.max(1)) + 1;
        let first_step = Pos {
            x: self.start_cell.x + 1,
            y: self.start_cell.y,
        };
        tail_x >= 0 && size.contains(self.start_cell) && size.contains(first_step)
    }
}
