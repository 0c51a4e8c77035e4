use rand::Rng;

use crate::config::Size;
use crate::snake::Pos;

// Placement ignores the snake, so food may land on a body segment
pub trait FoodSpawner {
    fn spawn(&mut self, size: Size) -> Pos;
}

#[derive(Debug)]
pub struct RandomSpawner<R> {
    rng: R,
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodSpawner for RandomSpawner<R> {
    fn spawn(&mut self, size: Size) -> Pos {
        Pos {
            x: self.rng.gen_range(0..size.width.max(1)) as i32,
            y: self.rng.gen_range(0..size.height.max(1)) as i32,
        }
    }
}
