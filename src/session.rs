use log::{debug, info};

use crate::collision;
use crate::config::{Config, Size};
use crate::direction::{Direction, DirectionState};
use crate::food::FoodSpawner;
use crate::snake::{Pos, Snake};
use crate::ticker::TickSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReply {
    Restart,
    Quit,
}

// Presenters only ever see read-only views of the engine state
pub trait Presenter {
    type Error;

    fn render_state(
        &mut self,
        segments: &[Pos],
        food: Pos,
        score: u32,
    ) -> Result<(), Self::Error>;

    /// Blocks until the player has acknowledged the game over.
    fn notify_game_over(&mut self, score: u32) -> Result<GameOverReply, Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,          // Session not running, nothing happened
    Moved,         // Plain step
    Ate,           // Stepped onto the food
    GameOver(u32), // Crashed with this score; restarted unless the player quit
}

#[derive(Debug)]
pub struct Session<S, T> {
    config: Config,
    size: Size,
    snake: Snake,
    food: Pos,
    direction: DirectionState,
    score: u32,
    state: SessionState,
    spawner: S,
    ticker: T,
}

impl<S: FoodSpawner, T: TickSource> Session<S, T> {
    pub fn new(config: Config, size: Size, spawner: S, ticker: T) -> Self {
        let mut session = Session {
            config,
            size,
            snake: Snake::new(config.start_cell, config.start_length),
            food: Pos::default(),
            direction: DirectionState::default(),
            score: 0,
            state: SessionState::Running,
            spawner,
            ticker,
        };
        session.reset();
        session
    }

    fn reset(&mut self) {
        self.snake
            .initialize(self.config.start_cell, self.config.start_length);
        self.direction.reset();
        self.score = 0;
        self.food = self.spawner.spawn(self.size);
        self.state = SessionState::Running;

        info!(
            "New session on {}x{} grid, food at {:?}",
            self.size.width, self.size.height, self.food
        );
    }

    pub fn start<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), P::Error> {
        self.render(presenter)?;
        self.ticker.start();
        Ok(())
    }

    pub fn restart<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), P::Error> {
        self.reset();
        self.start(presenter)
    }

    pub fn on_direction_request(&mut self, direction: Direction) {
        self.direction.set_direction(direction);
    }

    pub fn on_tick<P: Presenter>(&mut self, presenter: &mut P) -> Result<TickOutcome, P::Error> {
        if self.state != SessionState::Running {
            return Ok(TickOutcome::Idle);
        }

        self.snake.advance(self.direction.current());

        if let Some(cause) = collision::detect(&self.snake, self.size) {
            let final_score = self.score;
            info!(
                "Game over: {:?} collision at {:?}, score {}",
                cause,
                self.snake.head(),
                final_score
            );
            if self.end(presenter)? == GameOverReply::Restart {
                self.restart(presenter)?;
            }
            return Ok(TickOutcome::GameOver(final_score));
        }

        let outcome = if self.snake.head() == self.food {
            self.snake.grow();
            self.food = self.spawner.spawn(self.size);
            self.score += 1;
            debug!(
                "Ate at {:?}, score {}, length {}, next food at {:?}",
                self.snake.head(),
                self.score,
                self.snake.len(),
                self.food
            );
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        };

        self.render(presenter)?;
        Ok(outcome)
    }

    fn end<P: Presenter>(&mut self, presenter: &mut P) -> Result<GameOverReply, P::Error> {
        self.state = SessionState::Ended;
        self.ticker.stop();
        presenter.notify_game_over(self.score)
    }

    fn render<P: Presenter>(&self, presenter: &mut P) -> Result<(), P::Error> {
        presenter.render_state(self.snake.segments(), self.food, self.score)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Pos {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction.current()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}
