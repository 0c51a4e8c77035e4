use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use log::info;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Terminal;

use crate::config::Size;
use crate::input;
use crate::session::{GameOverReply, Presenter};
use crate::snake::Pos;

// Nominal pixel size of one terminal character, used to turn the board
// area into a pixel surface.
pub const CHAR_WIDTH_PX: u16 = 10;
pub const CHAR_HEIGHT_PX: u16 = 20;

const HEADER_HEIGHT: u16 = 3;

fn cell_chars(cell_size: u16) -> (u16, u16) {
    (
        (cell_size / CHAR_WIDTH_PX).max(1),
        (cell_size / CHAR_HEIGHT_PX).max(1),
    )
}

fn split(area: Rect) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Score
            Constraint::Min(0),                // Board
        ])
        .split(area);
    (layout[0], layout[1])
}

fn board_block() -> Block<'static> {
    Block::default().title("gridsnake").borders(Borders::ALL)
}

pub struct Board<'a> {
    pub segments: &'a [Pos],
    pub food: Pos,
    pub cell_size: u16,
}

impl Board<'_> {
    fn fill(&self, pos: Pos, color: Color, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = cell_chars(self.cell_size);
        if pos.x < 0 || pos.y < 0 {
            return;
        }

        let left = pos.x as u32 * u32::from(cols);
        let top = pos.y as u32 * u32::from(rows);
        for dy in 0..u32::from(rows) {
            for dx in 0..u32::from(cols) {
                let (x, y) = (left + dx, top + dy);
                if x >= u32::from(area.width) || y >= u32::from(area.height) {
                    continue;
                }
                buf[(area.x + x as u16, area.y + y as u16)]
                    .set_symbol(" ")
                    .set_bg(color);
            }
        }
    }
}

impl Widget for &Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for pos in self.segments.iter().skip(1) {
            self.fill(*pos, Color::Green, area, buf);
        }

        if let Some(head) = self.segments.first() {
            self.fill(*head, Color::Yellow, area, buf);
        }

        self.fill(self.food, Color::LightRed, area, buf);
    }
}

pub struct TerminalPresenter<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    cell_size: u16,
    segments: Vec<Pos>,
    food: Pos,
    score: u32,
}

impl<'t, B: Backend> TerminalPresenter<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>, cell_size: u16) -> Self {
        TerminalPresenter {
            terminal,
            cell_size,
            segments: Vec::new(),
            food: Pos::default(),
            score: 0,
        }
    }

    pub fn grid_size(&self) -> io::Result<Size> {
        let size = self.terminal.size()?;
        let (_, board) = split(Rect::new(0, 0, size.width, size.height));
        let inner = board_block().inner(board);

        let width_px = u32::from(inner.width) * u32::from(CHAR_WIDTH_PX);
        let height_px = u32::from(inner.height) * u32::from(CHAR_HEIGHT_PX);
        Ok(Size::from_surface(width_px, height_px, self.cell_size))
    }

    fn draw(&mut self, overlay: Option<String>) -> io::Result<()> {
        let board = Board {
            segments: &self.segments,
            food: self.food,
            cell_size: self.cell_size,
        };
        let score = self.score;

        self.terminal.draw(|frame| {
            let (header, area) = split(frame.area());

            frame.render_widget(
                Paragraph::new(format!("Score: {}", score))
                    .alignment(Alignment::Left)
                    .block(Block::default().borders(Borders::ALL)),
                header,
            );

            let block = board_block();
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(&board, inner);

            if let Some(text) = overlay {
                let height = inner.height.min(5);
                let popup = Rect::new(
                    inner.x,
                    inner.y + (inner.height - height) / 2,
                    inner.width,
                    height,
                );
                frame.render_widget(Clear, popup);
                frame.render_widget(
                    Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .block(Block::default().borders(Borders::ALL)),
                    popup,
                );
            }
        })?;
        Ok(())
    }
}

impl<B: Backend> Presenter for TerminalPresenter<'_, B> {
    type Error = io::Error;

    fn render_state(&mut self, segments: &[Pos], food: Pos, score: u32) -> io::Result<()> {
        self.segments.clear();
        self.segments.extend_from_slice(segments);
        self.food = food;
        self.score = score;
        self.draw(None)
    }

    fn notify_game_over(&mut self, score: u32) -> io::Result<GameOverReply> {
        self.score = score;
        self.draw(Some(format!(
            "Game Over! Your score: {}\nPress SPACE to play again, Q to quit",
            score
        )))?;

        // Drop keys pressed before the crash
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }

        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(reply) = input::prompt_response(key) {
                    info!("Game over prompt answered: {:?}", reply);
                    return Ok(reply);
                }
            }
        }
    }
}
