//! Grid snake on the terminal.
//!
//! The engine ([`session`] and the modules it drives) is free of I/O: it
//! receives ticks and direction requests and reports through a
//! [`session::Presenter`]. [`ui`] provides the ratatui presenter used by the
//! binary.

pub mod collision;
pub mod config;
pub mod direction;
pub mod food;
pub mod input;
pub mod session;
pub mod snake;
pub mod ticker;
pub mod ui;
