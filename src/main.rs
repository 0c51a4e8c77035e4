use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};

use gridsnake::config::Config;
use gridsnake::food::RandomSpawner;
use gridsnake::input::{self, Command};
use gridsnake::session::{Session, SessionState};
use gridsnake::ticker::IntervalTicker;
use gridsnake::ui::TerminalPresenter;

const LOG_FILE: &str = "gridsnake.log";

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(LOG_FILE)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting gridsnake");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);
    if let Err(e) = &result {
        error!("Stopped on error: {}", e);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let config = Config::default();
    let mut presenter = TerminalPresenter::new(terminal, config.cell_size);

    let size = presenter.grid_size()?;
    if !config.fits(size) {
        return Err(io::Error::other(format!(
            "terminal too small: playfield is {}x{} cells",
            size.width, size.height
        )));
    }

    let mut session = Session::new(
        config,
        size,
        RandomSpawner::new(rand::thread_rng()),
        IntervalTicker::new(config.tick_interval),
    );
    info!(
        "Playfield {}x{} cells, tick every {:?}",
        session.size().width,
        session.size().height,
        config.tick_interval
    );
    session.start(&mut presenter)?;

    loop {
        // Key presses land straight in the direction state; the last one
        // before a tick wins
        if event::poll(session.ticker_mut().timeout())? {
            if let Event::Key(key) = event::read()? {
                match input::translate(key) {
                    Command::Turn(direction) => session.on_direction_request(direction),
                    Command::Quit => break,
                    Command::Ignore => {}
                }
            }
        }

        if session.ticker_mut().due() {
            session.on_tick(&mut presenter)?;
        }

        // Only left ended when the player quit at the game-over prompt
        if session.state() == SessionState::Ended {
            break;
        }
    }

    info!("Exiting with score {}", session.score());
    Ok(())
}
