use crate::{
    app::{App, Mode},
    event::EventHandler,
    ui,
};
use color_eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, terminal::Terminal};
use std::{
    io::{stdout, Stdout},
    time::Duration,
};

/// Time between two ticks when the automaton is evolving.
const TICK: Duration = Duration::from_millis(50);

/// The text-based user interface.
#[derive(Debug)]
pub struct Tui {
    /// The terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// The application state.
    app: App,
    /// The event handler.
    event_handler: EventHandler,
}

impl Tui {
    /// Create a new [`Tui`] from the application state.
    pub fn new(app: App) -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        let event_handler = EventHandler::new();

        let mut tui = Self {
            terminal,
            app,
            event_handler,
        };

        tui.init()?;

        Ok(tui)
    }

    /// Initialize the terminal.
    fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        crossterm::execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        )?;
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        self.draw()?;
        Ok(())
    }

    /// Cleanup the terminal.
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        crossterm::execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the text-based user interface.
    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|f| self.app.render(f))?;
        Ok(())
    }

    /// Number of generations visible in the main area.
    fn history_height(&self) -> Result<usize> {
        let size = self.terminal.size()?;
        Ok(ui::history_height(size) as usize)
    }

    /// Exit the text-based user interface.
    fn exit(&mut self) -> Result<()> {
        self.cleanup()?;
        self.app.print_summary();
        Ok(())
    }

    /// The main loop.
    pub fn run(&mut self) -> Result<()> {
        while !self.app.should_quit {
            let height = self.history_height()?;

            // If the automaton is evolving, do not block on the event handler.
            if self.app.mode == Mode::Running {
                if let Some(event) = self.event_handler.recv_timeout(TICK)? {
                    self.app.update(event, height)?;
                }
                if self.app.mode == Mode::Running {
                    self.app.step();
                }
            } else {
                let event = self.event_handler.recv()?;
                self.app.update(event, height)?;
            };

            self.draw()?;
        }

        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.exit().ok();
    }
}
