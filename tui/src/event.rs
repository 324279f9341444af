use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

/// Terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// Key press event.
    KeyPress(KeyCode),
    /// Mouse wheel scrolled up.
    ScrollUp,
    /// Mouse wheel scrolled down.
    ScrollDown,
    /// Terminal resize event.
    Resize,
}

/// Terminal events handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Channel to receive events from the event thread.
    rx: Receiver<TermEvent>,
}

impl EventHandler {
    /// Create a new [`EventHandler`].
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || -> Result<()> {
            loop {
                match event::read()? {
                    Event::Key(e) => {
                        // Send the event only if it is a key press.
                        if e.kind == KeyEventKind::Press {
                            tx.send(TermEvent::KeyPress(e.code))?;
                        }
                    }
                    Event::Mouse(e) => match e.kind {
                        MouseEventKind::ScrollUp => tx.send(TermEvent::ScrollUp)?,
                        MouseEventKind::ScrollDown => tx.send(TermEvent::ScrollDown)?,
                        _ => {}
                    },
                    Event::Resize(_, _) => {
                        tx.send(TermEvent::Resize)?;
                    }
                    _ => {}
                }
            }
        });

        Self { rx }
    }

    /// Receive an event.
    pub fn recv(&self) -> Result<TermEvent> {
        Ok(self.rx.recv()?)
    }

    /// Wait for an event until the timeout.
    ///
    /// If no event arrives in time, return [`None`].
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<TermEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
