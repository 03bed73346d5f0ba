//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) and a periodic tick are read on a
//! background thread and delivered over a channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{FinanceError, FinanceResult};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    ///
    /// If reading from the terminal fails the thread exits, which closes the
    /// channel and ends the main loop.
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                Some(Event::Resize(width, height))
                            }
                            Ok(_) => None,
                            Err(e) => {
                                tracing::error!(error = %e, "failed to read terminal event");
                                return;
                            }
                        };
                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "failed to poll terminal events");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    ///
    /// Fails once the reader thread has stopped.
    pub fn next(&self) -> FinanceResult<Event> {
        recv_event(&self.receiver)
    }
}

fn recv_event(receiver: &mpsc::Receiver<Event>) -> FinanceResult<Event> {
    receiver
        .recv()
        .map_err(|_| FinanceError::Tui("terminal event stream closed".into()))
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_events_are_delivered() {
        let (sender, receiver) = mpsc::channel();
        sender.send(Event::Tick).unwrap();
        assert!(matches!(recv_event(&receiver).unwrap(), Event::Tick));
    }

    #[test]
    fn test_closed_stream_is_tui_error() {
        let (sender, receiver) = mpsc::channel::<Event>();
        drop(sender);

        let err = recv_event(&receiver).unwrap_err();
        assert!(matches!(err, FinanceError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: terminal event stream closed");
    }
}
