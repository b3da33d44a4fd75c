use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum TermEvent {
    Key(KeyEvent),
    /// Anything that only needs a redraw (resize, focus, release events).
    Redraw,
}

/// Block until the next terminal event.
pub fn next() -> Result<TermEvent> {
    Ok(classify(event::read()?))
}

/// Wait up to `timeout` for a key press. `None` when the time ran out.
pub fn key_within(timeout: Duration) -> Result<Option<KeyEvent>> {
    if event::poll(timeout)?
        && let TermEvent::Key(key) = classify(event::read()?)
    {
        return Ok(Some(key));
    }
    Ok(None)
}

fn classify(event: Event) -> TermEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => TermEvent::Key(key),
        _ => TermEvent::Redraw,
    }
}
