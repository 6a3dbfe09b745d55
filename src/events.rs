//! Per-frame SDL event handling.

use sdl2::event::{Event, WindowEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    /// The window's drawable area changed to the given width and height.
    Resized(i32, i32),
    Quit,
}

/// Logs an SDL event and decides what the main loop should do with it.
pub fn handle_event(event: &Event) -> EventOutcome {
    log::debug!("{event:?}");

    match event {
        Event::Quit { .. } => EventOutcome::Quit,
        Event::Window {
            win_event: WindowEvent::Resized(width, height),
            ..
        } => EventOutcome::Resized(*width, *height),
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => {
            log::info!("Key pressed: {}", keycode.name());
            EventOutcome::Continue
        }
        _ => EventOutcome::Continue,
    }
}
