//! Keyboard controls for the demo

use std::cell::Cell;
use std::rc::Rc;

use gl_window::prelude::*;
use glfw::{Action, Key, WindowEvent};

/// Requests raised by key presses, consumed by the frame callback
#[derive(Debug, Default)]
pub struct Requests {
    quit: Cell<bool>,
    toggle_fullscreen: Cell<bool>,
}

impl Requests {
    /// Take the pending quit request
    pub fn take_quit(&self) -> bool {
        self.quit.replace(false)
    }

    /// Take the pending fullscreen toggle
    pub fn take_toggle_fullscreen(&self) -> bool {
        self.toggle_fullscreen.replace(false)
    }
}

/// Input listener mapping Escape to quit and F11 to fullscreen
pub struct DemoControls {
    requests: Rc<Requests>,
}

impl DemoControls {
    pub fn new(requests: Rc<Requests>) -> Self {
        Self { requests }
    }
}

impl InputListener for DemoControls {
    fn init(&mut self) {
        log::info!("Controls: Escape quits, F11 toggles fullscreen");
    }

    fn attach(&mut self, window: &mut dyn WindowBackend) {
        window.set_input_polling(true);
    }

    fn on_event(&mut self, _time: f64, event: &WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                self.requests.quit.set(true);
            }
            WindowEvent::Key(Key::F11, _, Action::Press, _) => {
                self.requests.toggle_fullscreen.set(true);
            }
            _ => log::trace!("{event:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::Modifiers;

    #[test]
    fn test_escape_requests_quit_once() {
        let requests = Rc::new(Requests::default());
        let mut controls = DemoControls::new(Rc::clone(&requests));

        controls.on_event(0.0, &WindowEvent::Key(Key::Escape, 0, Action::Press, Modifiers::empty()));

        assert!(requests.take_quit());
        assert!(!requests.take_quit());
        assert!(!requests.take_toggle_fullscreen());
    }

    #[test]
    fn test_f11_release_is_ignored() {
        let requests = Rc::new(Requests::default());
        let mut controls = DemoControls::new(Rc::clone(&requests));

        controls.on_event(0.0, &WindowEvent::Key(Key::F11, 0, Action::Release, Modifiers::empty()));
        assert!(!requests.take_toggle_fullscreen());

        controls.on_event(0.1, &WindowEvent::Key(Key::F11, 0, Action::Press, Modifiers::empty()));
        assert!(requests.take_toggle_fullscreen());
    }
}
