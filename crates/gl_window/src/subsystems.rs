//! Companion subsystem hooks
//!
//! The façade drives three collaborators without knowing what they do:
//! an input listener, a texture registry and a camera. `()` implements all
//! three as a no-op so applications only provide the ones they need.

use glfw::WindowEvent;

use crate::window::WindowBackend;

/// Input handling hooks
pub trait InputListener {
    /// One-time setup, called from `Window::init_lib`
    fn init(&mut self) {}

    /// Register on a freshly created window, typically by enabling the
    /// event polling the listener cares about
    fn attach(&mut self, window: &mut dyn WindowBackend);

    /// Receive one event drained during `Window::update`
    fn on_event(&mut self, _time: f64, _event: &WindowEvent) {}
}

/// Texture subsystem hooks
pub trait TextureRegistry {
    /// One-time setup, called from `Window::init_lib`
    fn init(&mut self);
}

/// Per-frame camera hook
pub trait CameraController {
    /// Advance the camera by the previous frame's duration
    fn update(&mut self, delta_time: f32);
}

impl InputListener for () {
    fn attach(&mut self, _window: &mut dyn WindowBackend) {}
}

impl TextureRegistry for () {
    fn init(&mut self) {}
}

impl CameraController for () {
    fn update(&mut self, _delta_time: f32) {}
}
