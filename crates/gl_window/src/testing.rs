//! Mock library, window and graphics context for unit tests
//!
//! Everything records into shared state so tests can inspect what the
//! façade did after handing ownership over.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glfw::WindowEvent;

use crate::config::ContextHints;
use crate::render::{ClearFlags, Color, GraphicsContext, Viewport};
use crate::subsystems::{CameraController, InputListener};
use crate::window::{BufferSize, CursorMode, VideoMode, WindowBackend, WindowError, WindowLibrary, WindowResult};

#[derive(Debug, Default)]
pub struct MockState {
    pub hints: Option<ContextHints>,
    pub fail_creation: bool,
    pub created: Vec<(String, u32, u32, bool)>,
    pub framebuffer: BufferSize,
    /// Window size in screen coordinates
    pub window_size: BufferSize,
    /// Framebuffer pixels per screen coordinate; 0 is treated as 1
    pub pixel_ratio: u32,
    pub video_mode: Option<VideoMode>,
    /// Clock samples handed out by `time`, oldest first
    pub clock: VecDeque<f64>,
    pub now: f64,
    pub should_close: bool,
    pub made_current: usize,
    pub swaps: usize,
    pub polls: usize,
    pub pending_events: Vec<(f64, WindowEvent)>,
    pub monitor_calls: Vec<(bool, BufferSize)>,
    pub cursor: Option<CursorMode>,
    pub input_polling: bool,
    pub destroyed: usize,
    pub terminated: bool,
}

#[derive(Default)]
pub struct MockLibrary {
    state: Rc<RefCell<MockState>>,
}

impl MockLibrary {
    pub fn state(&self) -> Rc<RefCell<MockState>> {
        Rc::clone(&self.state)
    }
}

impl WindowLibrary for MockLibrary {
    type Window = MockWindow;

    fn apply_hints(&mut self, hints: &ContextHints) {
        self.state.borrow_mut().hints = Some(hints.clone());
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32, fullscreen: bool) -> WindowResult<MockWindow> {
        let mut state = self.state.borrow_mut();
        if state.fail_creation {
            return Err(WindowError::CreationFailed { title: title.to_string(), width, height });
        }
        if fullscreen && state.video_mode.is_none() {
            return Err(WindowError::NoPrimaryMonitor);
        }
        state.created.push((title.to_string(), width, height, fullscreen));
        state.window_size = BufferSize::new(width, height);
        Ok(MockWindow { state: Rc::clone(&self.state) })
    }

    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        self.state.borrow().video_mode
    }

    fn terminate(self) {
        self.state.borrow_mut().terminated = true;
    }
}

pub struct MockWindow {
    state: Rc<RefCell<MockState>>,
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.state.borrow_mut().destroyed += 1;
    }
}

impl WindowBackend for MockWindow {
    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn make_current(&mut self) {
        self.state.borrow_mut().made_current += 1;
    }

    fn framebuffer_size(&self) -> BufferSize {
        self.state.borrow().framebuffer
    }

    fn window_size(&self) -> BufferSize {
        self.state.borrow().window_size
    }

    fn swap_buffers(&mut self) {
        self.state.borrow_mut().swaps += 1;
    }

    fn poll_events(&mut self) {
        self.state.borrow_mut().polls += 1;
    }

    fn drain_events(&mut self) -> Vec<(f64, WindowEvent)> {
        std::mem::take(&mut self.state.borrow_mut().pending_events)
    }

    fn time(&self) -> f64 {
        let mut state = self.state.borrow_mut();
        if let Some(next) = state.clock.pop_front() {
            state.now = next;
        }
        state.now
    }

    fn set_monitor(&mut self, fullscreen: bool, size: BufferSize) -> WindowResult<()> {
        let mut state = self.state.borrow_mut();
        let ratio = state.pixel_ratio.max(1);
        state.monitor_calls.push((fullscreen, size));
        state.window_size = size;
        state.framebuffer = BufferSize::new(size.width * ratio, size.height * ratio);
        Ok(())
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.state.borrow_mut().cursor = Some(mode);
    }

    fn set_input_polling(&mut self, enabled: bool) {
        self.state.borrow_mut().input_polling = enabled;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsCall {
    ClearColor(Color),
    DepthTest,
    Viewport(Viewport),
    Clear(ClearFlags),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingGraphics {
    calls: Rc<RefCell<Vec<GraphicsCall>>>,
}

impl RecordingGraphics {
    pub fn calls(&self) -> Vec<GraphicsCall> {
        self.calls.borrow().clone()
    }

    pub fn viewports(&self) -> Vec<Viewport> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GraphicsCall::Viewport(viewport) => Some(*viewport),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, GraphicsCall::Clear(_)))
            .count()
    }
}

impl GraphicsContext for RecordingGraphics {
    fn set_clear_color(&mut self, color: Color) {
        self.calls.borrow_mut().push(GraphicsCall::ClearColor(color));
    }

    fn enable_depth_test(&mut self) {
        self.calls.borrow_mut().push(GraphicsCall::DepthTest);
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.borrow_mut().push(GraphicsCall::Viewport(viewport));
    }

    fn clear(&mut self, flags: ClearFlags) {
        self.calls.borrow_mut().push(GraphicsCall::Clear(flags));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    inits: Rc<RefCell<usize>>,
    events: Rc<RefCell<Vec<(f64, WindowEvent)>>>,
}

impl RecordingListener {
    pub fn init_count(&self) -> usize {
        *self.inits.borrow()
    }

    pub fn events(&self) -> Vec<(f64, WindowEvent)> {
        self.events.borrow().clone()
    }
}

impl InputListener for RecordingListener {
    fn init(&mut self) {
        *self.inits.borrow_mut() += 1;
    }

    fn attach(&mut self, window: &mut dyn WindowBackend) {
        window.set_input_polling(true);
    }

    fn on_event(&mut self, time: f64, event: &WindowEvent) {
        self.events.borrow_mut().push((time, event.clone()));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCamera {
    deltas: Rc<RefCell<Vec<f32>>>,
}

impl RecordingCamera {
    pub fn deltas(&self) -> Vec<f32> {
        self.deltas.borrow().clone()
    }
}

impl CameraController for RecordingCamera {
    fn update(&mut self, delta_time: f32) {
        self.deltas.borrow_mut().push(delta_time);
    }
}
