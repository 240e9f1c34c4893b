//! Windowing library contract
//!
//! [`WindowLibrary`] stands for the library as a whole (hints, window
//! creation, monitors) and [`WindowBackend`] for one native window. The
//! façade in `facade.rs` is written against these traits only; the GLFW
//! implementation lives in `glfw_backend.rs`.

use glfw::WindowEvent;

use super::error::WindowResult;
use crate::config::ContextHints;

/// Framebuffer size in pixels
///
/// May differ from the window size on high-DPI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl BufferSize {
    /// Create a buffer size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or zero for an empty buffer
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Monitor video mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
}

impl VideoMode {
    /// Resolution of this mode as a buffer size
    pub const fn size(&self) -> BufferSize {
        BufferSize::new(self.width, self.height)
    }
}

/// Cursor behaviour over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Visible and free
    Normal,
    /// Invisible while over the window
    Hidden,
    /// Hidden and captured, for mouse-look
    Disabled,
}

/// The windowing library as a whole
pub trait WindowLibrary {
    /// Native window type produced by this library
    type Window: WindowBackend;

    /// Apply context hints for subsequently created windows
    fn apply_hints(&mut self, hints: &ContextHints);

    /// Create a window; `fullscreen` places it on the primary monitor and
    /// fails with `NoPrimaryMonitor` when there is none
    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> WindowResult<Self::Window>;

    /// Current video mode of the primary monitor
    fn primary_video_mode(&mut self) -> Option<VideoMode>;

    /// Shut the library down after its last window was destroyed
    fn terminate(self);
}

/// One native window with its graphics context
pub trait WindowBackend {
    /// Whether closing was requested by the user or the application
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Make this window's graphics context current on the calling thread
    fn make_current(&mut self);

    /// Framebuffer size as reported by the library
    fn framebuffer_size(&self) -> BufferSize;

    /// Window size in screen coordinates
    ///
    /// Equal to the framebuffer size except on high-DPI displays.
    fn window_size(&self) -> BufferSize;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Take the events queued by the last `poll_events`
    fn drain_events(&mut self) -> Vec<(f64, WindowEvent)>;

    /// Library clock in seconds
    fn time(&self) -> f64;

    /// Move the window onto the primary monitor at `size`, or back to
    /// windowed mode with a `size` client area
    fn set_monitor(&mut self, fullscreen: bool, size: BufferSize) -> WindowResult<()>;

    /// Set the cursor mode
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Enable or disable delivery of all input and window events
    fn set_input_polling(&mut self, enabled: bool);
}
