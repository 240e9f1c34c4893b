//! The window façade
//!
//! [`Window`] owns the windowing library, the graphics context, the bound
//! native window and the frame timer. Everything a frame loop needs goes
//! through it; there is no process-wide state.

use std::fmt::Display;

use glfw::WindowEvent;

use super::backend::{BufferSize, CursorMode, WindowBackend, WindowLibrary};
use super::error::{WindowError, WindowResult};
use super::glfw_backend::GlfwLibrary;
use crate::config::ContextHints;
use crate::foundation::time::FrameTimer;
use crate::render::{ClearFlags, Color, GlGraphics, GraphicsContext, Viewport};
use crate::subsystems::{CameraController, InputListener, TextureRegistry};

/// The active native window and the sizes cached for it
struct BoundWindow<W> {
    handle: W,
    buffer: BufferSize,
    /// State to restore when leaving fullscreen; `Some` only while fullscreen
    windowed: Option<WindowedState>,
}

/// Windowed geometry saved on entering fullscreen
#[derive(Debug, Clone, Copy)]
struct WindowedState {
    /// Window size in screen coordinates, as `set_monitor` expects
    size: BufferSize,
    /// Framebuffer size in pixels; unknown for windows created fullscreen
    buffer: Option<BufferSize>,
}

/// Window context owned by the application
///
/// Buffer dimensions exist only while a window is bound. Operations that
/// need one return [`WindowError::UndefinedWindow`] naming the operation.
pub struct Window<L: WindowLibrary = GlfwLibrary, G: GraphicsContext = GlGraphics> {
    library: L,
    graphics: G,
    bound: Option<BoundWindow<L::Window>>,
    timer: FrameTimer,
    listener: Box<dyn InputListener>,
    textures: Box<dyn TextureRegistry>,
    camera: Box<dyn CameraController>,
}

impl<L: WindowLibrary, G: GraphicsContext> Window<L, G> {
    /// Create an unbound context over a library and a graphics API
    pub fn new(library: L, graphics: G) -> Self {
        Self {
            library,
            graphics,
            bound: None,
            timer: FrameTimer::new(),
            listener: Box::new(()),
            textures: Box::new(()),
            camera: Box::new(()),
        }
    }

    /// Use `listener` for input registration and events
    #[must_use]
    pub fn with_listener(mut self, listener: impl InputListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Use `textures` as the texture subsystem
    #[must_use]
    pub fn with_textures(mut self, textures: impl TextureRegistry + 'static) -> Self {
        self.textures = Box::new(textures);
        self
    }

    /// Use `camera` for the per-frame camera update
    #[must_use]
    pub fn with_camera(mut self, camera: impl CameraController + 'static) -> Self {
        self.camera = Box::new(camera);
        self
    }

    /// Apply context hints for windows created afterwards
    pub fn init(&mut self, hints: &ContextHints) {
        if let Err(e) = hints.validate() {
            log::warn!("Applying questionable context hints: {e}");
        }
        self.library.apply_hints(hints);
    }

    /// Apply context hints and initialize the input and texture subsystems
    pub fn init_lib(&mut self, hints: &ContextHints) {
        self.init(hints);
        self.listener.init();
        self.textures.init();
        log::info!("Window library initialized");
    }

    /// Create a window, bind it and attach the input listener
    ///
    /// A window created fullscreen remembers the requested size as its
    /// windowed size. A previously bound window is destroyed.
    pub fn create(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> WindowResult<&mut L::Window> {
        log::info!("Creating window \"{title}\" ({width}x{height}, fullscreen: {fullscreen})");
        let handle = self.library.create_window(title, width, height, fullscreen)?;

        if self.bind(handle).is_some() {
            log::warn!("Window::create replaced a bound window; the old one is destroyed");
        }

        let bound = self
            .bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::create"))?;
        if fullscreen {
            bound.windowed = Some(WindowedState {
                size: BufferSize::new(width, height),
                buffer: None,
            });
        }
        self.listener.attach(&mut bound.handle);

        Ok(&mut bound.handle)
    }

    /// Close and destroy the bound window, then shut the library down
    pub fn delete(mut self) -> WindowResult<()> {
        let mut bound = self
            .bound
            .take()
            .ok_or(WindowError::undefined("Window::delete"))?;

        bound.handle.set_should_close(true);
        drop(bound);
        log::info!("Window destroyed");

        self.library.terminate();
        Ok(())
    }

    /// Make `handle` the active window
    ///
    /// Refreshes the cached buffer size from the library and makes the
    /// window's context current. Returns the previously bound window.
    pub fn bind(&mut self, mut handle: L::Window) -> Option<L::Window> {
        let buffer = handle.framebuffer_size();
        handle.make_current();
        log::debug!("Bound window with {}x{} framebuffer", buffer.width, buffer.height);

        self.bound
            .replace(BoundWindow {
                handle,
                buffer,
                windowed: None,
            })
            .map(|previous| previous.handle)
    }

    /// Whether a window is bound
    pub const fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Whether the bound window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.bound.as_ref().is_some_and(|bound| bound.windowed.is_some())
    }

    /// The bound native window
    pub fn handle(&self) -> WindowResult<&L::Window> {
        self.bound
            .as_ref()
            .map(|bound| &bound.handle)
            .ok_or(WindowError::undefined("Window::handle"))
    }

    /// The bound native window, mutably
    pub fn handle_mut(&mut self) -> WindowResult<&mut L::Window> {
        self.bound
            .as_mut()
            .map(|bound| &mut bound.handle)
            .ok_or(WindowError::undefined("Window::handle_mut"))
    }

    /// Re-read the framebuffer size of the bound window
    pub fn update_buffer_size(&mut self) -> WindowResult<BufferSize> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::update_buffer_size"))?;
        bound.buffer = bound.handle.framebuffer_size();
        Ok(bound.buffer)
    }

    /// Current buffer size
    pub fn buffer_size(&self) -> WindowResult<BufferSize> {
        self.bound
            .as_ref()
            .map(|bound| bound.buffer)
            .ok_or(WindowError::undefined("Window::buffer_size"))
    }

    /// Current buffer width
    pub fn buffer_width(&self) -> WindowResult<u32> {
        self.bound
            .as_ref()
            .map(|bound| bound.buffer.width)
            .ok_or(WindowError::undefined("Window::buffer_width"))
    }

    /// Current buffer height
    pub fn buffer_height(&self) -> WindowResult<u32> {
        self.bound
            .as_ref()
            .map(|bound| bound.buffer.height)
            .ok_or(WindowError::undefined("Window::buffer_height"))
    }

    /// Override the cached buffer width
    pub fn set_buffer_width(&mut self, width: u32) -> WindowResult<()> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::set_buffer_width"))?;
        bound.buffer.width = width;
        Ok(())
    }

    /// Override the cached buffer height
    pub fn set_buffer_height(&mut self, height: u32) -> WindowResult<()> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::set_buffer_height"))?;
        bound.buffer.height = height;
        Ok(())
    }

    /// Set the viewport
    pub fn set_viewport(&mut self, viewport: Viewport) -> WindowResult<()> {
        self.require_bound("Window::set_viewport")?;
        self.graphics.set_viewport(viewport);
        Ok(())
    }

    /// Set the viewport to cover the whole buffer
    pub fn reset_viewport(&mut self) -> WindowResult<()> {
        let buffer = self
            .bound
            .as_ref()
            .map(|bound| bound.buffer)
            .ok_or(WindowError::undefined("Window::reset_viewport"))?;
        self.graphics.set_viewport(Viewport::full(buffer.width, buffer.height));
        Ok(())
    }

    /// Set the clear color
    pub fn set_bg_color(&mut self, color: impl Into<Color>) -> WindowResult<()> {
        self.require_bound("Window::set_bg_color")?;
        self.graphics.set_clear_color(color.into());
        Ok(())
    }

    /// Enable depth testing
    pub fn enable_3d(&mut self) -> WindowResult<()> {
        self.require_bound("Window::enable_3d")?;
        self.graphics.enable_depth_test();
        Ok(())
    }

    /// Switch the bound window between fullscreen and windowed mode
    ///
    /// Entering fullscreen saves the windowed geometry and adopts the
    /// primary monitor's resolution; leaving restores it. The window size
    /// (screen coordinates) and the buffer size (pixels) are saved apart,
    /// so high-DPI windows come back at their original size. Both
    /// directions reset the viewport. Repeating the current mode changes
    /// nothing.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> WindowResult<()> {
        let Self {
            library,
            graphics,
            bound,
            ..
        } = self;
        let bound = bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::set_fullscreen"))?;

        if fullscreen {
            if bound.windowed.is_some() {
                log::debug!("Window is already fullscreen");
                return Ok(());
            }
            let mode = library
                .primary_video_mode()
                .ok_or(WindowError::NoPrimaryMonitor)?;
            let saved = WindowedState {
                size: bound.handle.window_size(),
                buffer: Some(bound.buffer),
            };
            bound.handle.set_monitor(true, mode.size())?;
            bound.windowed = Some(saved);
            bound.buffer = mode.size();
        } else {
            let Some(saved) = bound.windowed else {
                log::debug!("Window is already windowed");
                return Ok(());
            };
            bound.handle.set_monitor(false, saved.size)?;
            bound.windowed = None;
            bound.buffer = saved
                .buffer
                .unwrap_or_else(|| bound.handle.framebuffer_size());
        }

        log::info!(
            "Switched to {} at {}x{}",
            if fullscreen { "fullscreen" } else { "windowed" },
            bound.buffer.width,
            bound.buffer.height
        );
        graphics.set_viewport(Viewport::full(bound.buffer.width, bound.buffer.height));
        Ok(())
    }

    /// Run the frame loop until the window is asked to close
    ///
    /// Each iteration clears the buffers, advances the camera by the last
    /// frame's delta time, runs `frame`, then presents and polls. An error
    /// from `frame` ends the loop.
    pub fn set_loop<F, E>(&mut self, mut frame: F) -> WindowResult<()>
    where
        F: FnMut(&mut Self) -> Result<(), E>,
        E: Display,
    {
        log::info!("Starting frame loop...");

        while !self.should_close("Window::set_loop")? {
            self.reset_buffers()?;
            self.camera.update(self.timer.delta_time());
            frame(self).map_err(|e| WindowError::Frame(e.to_string()))?;
            self.update()?;
        }

        log::info!(
            "Frame loop finished after {} frames ({:.2}s)",
            self.timer.frame_count(),
            self.timer.total_time()
        );
        Ok(())
    }

    /// Ask the frame loop to stop at its next check
    pub fn exit_loop(&mut self) -> WindowResult<()> {
        self.handle_mut_for("Window::exit_loop")?
            .set_should_close(true);
        log::debug!("Frame loop exit requested");
        Ok(())
    }

    /// Show the cursor
    pub fn enable_cursor(&mut self) -> WindowResult<()> {
        self.handle_mut_for("Window::enable_cursor")?
            .set_cursor_mode(CursorMode::Normal);
        Ok(())
    }

    /// Hide and capture the cursor
    pub fn disable_cursor(&mut self) -> WindowResult<()> {
        self.handle_mut_for("Window::disable_cursor")?
            .set_cursor_mode(CursorMode::Disabled);
        Ok(())
    }

    /// Clear the color and depth buffers
    pub fn reset_buffers(&mut self) -> WindowResult<()> {
        self.require_bound("Window::reset_buffers")?;
        self.graphics.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
        Ok(())
    }

    /// Present, poll events and recompute the delta time
    ///
    /// Events are forwarded to the input listener. Framebuffer resizes
    /// refresh the cached buffer size and the viewport.
    pub fn update(&mut self) -> WindowResult<f32> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(WindowError::undefined("Window::update"))?;

        bound.handle.swap_buffers();
        bound.handle.poll_events();

        for (time, event) in bound.handle.drain_events() {
            if let WindowEvent::FramebufferSize(width, height) = event {
                bound.buffer = BufferSize::new(
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                );
                self.graphics
                    .set_viewport(Viewport::full(bound.buffer.width, bound.buffer.height));
                log::debug!("Framebuffer resized to {width}x{height}");
            }
            self.listener.on_event(time, &event);
        }

        let delta = self.timer.tick(bound.handle.time());
        log::trace!("Frame delta: {delta:.4}s");
        Ok(delta)
    }

    /// Time between the last two updates in seconds
    pub const fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frame timer state
    pub const fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// The windowing library
    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    /// The graphics context
    pub fn graphics_mut(&mut self) -> &mut G {
        &mut self.graphics
    }

    fn require_bound(&self, operation: &'static str) -> WindowResult<()> {
        if self.bound.is_some() {
            Ok(())
        } else {
            Err(WindowError::undefined(operation))
        }
    }

    fn should_close(&self, operation: &'static str) -> WindowResult<bool> {
        self.bound
            .as_ref()
            .map(|bound| bound.handle.should_close())
            .ok_or(WindowError::undefined(operation))
    }

    fn handle_mut_for(&mut self, operation: &'static str) -> WindowResult<&mut L::Window> {
        self.bound
            .as_mut()
            .map(|bound| &mut bound.handle)
            .ok_or(WindowError::undefined(operation))
    }
}
