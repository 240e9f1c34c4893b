//! Window management using GLFW
//!
//! Provides OpenGL context creation, event polling and monitor switching
//! behind the [`WindowLibrary`] and [`WindowBackend`] traits.

use glfw::Context;

use super::backend::{BufferSize, CursorMode, VideoMode, WindowBackend, WindowLibrary};
use super::error::{WindowError, WindowResult};
use crate::config::{ContextHints, GlProfile};
use crate::render::GlGraphics;

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

fn to_pixels(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// GLFW library handle
pub struct GlfwLibrary {
    glfw: glfw::Glfw,
}

impl GlfwLibrary {
    /// Initialize GLFW
    ///
    /// Library errors reported after initialization are logged, not fatal.
    pub fn new() -> WindowResult<Self> {
        let glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;
        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl WindowLibrary for GlfwLibrary {
    type Window = GlfwWindow;

    fn apply_hints(&mut self, hints: &ContextHints) {
        let profile = match hints.profile {
            GlProfile::Any => glfw::OpenGlProfileHint::Any,
            GlProfile::Core => glfw::OpenGlProfileHint::Core,
            GlProfile::Compat => glfw::OpenGlProfileHint::Compat,
        };

        self.glfw.window_hint(glfw::WindowHint::ContextVersion(
            hints.version_major,
            hints.version_minor,
        ));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(profile));
        self.glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(hints.forward_compatible));
        self.glfw.window_hint(glfw::WindowHint::ScaleToMonitor(hints.scale_to_monitor));
        self.glfw.window_hint(glfw::WindowHint::RefreshRate(hints.fps));

        log::debug!(
            "Context hints: OpenGL {}.{} {:?}, forward compatible: {}, refresh rate: {:?}",
            hints.version_major,
            hints.version_minor,
            hints.profile,
            hints.forward_compatible,
            hints.fps
        );
    }

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> WindowResult<GlfwWindow> {
        let created = if fullscreen {
            self.glfw.with_primary_monitor(|glfw, monitor| {
                monitor
                    .map(|m| glfw.create_window(width, height, title, glfw::WindowMode::FullScreen(m)))
                    .ok_or(WindowError::NoPrimaryMonitor)
            })?
        } else {
            self.glfw
                .create_window(width, height, title, glfw::WindowMode::Windowed)
        };

        let (window, events) = created.ok_or_else(|| WindowError::CreationFailed {
            title: title.to_string(),
            width,
            height,
        })?;

        Ok(GlfwWindow {
            window,
            events,
            windowed_position: (0, 0),
            graphics_loaded: false,
        })
    }

    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(|m| m.get_video_mode())
                .map(|mode| VideoMode {
                    width: mode.width,
                    height: mode.height,
                    refresh_rate: mode.refresh_rate,
                })
        })
    }

    fn terminate(self) {
        // GLFW terminates once its last handle is dropped
        drop(self.glfw);
        log::info!("GLFW terminated");
    }
}

/// GLFW window with an OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    windowed_position: (i32, i32),
    graphics_loaded: bool,
}

impl GlfwWindow {
    /// Underlying GLFW window, for features the façade does not wrap
    pub fn glfw_window(&mut self) -> &mut glfw::PWindow {
        &mut self.window
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn make_current(&mut self) {
        self.window.make_current();
        if !self.graphics_loaded {
            let window = &mut self.window;
            GlGraphics::load_with(|symbol| window.get_proc_address(symbol) as *const _);
            self.graphics_loaded = true;
        }
    }

    fn framebuffer_size(&self) -> BufferSize {
        let (width, height) = self.window.get_framebuffer_size();
        BufferSize::new(to_pixels(width), to_pixels(height))
    }

    fn window_size(&self) -> BufferSize {
        let (width, height) = self.window.get_size();
        BufferSize::new(to_pixels(width), to_pixels(height))
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.window.glfw.poll_events();
    }

    fn drain_events(&mut self) -> Vec<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events).collect()
    }

    fn time(&self) -> f64 {
        self.window.glfw.get_time()
    }

    fn set_monitor(&mut self, fullscreen: bool, size: BufferSize) -> WindowResult<()> {
        if !fullscreen {
            let (x, y) = self.windowed_position;
            self.window
                .set_monitor(glfw::WindowMode::Windowed, x, y, size.width, size.height, None);
            return Ok(());
        }

        if self.window.with_window_mode(|mode| matches!(mode, glfw::WindowMode::Windowed)) {
            self.windowed_position = self.window.get_pos();
        }

        let mut glfw = self.window.glfw.clone();
        let window = &mut self.window;
        glfw.with_primary_monitor(|_, monitor| match monitor {
            Some(monitor) => {
                window.set_monitor(
                    glfw::WindowMode::FullScreen(monitor),
                    0,
                    0,
                    size.width,
                    size.height,
                    None,
                );
                Ok(())
            }
            None => Err(WindowError::NoPrimaryMonitor),
        })
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        let mode = match mode {
            CursorMode::Normal => glfw::CursorMode::Normal,
            CursorMode::Hidden => glfw::CursorMode::Hidden,
            CursorMode::Disabled => glfw::CursorMode::Disabled,
        };
        self.window.set_cursor_mode(mode);
    }

    fn set_input_polling(&mut self, enabled: bool) {
        self.window.set_all_polling(enabled);
    }
}
