//! # gl_window
//!
//! A small window façade over GLFW with the OpenGL state helpers a
//! forward-rendered demo needs.
//!
//! ## Features
//!
//! - **Window lifecycle**: create, bind, delete and fullscreen switching
//! - **Frame loop**: buffer clear, camera tick, user frame, swap and poll
//! - **OpenGL state**: clear color, depth test, viewport
//! - **Subsystem seams**: input listener, texture registry and camera hooks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new(GlfwLibrary::new()?, GlGraphics::new());
//!     window.init_lib(&ContextHints::default());
//!     window.create("Hello", 1280, 720, false)?;
//!     window.set_bg_color(Color::new(0.1, 0.1, 0.12, 1.0))?;
//!     window.enable_3d()?;
//!
//!     window.set_loop(|window| {
//!         if window.delta_time() > 1.0 {
//!             window.exit_loop()?;
//!         }
//!         Ok::<(), WindowError>(())
//!     })?;
//!
//!     window.delete()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod subsystems;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use window::{Window, WindowError, WindowResult};

/// Common imports for façade users
pub mod prelude {
    pub use crate::{
        config::{AppConfig, Config, ConfigError, ContextHints, DisplaySettings, GlProfile, WindowSettings},
        foundation::time::FrameTimer,
        render::{ClearFlags, Color, GlGraphics, GraphicsContext, Viewport},
        subsystems::{CameraController, InputListener, TextureRegistry},
        window::{
            BufferSize, CursorMode, GlfwLibrary, GlfwWindow, VideoMode, Window, WindowBackend,
            WindowError, WindowLibrary, WindowResult,
        },
    };
}
