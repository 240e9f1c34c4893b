//! Graphics state configuration
//!
//! The façade only touches a handful of OpenGL states. They are reached
//! through [`GraphicsContext`] so the window logic can be exercised with a
//! recording context in tests and with [`GlGraphics`] at runtime.

pub mod opengl;
pub mod graphics;

pub use opengl::GlGraphics;
pub use graphics::{ClearFlags, Color, GraphicsContext, Viewport};
