//! OpenGL implementation of [`GraphicsContext`]

#![allow(unsafe_code)]

use super::graphics::{ClearFlags, Color, GraphicsContext, Viewport};

/// Graphics state over the `gl` crate's global function table
///
/// Function pointers are loaded by `GlfwWindow::make_current`; calling any
/// method before a window was bound is a driver-level error.
#[derive(Debug, Default)]
pub struct GlGraphics {
    _private: (),
}

impl GlGraphics {
    /// Create the context wrapper
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Load the OpenGL function table through the given loader
    ///
    /// Must run once per context with that context current.
    pub fn load_with<F>(loader: F)
    where
        F: FnMut(&'static str) -> *const std::ffi::c_void,
    {
        gl::load_with(loader);
        log::debug!("OpenGL function pointers loaded");
    }
}

fn gl_size(value: u32) -> gl::types::GLsizei {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn gl_mask(flags: ClearFlags) -> gl::types::GLbitfield {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= gl::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= gl::DEPTH_BUFFER_BIT;
    }
    mask
}

impl GraphicsContext for GlGraphics {
    fn set_clear_color(&mut self, color: Color) {
        // SAFETY: plain state call on the current context
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn enable_depth_test(&mut self) {
        // SAFETY: plain state call on the current context
        unsafe { gl::Enable(gl::DEPTH_TEST) };
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        // SAFETY: sizes are clamped to GLsizei range
        unsafe {
            gl::Viewport(
                viewport.x,
                viewport.y,
                gl_size(viewport.width),
                gl_size(viewport.height),
            );
        }
    }

    fn clear(&mut self, flags: ClearFlags) {
        let mask = gl_mask(flags);
        if mask != 0 {
            // SAFETY: mask only contains valid buffer bits
            unsafe { gl::Clear(mask) };
        }
    }
}
