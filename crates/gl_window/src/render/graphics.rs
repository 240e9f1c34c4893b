//! Backend-agnostic graphics state contract

use bitflags::bitflags;

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Viewport rectangle in framebuffer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole `width` x `height` buffer
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

bitflags! {
    /// Buffers cleared at the start of a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
    }
}

/// Graphics API state used by the window façade
///
/// Implementations require the window's context to be current on the
/// calling thread; the façade guarantees this by calling
/// `WindowBackend::make_current` in `bind`.
pub trait GraphicsContext {
    /// Set the color used when clearing the color buffer
    fn set_clear_color(&mut self, color: Color);

    /// Enable depth testing
    fn enable_depth_test(&mut self);

    /// Set the viewport transform
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clear the selected buffers
    fn clear(&mut self, flags: ClearFlags);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_array() {
        let color = Color::from([0.1, 0.2, 0.3, 1.0]);
        assert_eq!(color, Color::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn test_full_viewport_starts_at_origin() {
        assert_eq!(Viewport::full(800, 600), Viewport::new(0, 0, 800, 600));
    }
}
