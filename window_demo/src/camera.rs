//! A camera that circles the origin

use std::f32::consts::TAU;

use gl_window::prelude::*;

/// Orbit camera advanced by the frame loop
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    radius: f32,
    angle: f32,
    /// Radians per second
    speed: f32,
}

impl OrbitCamera {
    pub const fn new(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            angle: 0.0,
            speed,
        }
    }

    /// Position on the XZ plane
    pub fn position(&self) -> (f32, f32) {
        (self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }

    pub const fn angle(&self) -> f32 {
        self.angle
    }
}

impl CameraController for OrbitCamera {
    fn update(&mut self, delta_time: f32) {
        self.angle = (self.angle + self.speed * delta_time).rem_euclid(TAU);
        log::trace!("Camera at {:?}", self.position());
    }
}
