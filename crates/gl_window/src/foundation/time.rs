//! Frame timing driven by an external clock

/// Delta-time tracker for the frame loop
///
/// The timer does not read a clock itself; callers feed it the library's
/// time in seconds (GLFW's `glfwGetTime`) so simulated clocks work the same
/// way as the real one.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_time: f64,
    delta_time: f32,
    total_time: f64,
    frame_count: u64,
}

impl FrameTimer {
    /// Create a timer whose clock starts at zero
    pub const fn new() -> Self {
        Self {
            last_time: 0.0,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Record a new clock sample and return the time since the previous one
    ///
    /// A clock that steps backwards (e.g. after the library was re-initialized)
    /// yields a zero delta instead of a negative one.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: f64) -> f32 {
        let elapsed = (now - self.last_time).max(0.0);
        self.delta_time = elapsed as f32;
        self.total_time += elapsed;
        self.last_time = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Time between the last two ticks in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Clock value of the last tick
    pub const fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Sum of all deltas since creation
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of ticks recorded
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frame rate implied by the last delta
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_delta_is_difference_of_samples() {
        let mut timer = FrameTimer::new();
        timer.tick(1.25);
        let delta = timer.tick(1.75);

        assert_relative_eq!(delta, 0.5);
        assert_relative_eq!(timer.delta_time(), 0.5);
        assert_relative_eq!(timer.last_time(), 1.75);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_first_tick_measures_from_zero() {
        let mut timer = FrameTimer::new();
        assert_relative_eq!(timer.tick(0.016), 0.016);
    }

    #[test]
    fn test_backwards_clock_clamps_to_zero() {
        let mut timer = FrameTimer::new();
        timer.tick(5.0);
        assert_relative_eq!(timer.tick(1.0), 0.0);
        assert_relative_eq!(timer.last_time(), 1.0);
    }

    #[test]
    fn test_fps_from_delta() {
        let mut timer = FrameTimer::new();
        assert_relative_eq!(timer.current_fps(), 0.0);
        timer.tick(0.25);
        assert_relative_eq!(timer.current_fps(), 4.0);
        assert_relative_eq!(timer.total_time(), 0.25);
    }
}
