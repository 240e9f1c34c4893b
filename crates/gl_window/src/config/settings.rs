//! # Settings structures
//!
//! Context hints applied before window creation, the window request itself,
//! and the initial OpenGL display state. [`AppConfig`] bundles them for
//! applications that load everything from one file.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// OpenGL profile requested from the windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlProfile {
    /// Let the driver decide
    Any,
    /// Core profile, no deprecated functionality
    #[default]
    Core,
    /// Compatibility profile
    Compat,
}

/// Library hints applied by `Window::init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextHints {
    /// OpenGL context major version
    pub version_major: u32,
    /// OpenGL context minor version
    pub version_minor: u32,
    /// OpenGL profile
    pub profile: GlProfile,
    /// Request a forward-compatible context (required for core contexts on macOS)
    pub forward_compatible: bool,
    /// Scale window content to the monitor's DPI
    pub scale_to_monitor: bool,
    /// Target refresh rate for fullscreen windows; `None` means "don't care"
    pub fps: Option<u32>,
}

impl ContextHints {
    /// Hints for an OpenGL `major.minor` context with the given profile
    pub fn new(version_major: u32, version_minor: u32, profile: GlProfile) -> Self {
        Self {
            version_major,
            version_minor,
            profile,
            ..Self::default()
        }
    }

    /// Set forward compatibility
    #[must_use]
    pub const fn with_forward_compatible(mut self, enabled: bool) -> Self {
        self.forward_compatible = enabled;
        self
    }

    /// Set target refresh rate
    #[must_use]
    pub const fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Validate the hints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version_major == 0 {
            return Err(ConfigError::Invalid("OpenGL major version must be at least 1".to_string()));
        }
        if self.profile != GlProfile::Any && (self.version_major, self.version_minor) < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "{:?} profile requires OpenGL 3.2 or newer, got {}.{}",
                self.profile, self.version_major, self.version_minor
            )));
        }
        if self.fps == Some(0) {
            return Err(ConfigError::Invalid("Refresh rate cannot be zero".to_string()));
        }
        Ok(())
    }
}

impl Default for ContextHints {
    fn default() -> Self {
        Self {
            version_major: 3,
            version_minor: 3,
            profile: GlProfile::Core,
            forward_compatible: cfg!(target_os = "macos"),
            scale_to_monitor: true,
            fps: Some(60),
        }
    }
}

/// Window creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Start fullscreen on the primary monitor
    pub fullscreen: bool,
}

impl WindowSettings {
    /// Validate the request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "gl_window".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Initial OpenGL display state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Clear color as RGBA in `0.0..=1.0`
    pub clear_color: [f32; 4],
    /// Enable depth testing
    pub depth_test: bool,
    /// Show the cursor; when false it is hidden and captured
    pub cursor_enabled: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            depth_test: true,
            cursor_enabled: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Context hints
    pub context: ContextHints,
    /// Window request
    pub window: WindowSettings,
    /// Initial display state
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.context.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            context: ContextHints::default(),
            window: WindowSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Config for AppConfig {}
