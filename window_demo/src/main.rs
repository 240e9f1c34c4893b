//! Window demo application
//!
//! Opens a window from `window_demo.toml` (or `.ron`, or defaults), clears
//! it every frame and reacts to Escape and F11.

mod camera;
mod controls;

use std::rc::Rc;

use gl_window::prelude::*;
use thiserror::Error;

use camera::OrbitCamera;
use controls::{DemoControls, Requests};

const CONFIG_PATHS: [&str; 2] = ["window_demo.toml", "window_demo.ron"];

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),
}

fn run(config: &AppConfig) -> Result<(), DemoError> {
    let requests = Rc::new(Requests::default());

    let mut window = Window::new(GlfwLibrary::new()?, GlGraphics::new())
        .with_listener(DemoControls::new(Rc::clone(&requests)))
        .with_camera(OrbitCamera::new(5.0, 0.5));

    window.init_lib(&config.context);
    window.create(
        &config.window.title,
        config.window.width,
        config.window.height,
        config.window.fullscreen,
    )?;

    window.set_bg_color(config.display.clear_color)?;
    if config.display.depth_test {
        window.enable_3d()?;
    }
    if config.display.cursor_enabled {
        window.enable_cursor()?;
    } else {
        window.disable_cursor()?;
    }
    window.reset_viewport()?;

    let mut since_report = 0.0_f32;
    window.set_loop(|window| {
        if requests.take_quit() {
            window.exit_loop()?;
        }
        if requests.take_toggle_fullscreen() {
            let fullscreen = !window.is_fullscreen();
            window.set_fullscreen(fullscreen)?;
        }

        since_report += window.delta_time();
        if since_report >= 5.0 {
            log::info!("{:.0} fps", window.timer().current_fps());
            since_report = 0.0;
        }
        Ok::<(), WindowError>(())
    })?;

    window.delete()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(&CONFIG_PATHS)?;
    config.validate()?;

    env_logger::Builder::from_default_env()
        .filter_level(gl_window::foundation::logging::parse_level(&config.log_level))
        .init();
    log::info!("Starting window demo");

    match run(&config) {
        Ok(()) => {
            log::info!("Window demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {e}");
            Err(e.into())
        }
    }
}
