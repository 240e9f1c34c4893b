//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize logging from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level, still overridable by `RUST_LOG`
///
/// Unknown level names fall back to `info`. Calling this twice is harmless;
/// the second initialization is ignored.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    let _ = env_logger::Builder::from_default_env()
        .filter_level(filter)
        .try_init();
}

/// Map a level name such as `"debug"` onto a filter
pub fn parse_level(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Info)
}
