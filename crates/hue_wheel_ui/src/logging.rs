//! Logger installation for native and browser targets

use log::LevelFilter;

/// Install the platform logger at the given level.
///
/// Uses `env_logger` on native targets (`RUST_LOG` still overrides the level)
/// and `console_log` in the browser. Calling this more than once is harmless;
/// later calls only adjust the maximum level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::set_max_level(level);
    }
}

/// Install the platform logger at the given level.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        log::set_max_level(LevelFilter::Off);
        return;
    };
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}
