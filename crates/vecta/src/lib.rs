//! Small, fixed-size linear algebra: vectors, 4x4 transform matrices and complex numbers.
//!
//! This crate re-exports [`vecta_linalg`] and adds logger setup for binaries built on it.
//!
//! # Coordinates
//!
//! Vecta uses a right-handed coordinate system: X points to the right, Y points up, and the camera
//! built by [`Mat4::view`] looks down the -Z axis. Matrices are row-major and transform column
//! vectors (`m * v`), so `projection * view * model` applies `model` first.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log levels configured by [`init_logger!`], using [`env_logger`]
//!   syntax.

use log::LevelFilter;

pub use vecta_linalg::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("vecta_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and Vecta will log at *trace* level.
/// Otherwise, they will log at *debug* level. `RUST_LOG` takes precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_is_noop() {
        init_logger!();
        init_logger!();
        log::debug!("logger initialized");
    }
}
