//! Console logging.
//!
//! No `tracing` subscriber is installed, so events reach `console_log` as
//! `log` records and keep their level (`warn!` lands in `console.warn`).

/// Safe to call more than once; later calls are ignored.
pub(super) fn init() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    let _ = console_log::init_with_level(level);
}
