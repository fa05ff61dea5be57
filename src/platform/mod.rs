//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time and frame pacing
//! - Input events
//! - Storage (LocalStorage on web, files on native)
//! - Logging bootstrap

pub mod input;
pub mod storage;
pub mod time;

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use input::{Command, InputQueue, InputSource, command_for_key};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use time::{Clock, FrameScheduler, ManualClock, SystemClock};

#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalInput;
#[cfg(not(target_arch = "wasm32"))]
pub use time::FixedRateScheduler;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// Install the logger for the current platform.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
