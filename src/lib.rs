//! Reading Pacer WASM Module
//!
//! Highlights the visible text of a container one character at a time as a
//! reading-pace aid. The container's text is flattened into one continuous
//! sequence regardless of markup, and a pausable, speed-adjustable playback
//! engine grows the window selection through it.

pub mod api;
pub mod dom;
pub mod engine;
pub mod errors;
pub mod models;
pub mod text;

// Re-export commonly used types
pub use api::ReadingPacer;
pub use engine::{ControlAction, Pacer};
pub use errors::{PacerError, PacerResult};
pub use models::{PacerConfig, PlaybackState};
pub use text::{ContentNode, TextIndex};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("Reading pacer WASM module initialized");
}
