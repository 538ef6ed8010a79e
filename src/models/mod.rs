//! Data models for the reading pacer
//!
//! Configuration, playback states and the text fragments produced by the
//! text index.

pub mod config;
pub mod fragment;
pub mod state;

// Re-export commonly used types
pub use config::{PacerConfig, SPEED_STEP_MS};
pub use fragment::TextFragment;
pub use state::PlaybackState;
