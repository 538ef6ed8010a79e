//! Text layer
//!
//! Flattens a content tree into one ordered character sequence and maps
//! global character offsets back to tree positions. Knows nothing about
//! playback or the host environment.
//!
//! ## Modules
//!
//! - `index`: `ContentNode` trait, index construction and offset lookup
//! - `tree`: in-memory `ContentNode` implementation

pub mod index;
pub mod tree;

// Re-exports for convenience
pub use index::{ContentNode, LocalPosition, TextIndex};
pub use tree::TreeNode;
