//! Reading Pacer WASM API
//!
//! JavaScript-facing surface of the pacer.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, config deserialization and error conversion
//! - `reader`: The `ReadingPacer` class bound to a page container

pub mod helpers;
pub mod reader;

pub use reader::ReadingPacer;
