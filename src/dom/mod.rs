//! Browser host bindings
//!
//! DOM nodes as content, the window selection as selection sink and
//! `setTimeout` as scheduler.

pub mod content;
pub mod scheduler;
pub mod selection;

pub use scheduler::{TimeoutHandle, WindowScheduler};
pub use selection::{utf16_offset, DomSelection};

use web_sys::{Node, Window};

use crate::engine::Pacer;
use crate::errors::{PacerError, PacerResult};

/// A pacer driving the live page
pub type DomPacer = Pacer<Node, DomSelection, WindowScheduler>;

pub fn window() -> PacerResult<Window> {
    web_sys::window().ok_or(PacerError::NoWindow)
}

/// Look up the content container by CSS selector
pub fn resolve_container(window: &Window, selector: &str) -> PacerResult<Node> {
    let document = window.document().ok_or(PacerError::NoDocument)?;
    let element = document
        .query_selector(selector)
        .map_err(|_| PacerError::ContainerNotFound(format!("invalid selector '{}'", selector)))?
        .ok_or_else(|| PacerError::ContainerNotFound(selector.to_string()))?;
    Ok(element.into())
}
