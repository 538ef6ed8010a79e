//! Selection directives and the sink that applies them

use crate::errors::PacerResult;

/// "Clear the current selection, then select from `(start, 0)` to
/// `(end, end_offset)`"
///
/// The start is always the first indexed fragment, so successive directives
/// grow the highlighted span and never shrink it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionDirective<N> {
    pub start: N,
    pub end: N,
    /// Character offset inside `end`
    pub end_offset: usize,
}

/// Host selection interface
///
/// Implementations clear any existing selection before establishing the new
/// one. An error is treated as fatal for the running session.
pub trait SelectionSink<N> {
    fn apply(&mut self, directive: &SelectionDirective<N>) -> PacerResult<()>;
}
