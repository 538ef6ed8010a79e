//! Window selection backed by the DOM Range API

use web_sys::{Document, Node, Window};

use crate::engine::{SelectionDirective, SelectionSink};
use crate::errors::{PacerError, PacerResult};
use crate::text::ContentNode;

/// Applies directives to `window.getSelection()`
pub struct DomSelection {
    window: Window,
    document: Document,
}

impl DomSelection {
    pub fn new(window: Window) -> PacerResult<Self> {
        let document = window.document().ok_or(PacerError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl SelectionSink<Node> for DomSelection {
    fn apply(&mut self, directive: &SelectionDirective<Node>) -> PacerResult<()> {
        let selection = self
            .window
            .get_selection()
            .map_err(|e| PacerError::Selection(format!("getSelection: {:?}", e)))?
            .ok_or_else(|| PacerError::Selection("window has no selection".to_string()))?;

        // Range offsets into text nodes are UTF-16 code units
        let content = directive.end.literal_text().unwrap_or_default();
        let end = utf16_offset(&content, directive.end_offset);

        let range = self
            .document
            .create_range()
            .map_err(|e| PacerError::Selection(format!("createRange: {:?}", e)))?;
        range
            .set_start(&directive.start, 0)
            .map_err(|e| PacerError::Selection(format!("setStart: {:?}", e)))?;
        range
            .set_end(&directive.end, end)
            .map_err(|e| PacerError::Selection(format!("setEnd: {:?}", e)))?;

        selection
            .remove_all_ranges()
            .map_err(|e| PacerError::Selection(format!("removeAllRanges: {:?}", e)))?;
        selection
            .add_range(&range)
            .map_err(|e| PacerError::Selection(format!("addRange: {:?}", e)))?;
        Ok(())
    }
}

/// Convert a character offset into `text` to UTF-16 code units
///
/// Offsets past the end of `text` stop at its full UTF-16 length.
pub fn utf16_offset(text: &str, char_offset: usize) -> u32 {
    text.chars().take(char_offset).map(char::len_utf16).sum::<usize>() as u32
}
