//! Error types for markdown rendering.

use pulldown_cmark::TagEnd;

/// Error raised when the parser's event stream does not describe a
/// well-formed tree.
///
/// `pulldown-cmark` never produces such a stream itself; these errors guard
/// event streams supplied from elsewhere.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// An end event arrived with no element open.
    #[error("unexpected end event {found:?} with no open element")]
    UnexpectedEnd {
        /// The end event that was received.
        found: TagEnd,
    },

    /// An end event does not close the innermost open element.
    #[error("end event {found:?} does not close open element {expected:?}")]
    MismatchedEnd {
        /// End event matching the innermost open element.
        expected: TagEnd,
        /// The end event that was received.
        found: TagEnd,
    },

    /// The stream ended with elements still open.
    #[error("{count} element(s) left open at end of input")]
    Unclosed {
        /// Number of elements still open.
        count: usize,
    },
}
