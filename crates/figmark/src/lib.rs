//! Markdown to HTML rendering with figure captions and video embeds.
//!
//! Rendering runs in three steps:
//!
//! 1. [`preprocess_videos`] rewrites `@[caption](url)` shorthand in the raw
//!    text into `<figure>`/`<video>` HTML.
//! 2. `pulldown-cmark` parses the result, and its events are folded into a
//!    [`Document`] tree.
//! 3. [`render_document`] folds the tree into an HTML fragment.
//!
//! Image alt text and video captions follow the same convention: text after
//! the first `|` is an attribution, rendered in italics below the description
//! (see [`Caption`]).
//!
//! # Example
//!
//! ```
//! use figmark::render_markdown;
//!
//! let html = render_markdown("![A lighthouse|Coastal Authority](/img/lh.jpg)")?;
//! assert!(html.contains(r#"<img src="/img/lh.jpg" alt="A lighthouse" />"#));
//! assert!(html.contains("<figcaption>A lighthouse<br><i>Coastal Authority</i></figcaption>"));
//! # Ok::<(), figmark::RenderError>(())
//! ```

mod ast;
mod caption;
mod error;
mod escape;
mod html;
mod renderer;
mod tree;
mod util;
mod video;

pub use ast::{Document, Node, plain_text};
pub use caption::Caption;
pub use error::RenderError;
pub use escape::{escape_attribute, escape_html};
pub use html::{render_document, render_node};
pub use renderer::{MarkdownRenderer, RenderOptions, render_markdown};
pub use video::{VideoEmbed, find_video_embeds, preprocess_videos};
