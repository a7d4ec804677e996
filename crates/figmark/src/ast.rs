//! Document tree produced from the markdown parser's event stream.
//!
//! The tree is a closed set of node kinds; the HTML renderer matches on it
//! exhaustively.

/// Root of a parsed markdown document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level block nodes in document order.
    pub children: Vec<Node>,
}

/// A block or inline node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// ATX or setext heading.
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        children: Vec<Node>,
    },
    Paragraph(Vec<Node>),
    /// Literal text. Escaped when rendered.
    Text(String),
    Strong(Vec<Node>),
    Emphasis(Vec<Node>),
    Link {
        /// Link target; `None` when the destination is empty.
        destination: Option<String>,
        children: Vec<Node>,
    },
    /// Image with its alt text flattened to plain text.
    Image {
        /// Image URL; `None` when the source is empty.
        source: Option<String>,
        alt: String,
    },
    /// Fenced or indented code block.
    CodeBlock {
        /// First word of the fence info string, if any.
        language: Option<String>,
        code: String,
    },
    InlineCode(String),
    UnorderedList(Vec<Node>),
    OrderedList(Vec<Node>),
    ListItem(Vec<Node>),
    BlockQuote(Vec<Node>),
    /// Hard line break.
    LineBreak,
    SoftBreak,
    ThematicBreak,
    /// Raw HTML block, emitted verbatim.
    HtmlBlock(String),
    /// Raw inline HTML, emitted verbatim.
    InlineHtml(String),
    /// Construct without markup of its own (tables, strikethrough, ...).
    /// Children render in place.
    Container(Vec<Node>),
}

impl Node {
    /// Child nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Heading { children, .. }
            | Self::Link { children, .. }
            | Self::Paragraph(children)
            | Self::Strong(children)
            | Self::Emphasis(children)
            | Self::UnorderedList(children)
            | Self::OrderedList(children)
            | Self::ListItem(children)
            | Self::BlockQuote(children)
            | Self::Container(children) => children,
            Self::Text(_)
            | Self::Image { .. }
            | Self::CodeBlock { .. }
            | Self::InlineCode(_)
            | Self::LineBreak
            | Self::SoftBreak
            | Self::ThematicBreak
            | Self::HtmlBlock(_)
            | Self::InlineHtml(_) => &[],
        }
    }

    /// Whether this node is inline content (as opposed to a block).
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Text(_)
                | Self::Strong(_)
                | Self::Emphasis(_)
                | Self::Link { .. }
                | Self::Image { .. }
                | Self::InlineCode(_)
                | Self::InlineHtml(_)
                | Self::LineBreak
                | Self::SoftBreak
                | Self::Container(_)
        )
    }

    /// Append the plain-text content of this node to `out`.
    ///
    /// Markup is dropped; line breaks become a single space.
    pub fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text)
            | Self::InlineCode(text)
            | Self::HtmlBlock(text)
            | Self::InlineHtml(text) => out.push_str(text),
            Self::CodeBlock { code, .. } => out.push_str(code),
            Self::Image { alt, .. } => out.push_str(alt),
            Self::LineBreak | Self::SoftBreak => out.push(' '),
            Self::ThematicBreak => {}
            _ => {
                for child in self.children() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// Plain-text content of a sequence of nodes.
#[must_use]
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_plain_text(&mut out);
    }
    out
}
