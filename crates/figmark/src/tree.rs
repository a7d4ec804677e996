//! Folding the parser's event stream into a [`Document`].

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::ast::{Document, Node, plain_text};
use crate::error::RenderError;
use crate::util::{fence_language, heading_level_to_num};

/// What an open element becomes once its end event arrives.
#[derive(Debug)]
enum FrameKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock(Option<String>),
    HtmlBlock,
    List { ordered: bool },
    Item,
    Emphasis,
    Strong,
    Link(Option<String>),
    Image(Option<String>),
    Container,
}

/// An element whose end event has not been seen yet.
#[derive(Debug)]
struct Frame {
    end: TagEnd,
    kind: FrameKind,
    children: Vec<Node>,
}

impl Frame {
    fn into_node(self) -> Node {
        let children = self.children;
        match self.kind {
            FrameKind::Paragraph => Node::Paragraph(children),
            FrameKind::Heading(level) => Node::Heading { level, children },
            FrameKind::BlockQuote => Node::BlockQuote(children),
            FrameKind::CodeBlock(language) => Node::CodeBlock {
                language,
                code: plain_text(&children),
            },
            FrameKind::HtmlBlock => Node::HtmlBlock(plain_text(&children)),
            FrameKind::List { ordered: true } => Node::OrderedList(children),
            FrameKind::List { ordered: false } => Node::UnorderedList(children),
            FrameKind::Item => Node::ListItem(wrap_inline_runs(children)),
            FrameKind::Emphasis => Node::Emphasis(children),
            FrameKind::Strong => Node::Strong(children),
            FrameKind::Link(destination) => Node::Link {
                destination,
                children,
            },
            FrameKind::Image(source) => Node::Image {
                source,
                alt: plain_text(&children),
            },
            FrameKind::Container => Node::Container(children),
        }
    }
}

/// Stack machine turning start/end events into nested nodes.
#[derive(Debug, Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Vec<Node>,
}

impl TreeBuilder {
    fn push_event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(end) => return self.close(end),
            Event::Text(text) | Event::InlineMath(text) | Event::DisplayMath(text) => {
                self.push(Node::Text(text.into_string()));
            }
            Event::Code(code) => self.push(Node::InlineCode(code.into_string())),
            Event::Html(html) => self.push(Node::HtmlBlock(html.into_string())),
            Event::InlineHtml(html) => self.push(Node::InlineHtml(html.into_string())),
            Event::SoftBreak => self.push(Node::SoftBreak),
            Event::HardBreak => self.push(Node::LineBreak),
            Event::Rule => self.push(Node::ThematicBreak),
            Event::TaskListMarker(_) | Event::FootnoteReference(_) => {}
        }
        Ok(())
    }

    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let end = tag.to_end();
        let kind = match tag {
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::Heading { level, .. } => FrameKind::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => FrameKind::BlockQuote,
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                FrameKind::CodeBlock(fence_language(&info).map(str::to_owned))
            }
            Tag::CodeBlock(CodeBlockKind::Indented) => FrameKind::CodeBlock(None),
            Tag::HtmlBlock => FrameKind::HtmlBlock,
            Tag::List(start) => FrameKind::List {
                ordered: start.is_some(),
            },
            Tag::Item => FrameKind::Item,
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Link { dest_url, .. } => FrameKind::Link(non_empty(dest_url)),
            Tag::Image { dest_url, .. } => FrameKind::Image(non_empty(dest_url)),
            Tag::FootnoteDefinition(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell
            | Tag::Strikethrough
            | Tag::Superscript
            | Tag::Subscript
            | Tag::MetadataBlock(_) => FrameKind::Container,
        };
        self.stack.push(Frame {
            end,
            kind,
            children: Vec::new(),
        });
    }

    fn close(&mut self, found: TagEnd) -> Result<(), RenderError> {
        let Some(frame) = self.stack.pop() else {
            return Err(RenderError::UnexpectedEnd { found });
        };
        if frame.end != found {
            return Err(RenderError::MismatchedEnd {
                expected: frame.end,
                found,
            });
        }
        let node = frame.into_node();
        self.push(node);
        Ok(())
    }

    fn finish(self) -> Result<Document, RenderError> {
        if !self.stack.is_empty() {
            return Err(RenderError::Unclosed {
                count: self.stack.len(),
            });
        }
        Ok(Document {
            children: self.root,
        })
    }
}

/// Wrap each run of consecutive inline nodes in a paragraph.
///
/// Tight list items carry their text directly, loose ones inside paragraphs.
/// Normalizing both to paragraphs makes the output independent of list
/// tightness.
fn wrap_inline_runs(children: Vec<Node>) -> Vec<Node> {
    let mut blocks = Vec::with_capacity(children.len());
    let mut run = Vec::new();
    for child in children {
        if child.is_inline() {
            run.push(child);
        } else {
            if !run.is_empty() {
                blocks.push(Node::Paragraph(std::mem::take(&mut run)));
            }
            blocks.push(child);
        }
    }
    if !run.is_empty() {
        blocks.push(Node::Paragraph(run));
    }
    blocks
}

fn non_empty(s: CowStr<'_>) -> Option<String> {
    (!s.is_empty()).then(|| s.into_string())
}

impl Document {
    /// Build a document from a markdown event stream.
    ///
    /// Any parser producing `pulldown-cmark` events can feed this.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if start and end events are unbalanced.
    pub fn from_events<'a, I>(events: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let mut builder = TreeBuilder::default();
        for event in events {
            builder.push_event(event).inspect_err(|e| {
                tracing::warn!(error = %e, "Malformed markdown event stream");
            })?;
        }
        builder.finish().inspect_err(|e| {
            tracing::warn!(error = %e, "Malformed markdown event stream");
        })
    }

    /// Parse markdown text with the given parser options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the parser emits an unbalanced event stream.
    pub fn parse(markdown: &str, options: Options) -> Result<Self, RenderError> {
        Self::from_events(Parser::new_ext(markdown, options))
    }
}
