//! HTML rendering of the document tree.
//!
//! Rendering is a pure fold: every node renders to its own string and parents
//! concatenate their children's output in document order.
//!
//! | Node | Output |
//! |------|--------|
//! | Heading | `<hN>…</hN>` |
//! | Paragraph | `<p>…</p>` |
//! | Link | `<a href="…">…</a>` |
//! | Image | `<figure class="article-image"><img … />[<figcaption>…</figcaption>]</figure>` |
//! | Code block | `<pre><code class="language-…">…</code></pre>` |
//! | Raw HTML | verbatim |

use crate::ast::{Document, Node};
use crate::caption::Caption;
use crate::escape::{escape_attribute, escape_html};

/// CSS class on the `<figure>` wrapping an image.
const IMAGE_CLASS: &str = "article-image";

/// Language class used for code blocks without a language.
const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// Render a whole document to an HTML fragment.
#[must_use]
pub fn render_document(document: &Document) -> String {
    render_children(&document.children)
}

/// Render a single node and its descendants.
///
/// # Examples
///
/// ```
/// use figmark::{Node, render_node};
///
/// let node = Node::Strong(vec![Node::Text("a < b".to_owned())]);
/// assert_eq!(render_node(&node), "<strong>a &lt; b</strong>");
/// ```
#[must_use]
pub fn render_node(node: &Node) -> String {
    match node {
        Node::Heading { level, children } => {
            format!("<h{level}>{}</h{level}>", render_children(children))
        }
        Node::Paragraph(children) => wrap("p", children),
        Node::Text(text) => escape_html(text),
        Node::Strong(children) => wrap("strong", children),
        Node::Emphasis(children) => wrap("em", children),
        Node::Link {
            destination,
            children,
        } => format!(
            r#"<a href="{}">{}</a>"#,
            escape_attribute(destination.as_deref().unwrap_or_default()),
            render_children(children)
        ),
        Node::Image { source, alt } => image(source.as_deref().unwrap_or_default(), alt),
        Node::CodeBlock { language, code } => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_attribute(language.as_deref().unwrap_or(DEFAULT_CODE_LANGUAGE)),
            escape_html(code)
        ),
        Node::InlineCode(code) => format!("<code>{}</code>", escape_html(code)),
        Node::UnorderedList(children) => wrap("ul", children),
        Node::OrderedList(children) => wrap("ol", children),
        Node::ListItem(children) => wrap("li", children),
        Node::BlockQuote(children) => wrap("blockquote", children),
        Node::LineBreak => "<br>".to_owned(),
        Node::SoftBreak => " ".to_owned(),
        Node::ThematicBreak => "<hr>".to_owned(),
        Node::HtmlBlock(raw) | Node::InlineHtml(raw) => raw.clone(),
        Node::Container(children) => render_children(children),
    }
}

fn render_children(children: &[Node]) -> String {
    children.iter().map(render_node).collect()
}

fn wrap(tag: &str, children: &[Node]) -> String {
    format!("<{tag}>{}</{tag}>", render_children(children))
}

/// Render an image as a figure, splitting alt text into caption parts.
fn image(src: &str, alt: &str) -> String {
    let caption = Caption::parse(alt);

    let mut out = format!(
        r#"<figure class="{IMAGE_CLASS}"><img src="{}" "#,
        escape_attribute(src)
    );
    if !caption.description.is_empty() {
        out.push_str(&format!(
            r#"alt="{}" "#,
            escape_attribute(caption.description)
        ));
    }
    out.push_str("/>");

    if !caption.is_empty() {
        out.push_str("<figcaption>");
        out.push_str(&escape_html(caption.description));
        if let Some(attribution) = caption.attribution {
            out.push_str(&format!("<br><i>{}</i>", escape_html(attribution)));
        }
        out.push_str("</figcaption>");
    }
    out.push_str("</figure>");
    out
}
