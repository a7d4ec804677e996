//! Markdown to HTML pipeline: video preprocessing, parsing, rendering.

use pulldown_cmark::Options;

use crate::ast::Document;
use crate::error::RenderError;
use crate::html::render_document;
use crate::video::preprocess_videos;

/// Options controlling parsing and preprocessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Parse GitHub Flavored Markdown extensions (tables, strikethrough,
    /// task lists).
    pub gfm: bool,
    /// Rewrite `@[caption](url)` video shorthand before parsing.
    pub video_embeds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            video_embeds: true,
        }
    }
}

/// Markdown renderer.
///
/// Holds only options, so one renderer can be shared and used from several
/// threads at once; every call owns its own output.
///
/// # Example
///
/// ```
/// use figmark::MarkdownRenderer;
///
/// let renderer = MarkdownRenderer::new();
/// let html = renderer.render("# Hello\n\n**Bold** text")?;
/// assert_eq!(html, "<h1>Hello</h1><p><strong>Bold</strong> text</p>");
/// # Ok::<(), figmark::RenderError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. Tables and strikethrough have no markup of
    /// their own in the output; their content renders in place.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.options.gfm = enabled;
        self
    }

    /// Enable or disable the video shorthand rewrite.
    #[must_use]
    pub fn with_video_embeds(mut self, enabled: bool) -> Self {
        self.options.video_embeds = enabled;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.options.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Preprocess and parse markdown into a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the parser emits an unbalanced event stream.
    pub fn parse(&self, markdown: &str) -> Result<Document, RenderError> {
        if self.options.video_embeds {
            Document::parse(&preprocess_videos(markdown), self.parser_options())
        } else {
            Document::parse(markdown, self.parser_options())
        }
    }

    /// Render markdown to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the parser emits an unbalanced event stream.
    pub fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let document = self.parse(markdown)?;
        let html = render_document(&document);
        tracing::trace!(
            input_len = markdown.len(),
            output_len = html.len(),
            "Rendered markdown"
        );
        Ok(html)
    }
}

/// Render markdown to HTML with default options.
///
/// # Errors
///
/// Returns [`RenderError`] if the parser emits an unbalanced event stream.
pub fn render_markdown(markdown: &str) -> Result<String, RenderError> {
    MarkdownRenderer::new().render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn render(markdown: &str) -> String {
        render_markdown(markdown).unwrap()
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("# One\n\n###### Six"), "<h1>One</h1><h6>Six</h6>");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            render("*italic* and **bold**"),
            "<p><em>italic</em> and <strong>bold</strong></p>"
        );
    }

    #[test]
    fn test_soft_break_is_space() {
        assert_eq!(render("one\ntwo"), "<p>one two</p>");
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(render("one\\\ntwo"), "<p>one<br>two</p>");
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(render("a\n\n---\n\nb"), "<p>a</p><hr><p>b</p>");
    }

    #[test]
    fn test_fenced_code_block() {
        assert_eq!(
            render("```rust\nlet a = 1 < 2;\n```"),
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            render("```\nplain\n```"),
            "<pre><code class=\"language-plaintext\">plain\n</code></pre>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render("Use `<br>`"), "<p>Use <code>&lt;br&gt;</code></p>");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> Note"), "<blockquote><p>Note</p></blockquote>");
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            render("- a\n- b"),
            "<ul><li><p>a</p></li><li><p>b</p></li></ul>"
        );
        assert_eq!(
            render("3. c\n4. d"),
            "<ol><li><p>c</p></li><li><p>d</p></li></ol>"
        );
    }

    #[test]
    fn test_tight_and_loose_lists_render_alike() {
        assert_eq!(render("- a\n- b"), render("- a\n\n- b"));
        assert_eq!(render("1. a\n2. b"), render("1. a\n\n2. b"));
    }

    #[test]
    fn test_nested_inline_in_list_item() {
        assert_eq!(
            render("- [see *this* **now**](/page)"),
            r#"<ul><li><p><a href="/page">see <em>this</em> <strong>now</strong></a></p></li></ul>"#
        );
    }

    #[test]
    fn test_link_href_escaped() {
        assert_eq!(
            render("[x](/a?b=1&c=2)"),
            r#"<p><a href="/a?b=1&amp;c=2">x</a></p>"#
        );
    }

    #[test]
    fn test_image_figure() {
        assert_eq!(
            render("![A lighthouse|Coastal Authority](/img/lh.jpg)"),
            r#"<p><figure class="article-image"><img src="/img/lh.jpg" alt="A lighthouse" /><figcaption>A lighthouse<br><i>Coastal Authority</i></figcaption></figure></p>"#
        );
    }

    #[test]
    fn test_special_characters_escaped() {
        let html = render(r#"Tom & Jerry say "hi" it's 1 < 2 > 0"#);
        assert_eq!(
            html,
            "<p>Tom &amp; Jerry say &quot;hi&quot; it&#39;s 1 &lt; 2 &gt; 0</p>"
        );
    }

    #[test]
    fn test_raw_html_passthrough() {
        assert_eq!(
            render("<div class=\"note\">raw</div>\n\ntext <kbd>K</kbd>"),
            "<div class=\"note\">raw</div>\n<p>text <kbd>K</kbd></p>"
        );
    }

    #[test]
    fn test_video_embed_block() {
        let html = render("Intro\n\n@[Sunset over the bay | Photo: J. Doe](/videos/clip.mp4)\n\nOutro");
        assert_eq!(
            html,
            "<p>Intro</p><figure class=\"media-center\"><video controls><source src=\"/videos/clip.mp4\" type=\"video/mp4\"></video><figcaption>Sunset over the bay<br><i>Photo: J. Doe</i></figcaption></figure>\n<p>Outro</p>"
        );
    }

    #[test]
    fn test_video_embeds_disabled() {
        let renderer = MarkdownRenderer::new().with_video_embeds(false);
        let html = renderer.render("@[Clip](/v.mp4)").unwrap();
        assert!(!html.contains("<video"));
        assert!(html.contains(r#"<a href="/v.mp4">Clip</a>"#));
    }

    #[test]
    fn test_gfm_table_content_rendered_in_place() {
        let html = render("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(!html.contains("<table>"));
        assert!(html.contains('A'));
        assert!(html.contains('2'));
    }

    #[test]
    fn test_gfm_disabled_leaves_strikethrough_literal() {
        let renderer = MarkdownRenderer::new().with_gfm(false);
        assert_eq!(renderer.render("~~x~~").unwrap(), "<p>~~x~~</p>");
        assert_eq!(render("~~x~~"), "<p>x</p>");
    }

    #[test]
    fn test_parser_options_with_gfm() {
        let options = MarkdownRenderer::new().parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
    }

    #[test]
    fn test_parser_options_without_gfm() {
        let options = MarkdownRenderer::new().with_gfm(false).parser_options();
        assert!(options.is_empty());
    }

    #[test]
    fn test_with_options() {
        let options = RenderOptions {
            gfm: false,
            video_embeds: false,
        };
        let renderer = MarkdownRenderer::new().with_options(options);
        assert_eq!(renderer.options(), options);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.gfm);
        assert!(options.video_embeds);
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = MarkdownRenderer::new();
        let markdown = "# T\n\n![a|b](c.png)\n\n@[v](/v.mp4)";
        assert_eq!(renderer.render(markdown).unwrap(), renderer.render(markdown).unwrap());
    }

    #[test]
    fn test_render_from_threads() {
        let renderer = MarkdownRenderer::new();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let renderer = &renderer;
                    scope.spawn(move || renderer.render(&format!("Item {i}")).unwrap())
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), format!("<p>Item {i}</p>"));
            }
        });
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    proptest! {
        #[test]
        fn prop_plain_text_fully_escaped(body in "[0-9 &<>\"']{0,40}") {
            let html = render(&format!("x {body}"));
            let inner = html
                .strip_prefix("<p>")
                .and_then(|rest| rest.strip_suffix("</p>"));
            prop_assert!(inner.is_some(), "not a single paragraph: {}", html);
            let inner = inner.unwrap_or_default();
            prop_assert!(!inner.contains(['<', '>', '"', '\'']));
            let entities = inner.matches("&amp;").count()
                + inner.matches("&lt;").count()
                + inner.matches("&gt;").count()
                + inner.matches("&quot;").count()
                + inner.matches("&#39;").count();
            prop_assert_eq!(inner.matches('&').count(), entities);
            prop_assert_eq!(inner.matches("&amp;").count(), body.matches('&').count());
        }
    }
}
