//! Video embed shorthand.
//!
//! Rewrites `@[caption](url)` in raw markdown into a `<figure>` wrapping a
//! `<video>` element, before the text reaches the markdown parser:
//!
//! ```markdown
//! @[Sunset over the bay | Photo: J. Doe](/videos/clip.mp4)
//! ```
//!
//! becomes
//!
//! ```html
//! <figure class="media-center"><video controls><source src="/videos/clip.mp4" type="video/mp4"></video><figcaption>Sunset over the bay<br><i>Photo: J. Doe</i></figcaption></figure>
//! ```
//!
//! The shorthand is not part of the markdown grammar, so the rewrite works on
//! raw text. The emitted fragment is trusted HTML: neither the caption nor the
//! URL is escaped, and the parser passes the fragment through as raw HTML.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::caption::Caption;

/// Matches `@[caption](url)`. Caption has no `]`, URL has no `)`, neither is empty.
static VIDEO_EMBED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// CSS class on the `<figure>` wrapping an embedded video.
const MEDIA_CLASS: &str = "media-center";

/// MIME type advertised on the `<source>` element.
const VIDEO_MIME_TYPE: &str = "video/mp4";

/// A single `@[caption](url)` occurrence in markdown source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEmbed<'a> {
    /// Raw caption text between the brackets.
    pub caption: &'a str,
    /// Raw URL text between the parentheses.
    pub url: &'a str,
    /// Byte range of the whole shorthand in the source text.
    pub span: Range<usize>,
}

impl VideoEmbed<'_> {
    /// Build the HTML fragment replacing this shorthand.
    ///
    /// A caption with an attribution renders as `description<br><i>attribution</i>`;
    /// otherwise the raw caption text is used as-is.
    #[must_use]
    pub fn to_html(&self) -> String {
        let caption = Caption::parse(self.caption);
        let figcaption = match caption.attribution {
            Some(attribution) => {
                Cow::Owned(format!("{}<br><i>{attribution}</i>", caption.description))
            }
            None => Cow::Borrowed(self.caption),
        };
        format!(
            r#"<figure class="{MEDIA_CLASS}"><video controls><source src="{}" type="{VIDEO_MIME_TYPE}"></video><figcaption>{figcaption}</figcaption></figure>"#,
            self.url
        )
    }
}

/// Find every video shorthand in `text`, in source order.
///
/// Matches never overlap.
#[must_use]
pub fn find_video_embeds(text: &str) -> Vec<VideoEmbed<'_>> {
    VIDEO_EMBED_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(VideoEmbed {
                caption: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Replace every video shorthand in `text` with its HTML fragment.
///
/// Text between matches is copied through unchanged. Returns the input
/// borrowed when there is nothing to rewrite.
///
/// # Examples
///
/// ```
/// use figmark::preprocess_videos;
///
/// let output = preprocess_videos("@[Just a caption](/v.mp4)");
/// assert!(output.contains(r#"<source src="/v.mp4" type="video/mp4">"#));
/// assert!(output.contains("<figcaption>Just a caption</figcaption>"));
///
/// assert_eq!(preprocess_videos("no embeds here"), "no embeds here");
/// ```
#[must_use]
pub fn preprocess_videos(text: &str) -> Cow<'_, str> {
    let embeds = find_video_embeds(text);
    if embeds.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len() + embeds.len() * 160);
    let mut cursor = 0;
    for embed in &embeds {
        output.push_str(&text[cursor..embed.span.start]);
        output.push_str(&embed.to_html());
        cursor = embed.span.end;
    }
    output.push_str(&text[cursor..]);

    tracing::debug!(count = embeds.len(), "Rewrote video embeds");
    Cow::Owned(output)
}
