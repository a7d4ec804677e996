//! Caption splitting for figures.
//!
//! Image alt text and video captions use the same convention: the text before
//! the first `|` is the description, the text after it is the attribution.
//!
//! ```text
//! Sunset over the bay | Photo: J. Doe
//! └──── description ─┘ └─ attribution ┘
//! ```

/// A caption split into description and optional attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caption<'a> {
    /// Text before the first `|`, trimmed. May be empty.
    pub description: &'a str,
    /// Text after the first `|`, trimmed. `None` when there is no `|` or
    /// nothing but whitespace follows it.
    pub attribution: Option<&'a str>,
}

impl<'a> Caption<'a> {
    /// Split caption text at the first `|`.
    ///
    /// Later `|` characters stay in the attribution. Both halves lose
    /// surrounding spaces and tabs; line breaks are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use figmark::Caption;
    ///
    /// let caption = Caption::parse("A lighthouse | Coastal Authority");
    /// assert_eq!(caption.description, "A lighthouse");
    /// assert_eq!(caption.attribution, Some("Coastal Authority"));
    ///
    /// let caption = Caption::parse("Just a caption");
    /// assert_eq!(caption.description, "Just a caption");
    /// assert_eq!(caption.attribution, None);
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        match text.split_once('|') {
            Some((description, attribution)) => {
                let attribution = trim_blanks(attribution);
                Self {
                    description: trim_blanks(description),
                    attribution: (!attribution.is_empty()).then_some(attribution),
                }
            }
            None => Self {
                description: trim_blanks(text),
                attribution: None,
            },
        }
    }

    /// Whether there is anything to put in a `<figcaption>`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.attribution.is_none()
    }
}

/// Trim horizontal whitespace (spaces, tabs, other space separators).
fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c == '\t' || (c.is_whitespace() && !c.is_control() && !matches!(c, '\u{2028}' | '\u{2029}'))
    })
}
