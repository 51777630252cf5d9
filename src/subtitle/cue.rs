//! Caption cue types

/// One `<text>` element of a timed-text document, before cleanup.
///
/// Only lives while a single document is being parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCueFragment {
    /// Start offset in seconds
    pub start_secs: f64,
    /// Display duration in seconds
    pub duration_secs: f64,
    /// Entity-decoded text, may still contain inline markup and newlines
    pub raw_text: String,
}

/// A single normalized caption cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Start time in seconds
    pub start_secs: f64,
    /// End time in seconds, never before `start_secs`
    pub end_secs: f64,
    /// Text without markup tags or line breaks
    pub text: String,
}

impl Cue {
    /// Create a new cue from a start offset and a duration
    pub fn new(start_secs: f64, duration_secs: f64, text: impl Into<String>) -> Self {
        Self {
            start_secs,
            end_secs: start_secs + duration_secs,
            text: text.into(),
        }
    }
}

impl From<RawCueFragment> for Cue {
    fn from(fragment: RawCueFragment) -> Self {
        let text = clean_text(&fragment.raw_text);
        Cue::new(fragment.start_secs, fragment.duration_secs, text)
    }
}

/// Strip `<...>` markup and turn every newline into a single space.
///
/// Runs of spaces are kept as-is; the plain-text renderer trims the result.
pub fn clean_text(raw: &str) -> String {
    // Captions are escaped twice upstream ("&amp;lt;i&amp;gt;"), so the second
    // decode has to happen before the markup is stripped.
    let decoded = html_escape::decode_html_entities(raw);
    let stripped = regex!(r"<[^>]*>").replace_all(&decoded, "");
    stripped.replace('\n', " ")
}
