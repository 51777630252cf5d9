//! Timed-text document parser
//!
//! Decodes the XML caption payloads served by YouTube into cues. Two
//! flavours of the format are understood:
//!
//! ```text
//! <transcript><text start="1.2" dur="3.4">Hello</text>...</transcript>
//! <timedtext format="3"><body><p t="1200" d="3400">Hello</p>...</body></timedtext>
//! ```
//!
//! The first one expresses times in seconds, the second in milliseconds.
//! A document in which any fragment carries an unusable time is rejected
//! as a whole; a transcript with shifted timing is worse than none.

use super::cue::{Cue, RawCueFragment};
use crate::error::{Result, SubtitleError};

/// Timed-text flavours understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `<transcript>` root with `<text start dur>` fragments in seconds
    Transcript,
    /// `<timedtext format="3">` root with `<p t d>` fragments in milliseconds
    TimedText,
}

impl DocumentFormat {
    /// Detect the flavour from the root element
    pub fn detect(document: &str) -> Option<Self> {
        if regex!(r"<transcript\b").is_match(document) {
            Some(DocumentFormat::Transcript)
        } else if regex!(r"<timedtext\b").is_match(document) {
            Some(DocumentFormat::TimedText)
        } else {
            None
        }
    }

    /// Names of the start and duration attributes
    fn time_attributes(&self) -> (&'static str, &'static str) {
        match self {
            DocumentFormat::Transcript => ("start", "dur"),
            DocumentFormat::TimedText => ("t", "d"),
        }
    }

    /// Divisor that turns an attribute value into seconds
    fn time_scale(&self) -> f64 {
        match self {
            DocumentFormat::Transcript => 1.0,
            DocumentFormat::TimedText => 1000.0,
        }
    }
}

/// Parse a timed-text document into cues, in document order.
pub fn parse(document: &str) -> Result<Vec<Cue>> {
    let fragments = decode_fragments(document)?;
    tracing::trace!("Decoded {} timed-text fragments", fragments.len());
    Ok(fragments.into_iter().map(Cue::from).collect())
}

/// Decode the fragments of a timed-text document without cleaning the text.
pub fn decode_fragments(document: &str) -> Result<Vec<RawCueFragment>> {
    let format = DocumentFormat::detect(document).ok_or_else(|| {
        SubtitleError::MalformedDocument(
            "missing <transcript> or <timedtext> root element".to_string(),
        )
    })?;

    let elements = match format {
        DocumentFormat::Transcript => regex!(r"(?s)<text\b([^>]*?)(?:/>|>(.*?)</text>)"),
        DocumentFormat::TimedText => regex!(r"(?s)<p\b([^>]*?)(?:/>|>(.*?)</p>)"),
    };
    let (start_attr, dur_attr) = format.time_attributes();
    let scale = format.time_scale();

    let mut fragments = Vec::new();
    for (index, caps) in elements.captures_iter(document).enumerate() {
        let attrs = caps.get(1).map_or("", |m| m.as_str());

        let start_secs = match attribute(attrs, start_attr) {
            Some(value) => parse_seconds(value, scale)
                .ok_or_else(|| bad_time(index, start_attr, value))?,
            None => {
                return Err(SubtitleError::MalformedDocument(format!(
                    "fragment {} has no `{}` attribute",
                    index, start_attr
                )))
            }
        };
        let duration_secs = match attribute(attrs, dur_attr) {
            Some(value) => {
                parse_seconds(value, scale).ok_or_else(|| bad_time(index, dur_attr, value))?
            }
            None => 0.0,
        };

        let raw_text = caps
            .get(2)
            .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned())
            .unwrap_or_default();

        fragments.push(RawCueFragment {
            start_secs,
            duration_secs,
            raw_text,
        });
    }

    Ok(fragments)
}

/// Look up a quoted attribute value by name
fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    regex!(r#"([\w:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .captures_iter(attrs)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
}

/// Parse a non-negative, finite time value and scale it to seconds
fn parse_seconds(value: &str, scale: f64) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed / scale)
    } else {
        None
    }
}

fn bad_time(index: usize, attr: &str, value: &str) -> SubtitleError {
    SubtitleError::MalformedDocument(format!(
        "fragment {} has invalid `{}` value {:?}",
        index, attr, value
    ))
}
