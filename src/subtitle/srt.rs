//! SRT and plain-text rendering

use super::cue::Cue;
use super::timestamp::format_timestamp;

/// Render cues as an SRT document.
///
/// Blocks are numbered from 1 in cue order and separated by a blank line.
/// The document does not end with a blank line.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut out = String::new();

    for (i, cue) in cues.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(cue.start_secs),
            format_timestamp(cue.end_secs),
            cue.text
        ));
    }

    out.truncate(out.trim_end().len());
    out
}

/// Render cues as a single line of text, joined by spaces.
pub fn render_txt(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| cue.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
