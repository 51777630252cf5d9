//! Caption transcript conversion
//!
//! This module turns YouTube timed-text documents into subtitle files:
//! - Timed-text XML decoding into raw fragments
//! - Markup stripping and line-break flattening
//! - SRT rendering with `HH:MM:SS,mmm` timestamps
//! - Plain-text flattening

pub mod cue;
pub mod parser;
pub mod srt;
pub mod timestamp;

pub use cue::{Cue, RawCueFragment};
pub use parser::parse;
pub use srt::{render_srt, render_txt};
pub use timestamp::format_timestamp;
