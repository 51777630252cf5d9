//! SRT timestamp formatting

/// Format a time offset in seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// The value is rounded to whole milliseconds before it is split up, so a
/// fraction that rounds to 1000 ms carries into the seconds field. Hours wrap
/// at 24. Negative and non-finite values format as zero.
pub fn format_timestamp(secs: f64) -> String {
    let total_ms = to_millis(secs);

    let hours = (total_ms / 3_600_000) % 24;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Round a time offset in seconds to whole milliseconds
pub fn to_millis(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u64
    } else {
        0
    }
}
