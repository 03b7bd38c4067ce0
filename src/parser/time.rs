//! Lap time parsing and formatting.
//!
//! Lap times arrive in two representations: plain seconds ("83.456") or a
//! clock-style string ("1:23.456"). Both normalize to seconds as `f64`.
//! Unparseable input becomes a missing value, never an error.

/// Parse a lap time cell into seconds
///
/// **Public** - main entry point for lap time coercion
///
/// # Arguments
/// * `value` - Raw cell text, or `None` when the cell is absent
///
/// # Returns
/// Seconds as `f64`, or `None` when the value is missing or malformed
///
/// Accepted forms:
/// * `"83.456"` - plain seconds
/// * `"1:23.456"` - minutes:seconds, exactly two parts
///
/// A colon-separated value with any other part count is treated as
/// malformed. Negative values pass through unchanged; validation of
/// plausibility is not this function's job.
pub fn parse_lap_time(value: Option<&str>) -> Option<f64> {
    let text = value?.trim();
    if text.is_empty() {
        return None;
    }

    let seconds = if text.contains(':') {
        let mut parts = text.split(':');
        let minutes: f64 = parts.next()?.trim().parse().ok()?;
        let secs: f64 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            // "1:2:3" has no defined meaning here
            return None;
        }
        minutes * 60.0 + secs
    } else {
        text.parse().ok()?
    };

    // Text like "NaN"/"inf" parses but is not a usable lap time
    seconds.is_finite().then_some(seconds)
}

/// Format seconds as a clock-style lap time string
///
/// **Public** - inverse of `parse_lap_time`, used for `--clock` display
///
/// `83.456` renders as `"1:23.456"`; values under a minute render as
/// plain seconds with 3 decimals.
pub fn format_lap_time(seconds: f64) -> String {
    if !(60.0..).contains(&seconds) {
        return format!("{:.3}", seconds);
    }

    let minutes = (seconds / 60.0).floor();
    let remainder = seconds - minutes * 60.0;
    format!("{}:{:06.3}", minutes as u64, remainder)
}
