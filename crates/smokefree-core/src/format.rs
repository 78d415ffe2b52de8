//! Display strings for metric values.
//!
//! The scheduler diffs on these strings, so two values that render the same
//! are never republished.

use crate::metrics::{ElapsedMetrics, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Two decimal places, no currency symbol: `70.00`.
pub fn money(amount: f64) -> String {
    if amount.is_finite() {
        format!("{amount:.2}")
    } else {
        "0.00".to_string()
    }
}

/// Thousands-separated integer: `1,234,567`.
pub fn count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn percent(p: u8) -> String {
    format!("{p}%")
}

/// Running clock: `7d 03:25:09`.
pub fn clock(e: &ElapsedMetrics) -> String {
    format!("{}d {:02}:{:02}:{:02}", e.days, e.hours, e.minutes, e.seconds)
}

/// Coarse human duration with the two most significant units:
/// `3d 4h`, `5h 12m`, `42s`.
pub fn duration_ms(ms: u64) -> String {
    let ms = ms as i64;
    let days = ms / MS_PER_DAY;
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
