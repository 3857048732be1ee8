//! Animated number counters ("12,000+").

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

/// Length of the count-up animation.
pub const COUNT_UP_DURATION_MS: f64 = 2000.0;

/// One frame at 60 fps.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Timer period used to drive frames; browsers floor fractional delays.
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Fraction of a counter that must be visible before it starts.
pub const COUNT_UP_VISIBILITY_THRESHOLD: f64 = 0.5;

#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Number of frames in one animation (120 at the defaults).
#[must_use]
pub fn total_frames() -> u32 {
    // 2000 / 16.67 rounds to 120, well inside u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (COUNT_UP_DURATION_MS / FRAME_MS).round() as u32;
    frames
}

/// Insert thousands separators: `1234567` -> `1,234,567`.
#[must_use]
pub fn format_number(n: u64) -> String {
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

/// Read a `data-target` attribute: leading digits after optional whitespace.
/// Returns `None` when there are none or the value overflows.
#[must_use]
pub fn parse_target(raw: &str) -> Option<u64> {
    let digits: String = raw.trim_start().chars().take_while(char::is_ascii_digit).collect();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(_) => None,
    }
}

/// Frame-by-frame state of one counter.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    frame: u32,
    total: u32,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target, frame: 0, total: total_frames() }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.frame >= self.total
    }

    /// Advance one frame and return the text to display, or `None` once the
    /// animation has finished. The last frame shows the target with a `+`.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.frame += 1;
        if self.is_done() {
            return Some(format!("{}+", format_number(self.target)));
        }
        let progress = ease_out_quart(f64::from(self.frame) / f64::from(self.total));
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (self.target as f64 * progress).round() as u64;
        Some(format_number(value))
    }
}
