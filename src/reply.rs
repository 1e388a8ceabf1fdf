//! Canned admin responses and the pluggable source behind them.

use rand::Rng;
use std::time::Duration;

/// The fixed pool of admin replies, in the order the site shipped them.
pub const REPLY_POOL: [&str; 6] = [
    "Thank you for your message! How can I assist you further?",
    "I understand your concern. Let me help you with that.",
    "That's a great question! Here's what I can tell you...",
    "I'm here to help! Could you provide more details?",
    "Thanks for reaching out! I'll get back to you shortly.",
    "I appreciate your patience. Let me look into this for you.",
];

/// Where admin replies come from.
///
/// The production implementation is random; tests substitute a scripted one.
pub trait ResponseSource {
    /// Text of the next admin reply.
    fn next_reply(&mut self) -> String;

    /// How long to wait before the next reply appears.
    fn next_delay(&mut self) -> Duration;
}

/// Uniform random replies from [`REPLY_POOL`] after a uniform random delay.
pub struct CannedResponses {
    delay_min: Duration,
    delay_max: Duration,
}

impl CannedResponses {
    /// Default delay range, matching the site: 1-3 seconds.
    pub fn new() -> Self {
        Self::with_delay_range(Duration::from_millis(1000), Duration::from_millis(3000))
    }

    /// Custom delay range `[min, max)`. Degenerate ranges (min >= max)
    /// collapse to a fixed `min` delay.
    pub fn with_delay_range(min: Duration, max: Duration) -> Self {
        Self {
            delay_min: min,
            delay_max: max,
        }
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSource for CannedResponses {
    fn next_reply(&mut self) -> String {
        let idx = rand::rng().random_range(0..REPLY_POOL.len());
        REPLY_POOL[idx].to_string()
    }

    fn next_delay(&mut self) -> Duration {
        if self.delay_min >= self.delay_max {
            return self.delay_min;
        }
        let min_ms = self.delay_min.as_millis() as u64;
        let max_ms = self.delay_max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min_ms..max_ms))
    }
}
