//! Application-level configuration constants.

// Tick cadence
pub const TICK_MS: u32 = 1_000;

// Alert sound served next to the app bundle
pub const ALERT_AUDIO_SRC: &str = "timer.mp3";

// Ring colors
pub const HOUR_RING_COLOR: &str = "#f7b733";
pub const MINUTE_RING_COLOR: &str = "#4abdac";
pub const SECOND_RING_COLOR: &str = "#fc4a1a";

// Input fields
pub const FIELD_MAX_LEN: usize = 2;
