//! Time-Related Constants
//!
//! Conversion factors and the window lengths the simulator and engine prune by.
//! All timestamps are milliseconds.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * 60;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = MS_PER_HOUR * 24;

// ===== WINDOWS =====

/// Trailing window used for the humidity trend (15 minutes).
pub const TREND_WINDOW_MS: u64 = 15 * MS_PER_MINUTE;

/// Trailing window used to count door openings (1 hour).
pub const ACCESS_WINDOW_MS: u64 = MS_PER_HOUR;

/// Minimum time between two door toggles (anti-flicker).
pub const DOOR_MIN_TOGGLE_INTERVAL_MS: u64 = 10 * MS_PER_SECOND;

/// Duration of an access lock requested by a remediation action.
pub const ACCESS_LOCK_DURATION_MS: u64 = 10 * MS_PER_MINUTE;

// ===== SAMPLING =====

/// Span of the short bulk history series.
pub const DAY_HISTORY_SPAN_MS: u64 = MS_PER_DAY;

/// Sample spacing of the short bulk history series.
pub const DAY_HISTORY_STEP_MS: u64 = MS_PER_MINUTE;

/// Span of the long bulk history series.
pub const WEEK_HISTORY_SPAN_MS: u64 = 7 * MS_PER_DAY;

/// Sample spacing of the long bulk history series.
pub const WEEK_HISTORY_STEP_MS: u64 = 30 * MS_PER_MINUTE;

/// Live readings kept by the feedback loop (24 hours at 1 Hz).
pub const LIVE_HISTORY_CAPACITY: usize = 86_400;

/// Remediation log entries kept by the feedback loop.
pub const ACTION_LOG_CAPACITY: usize = 200;
