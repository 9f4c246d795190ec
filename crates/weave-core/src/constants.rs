/// Weave engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interaction history window for pattern analysis (days).
pub const PATTERN_WINDOW_DAYS: i64 = 180;

/// Maximum participant count for a "primary" interaction.
/// Larger gatherings are group events and skew rhythm analysis.
pub const PRIMARY_MAX_PARTICIPANTS: usize = 3;

/// Fallback contact interval when history is too thin to learn one (days).
pub const DEFAULT_INTERVAL_DAYS: f64 = 14.0;

/// Minimum qualifying interactions before a pattern or tier fit is computed.
pub const MIN_PATTERN_SAMPLE: usize = 2;

/// Below this sample size, tier-fit results are marked preliminary.
pub const PRELIMINARY_SAMPLE: usize = 5;

/// Minimum total initiations before reciprocity imbalance is judged.
pub const MIN_RECIPROCITY_SAMPLE: f64 = 5.0;

/// Consecutive same-direction initiations that make an imbalance severe.
pub const SEVERE_STREAK: u32 = 5;

/// Share of interactions one weekday must reach to count as preferred.
pub const PREFERRED_DAY_SHARE: f64 = 0.3;

/// A relationship is "active" if contacted within this many days.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Number of recent rated interactions feeding the quality signal.
pub const RECENT_QUALITY_SAMPLE: usize = 10;

/// Trailing window for portfolio activity metrics (days).
pub const ACTIVITY_WINDOW_DAYS: i64 = 28;

/// Default cap on suggestions surfaced per day.
pub const DEFAULT_MAX_DAILY_SUGGESTIONS: usize = 5;
