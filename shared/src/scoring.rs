//! Scoring primitives shared by all analyzers
//!
//! Provides the numeric building blocks for the daily-summary engine:
//! range clamping, keyword matching, and the per-factor wellness formulas.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Total**: Every function is defined for any finite input
//! 3. **Bounded Outputs**: Derived scores stay inside their declared range

/// Clamp a score into `[min, max]`.
///
/// Used everywhere a derived score must stay in its declared range.
pub fn clamp_score(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

/// Case-insensitive substring containment test.
///
/// Keyword tables are matched in declaration order and the first hit wins,
/// so the iteration order of any table passed through this test is part of
/// the contract (e.g. "jog" is tested before "run").
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sleep factor: optimal at 8 hours, capped at 10.
///
/// Formula: `min(10, sleep_hours * 1.25)`
pub fn sleep_score(sleep_hours: f64) -> f64 {
    (sleep_hours * 1.25).min(10.0)
}

/// Screen-time factor: less screen time scores higher, floored at 0.
///
/// Formula: `max(0, 10 - screen_time * 1.5)`
pub fn screen_score(screen_time_hours: f64) -> f64 {
    (10.0 - screen_time_hours * 1.5).max(0.0)
}

/// Stress factor: lower stress scores higher, floored at 0.
///
/// Formula: `max(0, 10 - stress_level)`
pub fn stress_score(stress_level: f64) -> f64 {
    (10.0 - stress_level).max(0.0)
}
