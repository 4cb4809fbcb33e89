//! Lifestyle analyzer: sleep, screen time, and stress to a wellness score

use crate::models::LifestyleMetrics;
use crate::scoring::{clamp_score, round1, screen_score, sleep_score, stress_score};
use serde::{Deserialize, Serialize};

/// Default sleep hours when the field is absent
pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
/// Default screen time hours when the field is absent
pub const DEFAULT_SCREEN_TIME: f64 = 2.0;
/// Default stress level (0-10 scale) when the field is absent
pub const DEFAULT_STRESS_LEVEL: f64 = 5.0;

/// Which factors participate in the wellness average.
///
/// The three-factor mode is the general case; the two-factor mode covers
/// the contract that evaluates sleep and screen time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessMode {
    /// Average sleep and screen-time factors only
    SleepScreen,
    /// Average sleep, screen-time, and stress factors
    #[default]
    ThreeFactor,
}

/// Result of analyzing one day's lifestyle metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleReport {
    /// Wellness score on a 0-10 scale, rounded to one decimal
    pub wellness_score: f64,
    /// Wellness advice, one sentence per out-of-band factor
    pub advice: String,
}

/// Analyze lifestyle metrics in the general (three-factor) mode.
pub fn analyze_lifestyle(metrics: &LifestyleMetrics) -> LifestyleReport {
    analyze_lifestyle_with_mode(metrics, WellnessMode::ThreeFactor)
}

/// Analyze lifestyle metrics with an explicit aggregation mode.
///
/// Absent fields take the documented defaults; malformed input is never
/// rejected. The wellness score is the mean of the participating factors,
/// rounded to one decimal place.
pub fn analyze_lifestyle_with_mode(
    metrics: &LifestyleMetrics,
    mode: WellnessMode,
) -> LifestyleReport {
    let sleep_hours = metrics.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS);
    let screen_time = metrics.screen_time.unwrap_or(DEFAULT_SCREEN_TIME);
    let stress_level = metrics.stress_level.unwrap_or(DEFAULT_STRESS_LEVEL);

    let sleep = sleep_score(sleep_hours);
    let screen = screen_score(screen_time);

    let wellness_score = match mode {
        WellnessMode::SleepScreen => (sleep + screen) / 2.0,
        WellnessMode::ThreeFactor => (sleep + screen + stress_score(stress_level)) / 3.0,
    };

    let mut advice_parts: Vec<&str> = Vec::new();

    if sleep_hours < 7.0 {
        advice_parts.push("Try to get 7-8 hours of sleep for better recovery.");
    } else if sleep_hours > 9.0 {
        advice_parts
            .push("Consider if you need that much sleep - quality matters more than quantity.");
    } else {
        advice_parts.push("Great sleep duration! Keep up the good rest habits.");
    }

    if screen_time > 6.0 {
        advice_parts.push("Consider reducing screen time for better mental health.");
    } else if screen_time < 3.0 {
        advice_parts.push("Good screen time balance! Your eyes will thank you.");
    } else {
        advice_parts.push("Moderate screen time - try to take regular breaks.");
    }

    if mode == WellnessMode::ThreeFactor && stress_level > 7.0 {
        advice_parts
            .push("Consider stress management techniques like meditation or deep breathing.");
    }

    let advice = if advice_parts.is_empty() {
        "Great lifestyle balance! Keep up the healthy habits.".to_string()
    } else {
        advice_parts.join(" ")
    };

    // The sleep factor has no lower bound of its own, so extreme input
    // could drag the mean below zero; the declared range wins.
    LifestyleReport {
        wellness_score: round1(clamp_score(wellness_score, 0.0, 10.0)),
        advice,
    }
}
