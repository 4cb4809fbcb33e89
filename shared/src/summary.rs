//! Daily-summary composition
//!
//! Deterministic aggregation of the three analyzer reports into one
//! overall summary. This is the fallback path of the summary pipeline: it
//! has no external dependencies, is total over its input domain, and is
//! used unconditionally whenever the optional enhancement path is
//! unavailable or returns unusable content.

use crate::analyzers::lifestyle::DEFAULT_SLEEP_HOURS;
use crate::analyzers::{ExerciseReport, FoodReport, LifestyleReport};
use crate::models::LifestyleMetrics;
use crate::scoring::round1;
use serde::{Deserialize, Serialize};

/// Exact number of recommendations a summary always carries
pub const RECOMMENDATION_COUNT: usize = 3;

/// Filler recommendation used to pad short lists up to the fixed count
const FILLER_RECOMMENDATION: &str = "Stay hydrated and take breaks throughout your day";

/// Aggregate daily summary produced by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorSummary {
    /// Overall health score on a 0-10 scale, rounded to one decimal
    pub overall_health_score: f64,
    /// One-sentence summary of the day
    pub summary: String,
    /// Exactly three recommendations
    pub recommendations: Vec<String>,
    /// Goal-progress narrative, present on the enhanced path only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goal_progress: Option<String>,
    /// Motivational message, present on the enhanced path only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motivation: Option<String>,
}

/// Full daily-summary response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub food_agent: FoodReport,
    pub exercise_agent: ExerciseReport,
    pub lifestyle_agent: LifestyleReport,
    pub orchestrator_summary: OrchestratorSummary,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goal_alignment: Option<String>,
}

/// Pad or truncate a recommendation list to exactly [`RECOMMENDATION_COUNT`].
///
/// Short lists are filled with the generic hydration filler; long lists
/// keep their first three entries.
pub fn pad_recommendations(mut recommendations: Vec<String>) -> Vec<String> {
    while recommendations.len() < RECOMMENDATION_COUNT {
        recommendations.push(FILLER_RECOMMENDATION.to_string());
    }
    recommendations.truncate(RECOMMENDATION_COUNT);
    recommendations
}

/// Compose the deterministic daily summary from the analyzer reports.
///
/// `lifestyle_input` is the submitted metrics record; the sleep
/// recommendation reads the raw sleep hours (with the analyzer's default)
/// rather than the derived wellness score.
pub fn compose_summary(
    food: &FoodReport,
    exercise: &ExerciseReport,
    lifestyle: &LifestyleReport,
    lifestyle_input: &LifestyleMetrics,
) -> OrchestratorSummary {
    let exercise_factor = (f64::from(exercise.calories_burned) / 50.0).min(10.0);
    let overall_health_score =
        round1((food.nutrition_score + exercise_factor + lifestyle.wellness_score) / 3.0);

    let mut summary_parts: Vec<&str> = Vec::new();

    if food.nutrition_score > 7.0 {
        summary_parts.push("excellent nutrition choices");
    } else if food.nutrition_score > 5.0 {
        summary_parts.push("good meal variety");
    } else {
        summary_parts.push("room for nutritional improvement");
    }

    if exercise.calories_burned > 300 {
        summary_parts.push("active lifestyle");
    } else if exercise.calories_burned > 100 {
        summary_parts.push("moderate activity");
    } else {
        summary_parts.push("opportunities for more movement");
    }

    if lifestyle.wellness_score > 7.0 {
        summary_parts.push("healthy lifestyle habits");
    } else {
        summary_parts.push("areas for lifestyle optimization");
    }

    let summary = format!("Today shows {}.", summary_parts.join(", "));

    let mut recommendations: Vec<String> = Vec::new();

    let sleep_hours = lifestyle_input.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS);
    if sleep_hours < 7.0 {
        recommendations.push("Prioritize getting 7-8 hours of sleep tonight".to_string());
    } else if sleep_hours > 9.0 {
        recommendations
            .push("Consider if you need that much sleep - focus on quality".to_string());
    }

    if exercise.calories_burned < 200 {
        recommendations.push("Add a 20-minute walk or light stretching to your day".to_string());
    } else if exercise.calories_burned > 500 {
        recommendations.push("Great workout! Remember to rest and recover properly".to_string());
    }

    if food.nutrition_score < 6.0 {
        recommendations
            .push("Include more vegetables and whole grains in your next meal".to_string());
    } else if food.nutrition_score > 8.0 {
        recommendations.push("Excellent food choices! Keep up the balanced eating".to_string());
    }

    OrchestratorSummary {
        overall_health_score,
        summary,
        recommendations: pad_recommendations(recommendations),
        goal_progress: None,
        motivation: None,
    }
}
