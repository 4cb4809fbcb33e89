//! Data models for the Health Companion application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::summary::DailySummary;

/// Gender, used for profile bookkeeping only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

/// Goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeightLoss,
    WeightGain,
    MuscleGain,
    Endurance,
    GeneralHealth,
    StressReduction,
    BetterSleep,
}

impl GoalType {
    /// Human-readable label for summaries and goal descriptions
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::WeightLoss => "weight loss",
            GoalType::WeightGain => "weight gain",
            GoalType::MuscleGain => "muscle gain",
            GoalType::Endurance => "endurance",
            GoalType::GeneralHealth => "general health",
            GoalType::StressReduction => "stress reduction",
            GoalType::BetterSleep => "better sleep",
        }
    }
}

/// A user's declared health goal.
///
/// Created once at signup and regenerated on profile update; absent targets
/// mean the corresponding alignment check is skipped, not zero-scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoal {
    pub goal_type: GoalType,
    pub target_weight_kg: Option<f64>,
    pub target_calories_per_day: Option<u32>,
    pub target_protein_per_day: Option<f64>,
    pub target_exercise_minutes_per_week: Option<u32>,
    pub target_sleep_hours: Option<f64>,
    pub target_screen_time_hours: Option<f64>,
    pub target_stress_level: Option<f64>,
    pub goal_description: String,
    pub created_at: DateTime<Utc>,
}

/// Raw lifestyle metrics as submitted.
///
/// All fields are optional; the lifestyle analyzer substitutes documented
/// defaults (8h sleep, 2h screen time, stress level 5) for absent values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LifestyleMetrics {
    pub sleep_hours: Option<f64>,
    pub screen_time: Option<f64>,
    pub stress_level: Option<f64>,
}

/// One day's submitted activity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyActivityInput {
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub lifestyle: LifestyleMetrics,
}

/// One recorded day in a user's history.
///
/// Entries are append-only: never mutated after creation, never deleted in
/// normal operation. One entry per date is intended but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub meals: Vec<String>,
    pub exercises: Vec<String>,
    pub lifestyle: LifestyleMetrics,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<DailySummary>,
    pub created_at: DateTime<Utc>,
}

/// A user's recorded history and derived progress fields.
///
/// `total_entries`, `current_streak`, and `last_entry_date` are always
/// recomputed from `entries`; they are cached for the progress endpoint,
/// never trusted as independent truth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProgress {
    pub entries: Vec<DailyEntry>,
    pub total_entries: usize,
    pub current_streak: u32,
    pub last_entry_date: Option<NaiveDate>,
}

/// Login credentials.
///
/// The password is stored and compared in plaintext. This is a known
/// defect carried over from the system being replaced; hashing is
/// explicitly out of scope here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Demographic and preference attributes used for goal generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub primary_health_goal: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motivation: Option<String>,
}

/// User account record as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub credentials: Credentials,
    pub profile: UserProfile,
    pub goal: UserGoal,
    pub progress: UserProgress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
