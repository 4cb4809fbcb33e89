//! Request and response types for the Health Companion API

use crate::models::{
    ActivityLevel, DailyEntry, Gender, LifestyleMetrics, UserGoal, UserProfile,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub goal: UserGoal,
}

/// Daily activity submission.
///
/// `date` defaults to today when omitted; lifestyle fields default inside
/// the analyzer, so an empty body is a valid (if uneventful) day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyLogRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub lifestyle: LifestyleMetrics,
}

/// Progress summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub total_entries: usize,
    pub current_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_entry_date: Option<NaiveDate>,
    pub goal: UserGoal,
}

/// Recent-entries response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<DailyEntry>,
}

/// Profile update with every patchable field enumerated.
///
/// Each field is statically known; absent fields are left untouched.
/// Applying a patch regenerates the user's goal from the updated profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub medical_conditions: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub primary_health_goal: Option<String>,
    pub motivation: Option<String>,
}

impl ProfilePatch {
    /// Whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.activity_level.is_none()
            && self.medical_conditions.is_none()
            && self.dietary_restrictions.is_none()
            && self.primary_health_goal.is_none()
            && self.motivation.is_none()
    }
}
