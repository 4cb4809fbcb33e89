//! Goal generation service
//!
//! Derives a user's health goal deterministically from their profile:
//! BMI picks the goal type and weight target, activity level sets the
//! calorie and exercise targets. Runs at signup and again whenever the
//! profile changes.

use chrono::Utc;
use health_companion_shared::models::{ActivityLevel, GoalType, UserGoal, UserProfile};

/// Protein target in grams per kilogram of body weight
const PROTEIN_G_PER_KG: f64 = 1.6;

/// Goal generation service
pub struct GoalService;

impl GoalService {
    /// Generate a goal from a profile.
    pub fn generate_goal(profile: &UserProfile) -> UserGoal {
        let height_m = profile.height_cm / 100.0;
        let bmi = if height_m > 0.0 {
            profile.weight_kg / (height_m * height_m)
        } else {
            0.0
        };

        let (goal_type, target_weight_kg) = if bmi > 0.0 && bmi < 18.5 {
            (GoalType::WeightGain, profile.weight_kg * 1.1)
        } else if bmi > 25.0 {
            (GoalType::WeightLoss, profile.weight_kg * 0.9)
        } else {
            (GoalType::GeneralHealth, profile.weight_kg)
        };

        let (target_exercise_minutes, target_calories) = match profile.activity_level {
            ActivityLevel::Sedentary => (150, 1800),
            ActivityLevel::LightlyActive => (200, 2000),
            ActivityLevel::ModeratelyActive => (250, 2200),
            ActivityLevel::VeryActive | ActivityLevel::ExtraActive => (300, 2500),
        };

        UserGoal {
            goal_type,
            target_weight_kg: Some(target_weight_kg),
            target_calories_per_day: Some(target_calories),
            target_protein_per_day: Some(profile.weight_kg * PROTEIN_G_PER_KG),
            target_exercise_minutes_per_week: Some(target_exercise_minutes),
            target_sleep_hours: Some(8.0),
            target_screen_time_hours: Some(6.0),
            target_stress_level: Some(5.0),
            goal_description: format!(
                "Personalized health goal based on your profile: {}",
                goal_type.label()
            ),
            created_at: Utc::now(),
        }
    }
}
