//! Goal-alignment engine
//!
//! Reconciles a user's declared targets against one day's analyzer reports
//! and produces a 0-100% alignment score with tiered qualitative feedback.
//! A check only participates when its target is set; with no applicable
//! checks the result is explicitly undetermined, never a computed zero.

use crate::analyzers::{ExerciseReport, FoodReport, LifestyleReport};
use crate::models::UserGoal;
use serde::{Deserialize, Serialize};

/// Conversion factor from one day's exercise calories to an estimated
/// weekly exercise-minutes figure: `calories_burned * 7 / 300`.
const WEEKLY_EXERCISE_DIVISOR: f64 = 300.0;

/// Outcome of the alignment computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    /// Alignment percentage in [0, 100]; `None` when no goal target was
    /// applicable and alignment cannot be determined yet
    pub percent: Option<f64>,
    /// Qualitative feedback, always present
    pub message: String,
}

impl AlignmentReport {
    /// Whether any goal target was applicable
    pub fn is_determined(&self) -> bool {
        self.percent.is_some()
    }
}

/// Compute the day's goal alignment.
///
/// Up to three checks contribute, each only when its target is present:
///
/// - calorie target vs. the day's estimated intake
/// - weekly exercise-minutes target vs. today's burn extrapolated to a week
/// - sleep target, satisfied through the wellness score as a proxy (the
///   check deliberately does not inspect sleep hours directly)
pub fn assess_alignment(
    goal: &UserGoal,
    food: &FoodReport,
    exercise: &ExerciseReport,
    lifestyle: &LifestyleReport,
) -> AlignmentReport {
    let mut score_sum = 0.0;
    let mut checks = 0u32;

    if let Some(target_calories) = goal.target_calories_per_day {
        let target = f64::from(target_calories);
        let diff = (f64::from(food.calories) - target).abs();
        // 1 - diff/target is at most 1 for any positive target, so the
        // floor at zero is the only bound needed
        score_sum += (1.0 - diff / target).max(0.0);
        checks += 1;
    }

    if let Some(target_minutes) = goal.target_exercise_minutes_per_week {
        let estimated_weekly = f64::from(exercise.calories_burned) * 7.0 / WEEKLY_EXERCISE_DIVISOR;
        score_sum += (estimated_weekly / f64::from(target_minutes)).min(1.0);
        checks += 1;
    }

    if goal.target_sleep_hours.is_some() {
        score_sum += lifestyle.wellness_score / 10.0;
        checks += 1;
    }

    if checks == 0 {
        return AlignmentReport {
            percent: None,
            message: "Goal alignment cannot be determined yet.".to_string(),
        };
    }

    let percent = score_sum / f64::from(checks) * 100.0;

    let message = if percent >= 80.0 {
        format!("Excellent! You're {percent:.0}% aligned with your goals.")
    } else if percent >= 60.0 {
        format!("Good progress! You're {percent:.0}% aligned with your goals.")
    } else if percent >= 40.0 {
        format!("Room for improvement. You're {percent:.0}% aligned with your goals.")
    } else {
        format!("Let's get back on track. You're {percent:.0}% aligned with your goals.")
    };

    AlignmentReport {
        percent: Some(percent),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;
    use chrono::Utc;
    use proptest::prelude::*;

    fn goal(
        calories: Option<u32>,
        exercise_minutes: Option<u32>,
        sleep_hours: Option<f64>,
    ) -> UserGoal {
        UserGoal {
            goal_type: GoalType::GeneralHealth,
            target_weight_kg: None,
            target_calories_per_day: calories,
            target_protein_per_day: None,
            target_exercise_minutes_per_week: exercise_minutes,
            target_sleep_hours: sleep_hours,
            target_screen_time_hours: None,
            target_stress_level: None,
            goal_description: "stay healthy".to_string(),
            created_at: Utc::now(),
        }
    }

    fn food(calories: u32) -> FoodReport {
        FoodReport {
            calories,
            nutrition_score: 5.0,
            comment: String::new(),
        }
    }

    fn exercise(burned: u32) -> ExerciseReport {
        ExerciseReport {
            calories_burned: burned,
            note: String::new(),
        }
    }

    fn lifestyle(wellness: f64) -> LifestyleReport {
        LifestyleReport {
            wellness_score: wellness,
            advice: String::new(),
        }
    }

    #[test]
    fn no_targets_means_undetermined() {
        let report = assess_alignment(
            &goal(None, None, None),
            &food(2000),
            &exercise(300),
            &lifestyle(7.0),
        );
        assert!(!report.is_determined());
        assert_eq!(report.message, "Goal alignment cannot be determined yet.");
    }

    #[test]
    fn exact_calorie_match_scores_full() {
        let report = assess_alignment(
            &goal(Some(2000), None, None),
            &food(2000),
            &exercise(0),
            &lifestyle(0.0),
        );
        assert_eq!(report.percent, Some(100.0));
        assert!(report.message.starts_with("Excellent!"));
    }

    #[test]
    fn calorie_miss_is_floored_at_zero() {
        // 5000 vs target 2000: 1 - 3000/2000 = -0.5, floored to 0
        let report = assess_alignment(
            &goal(Some(2000), None, None),
            &food(5000),
            &exercise(0),
            &lifestyle(0.0),
        );
        assert_eq!(report.percent, Some(0.0));
        assert!(report.message.starts_with("Let's get back on track."));
    }

    #[test]
    fn exercise_check_is_capped_at_fully_met() {
        // 600 burned -> 600 * 7 / 300 = 14 "weekly units" vs target 10
        let report = assess_alignment(
            &goal(None, Some(10), None),
            &food(0),
            &exercise(600),
            &lifestyle(0.0),
        );
        assert_eq!(report.percent, Some(100.0));
    }

    #[test]
    fn sleep_check_uses_wellness_proxy() {
        // wellness 7.7 -> sub-score 0.77 -> 77%
        let report = assess_alignment(
            &goal(None, None, Some(8.0)),
            &food(0),
            &exercise(0),
            &lifestyle(7.7),
        );
        assert_eq!(report.percent, Some(77.0));
        assert!(report.message.starts_with("Good progress!"));
    }

    #[test]
    fn absent_targets_are_skipped_not_zeroed() {
        // Only the calorie check applies; a perfect match yields 100%
        // even though exercise and sleep would have scored poorly
        let report = assess_alignment(
            &goal(Some(1800), None, None),
            &food(1800),
            &exercise(0),
            &lifestyle(1.0),
        );
        assert_eq!(report.percent, Some(100.0));
    }

    #[test]
    fn message_tiers() {
        let tier = |wellness: f64| {
            assess_alignment(
                &goal(None, None, Some(8.0)),
                &food(0),
                &exercise(0),
                &lifestyle(wellness),
            )
            .message
        };
        assert!(tier(9.0).starts_with("Excellent!"));
        assert!(tier(7.0).starts_with("Good progress!"));
        assert!(tier(5.0).starts_with("Room for improvement."));
        assert!(tier(2.0).starts_with("Let's get back on track."));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: a determined percentage always lands in [0, 100]
        #[test]
        fn prop_percent_bounded(
            calories in 0u32..10_000,
            target in 1u32..10_000,
            burned in 0u32..5_000,
            minutes in 1u32..2_000,
            wellness in 0.0f64..10.0,
        ) {
            let report = assess_alignment(
                &goal(Some(target), Some(minutes), Some(8.0)),
                &food(calories),
                &exercise(burned),
                &lifestyle(wellness),
            );
            let percent = report.percent.expect("three checks applied");
            prop_assert!((0.0..=100.0).contains(&percent));
        }
    }
}
