//! Exercise analyzer: free-text activity descriptions to calories burned

use crate::scoring::contains_keyword;
use serde::{Deserialize, Serialize};

/// Known exercise keywords and their base calorie burn.
///
/// Matched in declaration order; the first keyword contained in a
/// description wins ("jog" is tested before "run").
const EXERCISE_CALORIES: &[(&str, f64)] = &[
    ("jog", 300.0),
    ("run", 400.0),
    ("pushup", 50.0),
    ("walk", 200.0),
    ("bike", 250.0),
    ("swim", 350.0),
];

/// Result of analyzing one day's exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseReport {
    /// Estimated total calories burned
    pub calories_burned: u32,
    /// Motivational note for the day
    pub note: String,
}

/// Analyze a day's exercise descriptions.
///
/// Unlike the food analyzer, an unmatched exercise contributes nothing.
/// Descriptions mentioning "sets" are counted at half the base value;
/// mentioning "30" or "mins" keeps the base value unchanged (the branch is
/// kept distinct to match the duration handling it came from).
pub fn analyze_exercises(exercises: &[String]) -> ExerciseReport {
    if exercises.is_empty() {
        return ExerciseReport {
            calories_burned: 0,
            note: "No exercises recorded today. Consider adding some physical activity \
                   to boost your health and energy."
                .to_string(),
        };
    }

    let mut total: f64 = 0.0;
    for exercise in exercises {
        if let Some((_, base)) = EXERCISE_CALORIES
            .iter()
            .find(|(keyword, _)| contains_keyword(exercise, keyword))
        {
            if contains_keyword(exercise, "30") || contains_keyword(exercise, "mins") {
                total += base;
            } else if contains_keyword(exercise, "sets") {
                total += base * 0.5;
            } else {
                total += base;
            }
        }
    }

    // Truncate, not round
    let calories_burned = total as u32;

    let note = if calories_burned > 500 {
        "Excellent workout! You're building great fitness habits."
    } else if calories_burned > 300 {
        "Good activity level! Consider adding some stretching."
    } else if calories_burned > 100 {
        "Nice start! Try to gradually increase your activity."
    } else {
        "Every step counts! Consider a short walk to boost your day."
    };

    ExerciseReport {
        calories_burned,
        note: note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_exercises_short_circuit() {
        let report = analyze_exercises(&[]);
        assert_eq!(report.calories_burned, 0);
        assert!(report.note.contains("No exercises recorded"));
    }

    #[rstest]
    #[case("morning jog", 300)]
    #[case("30 mins jog", 300)] // duration branch leaves the base unchanged
    #[case("quick run", 400)]
    #[case("3 sets of pushups", 25)] // 50 * 0.5
    #[case("evening walk", 200)]
    #[case("bike to work", 250)]
    #[case("swim laps", 350)]
    #[case("interpretive dance", 0)] // no table match, no default
    fn single_exercise_estimates(#[case] exercise: &str, #[case] expected: u32) {
        let report = analyze_exercises(&[exercise.to_string()]);
        assert_eq!(report.calories_burned, expected);
    }

    #[test]
    fn jog_matches_before_run() {
        // "jogging run club" contains both keywords; declaration order
        // resolves it to jog (300), not run (400)
        let report = analyze_exercises(&["jogging run club".to_string()]);
        assert_eq!(report.calories_burned, 300);
    }

    #[test]
    fn sets_modifier_truncates_toward_zero() {
        // Three half-pushup entries: 3 * 25.0 = 75, exact. Force a
        // fractional total with a lone sets-of-pushups plus nothing else:
        // 50 * 0.5 = 25.0, integer cast is a floor in either case.
        let report = analyze_exercises(&["sets of pushups".to_string()]);
        assert_eq!(report.calories_burned, 25);
    }

    #[rstest]
    #[case(vec!["jog", "run"], "Excellent workout")] // 700 > 500
    #[case(vec!["run"], "adding some stretching")] // 400 > 300
    #[case(vec!["walk"], "Nice start")] // 200 > 100
    #[case(vec!["pushup"], "Every step counts")] // 50
    #[case(vec![], "No exercises recorded")]
    fn note_tiers(#[case] exercises: Vec<&str>, #[case] expected_fragment: &str) {
        let exercises: Vec<String> = exercises.into_iter().map(String::from).collect();
        let report = analyze_exercises(&exercises);
        assert!(
            report.note.contains(expected_fragment),
            "note was: {}",
            report.note
        );
    }

    #[test]
    fn unmatched_exercises_do_not_fail_the_day() {
        let report = analyze_exercises(&[
            "interpretive dance".to_string(),
            "morning jog".to_string(),
        ]);
        assert_eq!(report.calories_burned, 300);
    }
}
