//! Food analyzer: free-text meal descriptions to calories and nutrition score

use crate::scoring::contains_keyword;
use serde::{Deserialize, Serialize};

/// Known meal phrases and their calorie estimates.
///
/// Matched in declaration order; the first phrase contained in a meal
/// description wins for that meal.
const MEAL_CALORIES: &[(&str, u32)] = &[
    ("avocado toast", 350),
    ("chicken salad", 400),
    ("pasta dinner", 600),
    ("breakfast", 300),
    ("lunch", 500),
    ("dinner", 600),
];

/// Calorie estimate for a meal that matches no table entry.
const DEFAULT_MEAL_CALORIES: u32 = 400;

/// Total-calorie thresholds for the tiered comment.
const LOW_INTAKE_CALORIES: u32 = 1200;
const HIGH_INTAKE_CALORIES: u32 = 2500;

/// Result of analyzing one day's meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReport {
    /// Estimated total calories for the day
    pub calories: u32,
    /// Nutrition score on a 0-10 scale
    pub nutrition_score: f64,
    /// Nutritional advice for the day
    pub comment: String,
}

/// Analyze a day's meal descriptions.
///
/// Each meal is matched case-insensitively against the calorie table; an
/// unmatched meal contributes the default estimate. The nutrition score is
/// a crude linear proxy (`total / 200`, capped at 10): recording more meals
/// raises it regardless of what was eaten.
pub fn analyze_meals(meals: &[String]) -> FoodReport {
    if meals.is_empty() {
        return FoodReport {
            calories: 0,
            nutrition_score: 0.0,
            comment: "No meals recorded today. Consider adding nutritious meals to your day."
                .to_string(),
        };
    }

    // Summed in u64 so an absurdly long meal list cannot overflow the
    // per-day total; the report field saturates at u32::MAX
    let mut total_calories: u64 = 0;
    for meal in meals {
        let estimate = MEAL_CALORIES
            .iter()
            .find(|(phrase, _)| contains_keyword(meal, phrase))
            .map(|(_, calories)| *calories)
            .unwrap_or(DEFAULT_MEAL_CALORIES);
        total_calories += u64::from(estimate);
    }

    let nutrition_score = (total_calories as f64 / 200.0).min(10.0);

    let comment = if total_calories < u64::from(LOW_INTAKE_CALORIES) {
        "Consider adding more nutritious meals to meet daily requirements."
    } else if total_calories > u64::from(HIGH_INTAKE_CALORIES) {
        "Good energy intake, but watch portion sizes for optimal health."
    } else {
        "Balanced calorie intake with good variety in your meals."
    };

    FoodReport {
        calories: total_calories.min(u64::from(u32::MAX)) as u32,
        nutrition_score,
        comment: comment.to_string(),
    }
}
