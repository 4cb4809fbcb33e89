//! Daily-activity analyzers
//!
//! Each analyzer is a pure, total function from one activity domain's raw
//! input to a bounded score plus advisory text. Unrecognized input never
//! fails an analysis; it falls back to the analyzer's documented default.

pub mod exercise;
pub mod food;
pub mod lifestyle;

pub use exercise::{analyze_exercises, ExerciseReport};
pub use food::{analyze_meals, FoodReport};
pub use lifestyle::{analyze_lifestyle, analyze_lifestyle_with_mode, LifestyleReport, WellnessMode};
