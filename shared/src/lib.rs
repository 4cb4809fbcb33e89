//! Health Companion Shared Library
//!
//! This crate contains the pure scoring core and the types shared across
//! the backend: analyzers, goal alignment, summary composition, streak
//! derivation, and the domain models / API DTOs.

pub mod alignment;
pub mod analyzers;
pub mod models;
pub mod progress;
pub mod scoring;
pub mod summary;
pub mod types;

// Re-export commonly used items
pub use alignment::{assess_alignment, AlignmentReport};
pub use analyzers::{
    analyze_exercises, analyze_lifestyle, analyze_meals, ExerciseReport, FoodReport,
    LifestyleReport, WellnessMode,
};
pub use summary::{compose_summary, DailySummary, OrchestratorSummary, RECOMMENDATION_COUNT};

// Export models (entities) and types (DTOs) at the crate root
pub use models::{
    ActivityLevel, Credentials, DailyActivityInput, DailyEntry, Gender, GoalType,
    LifestyleMetrics, User, UserGoal, UserProfile, UserProgress,
};
