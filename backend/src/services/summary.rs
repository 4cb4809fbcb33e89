//! Daily-summary service
//!
//! Runs the three analyzers, computes goal alignment when a goal is
//! available, and asks the optional enhancer for a narrative summary. Any
//! enhancement outcome other than success falls back to the deterministic
//! composition, which is total and therefore the last line of defense:
//! this service never fails.

use crate::services::enhancer::{EnhancementOutcome, EnhancementRequest, SummaryEnhancer};
use health_companion_shared::alignment::assess_alignment;
use health_companion_shared::analyzers::{analyze_exercises, analyze_lifestyle, analyze_meals};
use health_companion_shared::models::{DailyActivityInput, UserGoal};
use health_companion_shared::summary::{compose_summary, DailySummary};
use tracing::{debug, warn};

/// Summary service
pub struct SummaryService;

impl SummaryService {
    /// Produce the day's full summary.
    ///
    /// Alignment is only computed when the caller has a goal; the
    /// deterministic path needs nothing beyond the input itself.
    pub async fn daily_summary(
        enhancer: &dyn SummaryEnhancer,
        goal: Option<&UserGoal>,
        input: &DailyActivityInput,
    ) -> DailySummary {
        let food = analyze_meals(&input.meals);
        let exercise = analyze_exercises(&input.exercises);
        let lifestyle = analyze_lifestyle(&input.lifestyle);

        let alignment = goal.map(|goal| assess_alignment(goal, &food, &exercise, &lifestyle));

        let outcome = enhancer
            .enhance(EnhancementRequest {
                food: &food,
                exercise: &exercise,
                lifestyle: &lifestyle,
                goal,
                alignment: alignment.as_ref(),
            })
            .await;

        let orchestrator_summary = match outcome {
            EnhancementOutcome::Enhanced(summary) => summary,
            EnhancementOutcome::Disabled => {
                debug!("Enhancement disabled; using deterministic summary");
                compose_summary(&food, &exercise, &lifestyle, &input.lifestyle)
            }
            EnhancementOutcome::TimedOut => {
                warn!("Enhancement timed out; using deterministic summary");
                compose_summary(&food, &exercise, &lifestyle, &input.lifestyle)
            }
            EnhancementOutcome::Malformed(cause) => {
                warn!(%cause, "Enhancement returned malformed content; using deterministic summary");
                compose_summary(&food, &exercise, &lifestyle, &input.lifestyle)
            }
            EnhancementOutcome::Failed(cause) => {
                warn!(%cause, "Enhancement failed; using deterministic summary");
                compose_summary(&food, &exercise, &lifestyle, &input.lifestyle)
            }
        };

        DailySummary {
            food_agent: food,
            exercise_agent: exercise,
            lifestyle_agent: lifestyle,
            orchestrator_summary,
            goal_alignment: alignment.map(|alignment| alignment.message),
        }
    }
}
