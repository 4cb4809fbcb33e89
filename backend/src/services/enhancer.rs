//! Optional LLM summary enhancement
//!
//! Wraps an Ollama-compatible generation endpoint behind the
//! [`SummaryEnhancer`] trait. The call is bounded by a timeout and every
//! failure mode is an explicit [`EnhancementOutcome`] variant; the summary
//! service pattern-matches on the outcome and never treats enhancement
//! trouble as an error.

use crate::config::EnhancerConfig;
use async_trait::async_trait;
use health_companion_shared::alignment::AlignmentReport;
use health_companion_shared::analyzers::{ExerciseReport, FoodReport, LifestyleReport};
use health_companion_shared::models::UserGoal;
use health_companion_shared::scoring::{clamp_score, round1};
use health_companion_shared::summary::{pad_recommendations, OrchestratorSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything the enhancer gets to see about the day
pub struct EnhancementRequest<'a> {
    pub food: &'a FoodReport,
    pub exercise: &'a ExerciseReport,
    pub lifestyle: &'a LifestyleReport,
    pub goal: Option<&'a UserGoal>,
    pub alignment: Option<&'a AlignmentReport>,
}

/// Result of an enhancement attempt
#[derive(Debug)]
pub enum EnhancementOutcome {
    /// The external service produced a usable summary
    Enhanced(OrchestratorSummary),
    /// Enhancement is switched off in configuration
    Disabled,
    /// The bounded timeout elapsed
    TimedOut,
    /// The service answered with content that does not conform
    Malformed(String),
    /// Transport or service failure
    Failed(String),
}

/// An external summary generator
#[async_trait]
pub trait SummaryEnhancer: Send + Sync {
    async fn enhance(&self, request: EnhancementRequest<'_>) -> EnhancementOutcome;
}

/// Generation request body (Ollama-compatible)
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'a str,
}

/// Generation response envelope
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// The summary fields the model is asked to produce
#[derive(Deserialize)]
struct EnhancedFields {
    overall_health_score: f64,
    summary: String,
    recommendations: Vec<String>,
    #[serde(default)]
    goal_progress: Option<String>,
    #[serde(default)]
    motivation: Option<String>,
}

/// HTTP-backed enhancer
pub struct HttpEnhancer {
    client: reqwest::Client,
    config: EnhancerConfig,
}

impl HttpEnhancer {
    /// Build an enhancer from configuration.
    ///
    /// The timeout applies to the whole request; there is no retry.
    pub fn new(config: EnhancerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    fn build_prompt(request: &EnhancementRequest<'_>) -> String {
        let mut prompt = format!(
            "You are a health and wellness coach. Based on today's data, return ONLY a JSON \
             object with overall_health_score (0-10 number), summary (string), recommendations \
             (list of exactly 3 strings), goal_progress (string), motivation (string).\n\
             Nutrition: {}/10, {} calories, {}\n\
             Exercise: {} calories burned, {}\n\
             Lifestyle: {}/10 wellness score, {}\n",
            request.food.nutrition_score,
            request.food.calories,
            request.food.comment,
            request.exercise.calories_burned,
            request.exercise.note,
            request.lifestyle.wellness_score,
            request.lifestyle.advice,
        );
        if let Some(goal) = request.goal {
            prompt.push_str(&format!(
                "Goal ({}): {}\n",
                goal.goal_type.label(),
                goal.goal_description
            ));
        }
        if let Some(alignment) = request.alignment {
            prompt.push_str(&format!("Goal alignment: {}\n", alignment.message));
        }
        prompt
    }

    /// Normalize model output into the summary contract: bounded score,
    /// exactly three recommendations.
    fn into_summary(fields: EnhancedFields) -> OrchestratorSummary {
        OrchestratorSummary {
            overall_health_score: round1(clamp_score(fields.overall_health_score, 0.0, 10.0)),
            summary: fields.summary,
            recommendations: pad_recommendations(fields.recommendations),
            goal_progress: fields.goal_progress,
            motivation: fields.motivation,
        }
    }
}

#[async_trait]
impl SummaryEnhancer for HttpEnhancer {
    async fn enhance(&self, request: EnhancementRequest<'_>) -> EnhancementOutcome {
        if !self.config.enabled {
            return EnhancementOutcome::Disabled;
        }

        let body = GenerateRequest {
            model: &self.config.model,
            prompt: Self::build_prompt(&request),
            stream: false,
            format: "json",
        };

        let url = format!("{}/api/generate", self.config.url.trim_end_matches('/'));
        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return EnhancementOutcome::TimedOut,
            Err(err) => return EnhancementOutcome::Failed(err.to_string()),
        };

        if !response.status().is_success() {
            return EnhancementOutcome::Failed(format!(
                "enhancement service returned {}",
                response.status()
            ));
        }

        let envelope: GenerateResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) if err.is_timeout() => return EnhancementOutcome::TimedOut,
            Err(err) => return EnhancementOutcome::Malformed(err.to_string()),
        };

        match serde_json::from_str::<EnhancedFields>(&envelope.response) {
            Ok(fields) => EnhancementOutcome::Enhanced(Self::into_summary(fields)),
            Err(err) => EnhancementOutcome::Malformed(err.to_string()),
        }
    }
}
