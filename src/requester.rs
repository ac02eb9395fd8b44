use log::info;

use crate::profile::UserProfile;
use crate::prompt::build_plan_prompt;
use crate::provider::PlanProvider;

/// Shown when the service answered but the response carried no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "❌ Failed to generate a diet plan.";

/// Prefix for errors raised during the request/response cycle.
pub const ERROR_PREFIX: &str = "❌ Error generating diet plan: ";

/// Header printed above a successfully generated plan.
pub const SUCCESS_HEADER: &str = "✅ Here is your AI-generated diet plan:";

/// Terminal outcome of one plan request. There is no retry and no
/// partial output; every request ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// The model returned plan text, rendered verbatim.
    Generated(String),
    /// The response carried no textual payload.
    Empty,
    /// The request/response cycle raised an error, stringified here.
    Failed(String),
}

impl PlanOutcome {
    /// The error line to display, if this outcome is not a success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            PlanOutcome::Generated(_) => None,
            PlanOutcome::Empty => Some(EMPTY_RESPONSE_MESSAGE.to_string()),
            PlanOutcome::Failed(reason) => Some(format!("{ERROR_PREFIX}{reason}")),
        }
    }
}

/// Build the templated prompt for a profile and make the single
/// generation call, mapping the result onto a [`PlanOutcome`].
pub async fn request_plan(provider: &dyn PlanProvider, profile: &UserProfile) -> PlanOutcome {
    let prompt = build_plan_prompt(profile);
    info!(
        "Requesting diet plan from {} ({})",
        provider.name(),
        provider.model_name()
    );

    match provider.generate(&prompt).await {
        Ok(Some(text)) => PlanOutcome::Generated(text),
        Ok(None) => PlanOutcome::Empty,
        Err(e) => PlanOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DietPreference, Goal, SugarIntake};
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    enum StubReply {
        Text(&'static str),
        NoText,
        Error(&'static str),
    }

    struct StubProvider {
        reply: StubReply,
    }

    #[async_trait]
    impl PlanProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn model_name(&self) -> &str {
            "stub-model"
        }

        async fn generate(&self, prompt: &str) -> Result<Option<String>> {
            assert!(prompt.contains("certified nutritionist"));
            match self.reply {
                StubReply::Text(text) => Ok(Some(text.to_string())),
                StubReply::NoText => Ok(None),
                StubReply::Error(message) => Err(anyhow!(message)),
            }
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            age: 40,
            height_cm: 165,
            current_weight_kg: 70.0,
            target_weight_kg: 65.0,
            goal: Goal::LoseWeight,
            diet_preference: DietPreference::Vegetarian,
            sugar_intake: SugarIntake::Rarely,
            water_intake_l: 2.0,
            event: None,
            sports_interest: None,
            past_issues: None,
        }
    }

    #[tokio::test]
    async fn text_payload_is_rendered_verbatim() {
        let provider = StubProvider {
            reply: StubReply::Text("Monday: lentil soup."),
        };
        let outcome = request_plan(&provider, &profile()).await;
        assert_eq!(
            outcome,
            PlanOutcome::Generated("Monday: lentil soup.".to_string())
        );
        assert_eq!(outcome.error_message(), None);
    }

    #[tokio::test]
    async fn missing_payload_is_the_fixed_failure_line() {
        let provider = StubProvider {
            reply: StubReply::NoText,
        };
        let outcome = request_plan(&provider, &profile()).await;
        assert_eq!(outcome, PlanOutcome::Empty);
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("❌ Failed to generate a diet plan.")
        );
    }

    #[tokio::test]
    async fn errors_are_prefixed_and_stringified() {
        let provider = StubProvider {
            reply: StubReply::Error("connection refused"),
        };
        let outcome = request_plan(&provider, &profile()).await;
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("❌ Error generating diet plan: connection refused")
        );
    }
}
