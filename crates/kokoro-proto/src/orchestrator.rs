//! Request orchestrator — one submission from input to rendered result.
//!
//! ```text
//!  Idle → Validating → SafetyCheck → AwaitingChat? → AwaitingPredict → Rendering → Idle
//! ```
//!
//! The safety check runs before anything is rendered or sent. The chat call
//! (chat box only) always completes before the prediction call starts. A
//! failure at any stage produces exactly one error line and ends the
//! submission; nothing is retried.

use tracing::{error, info};

use crate::client::MoodService;
use crate::error::ServiceError;
use crate::mood::Mood;
use crate::protocol::PredictResponse;
use crate::render::{Frontend, Sender};
use crate::safety;

/// Where a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Free text typed into the chat box: chat call, then prediction.
    ChatBox,
    /// A mood button: prediction only.
    MoodButton(Mood),
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happened.
    Ignored,
    /// Safety check tripped; the front end was sent to the emergency target.
    Redirected,
    /// Both calls succeeded and results were rendered.
    Completed,
    /// A call failed; one error line was rendered.
    Failed,
}

pub struct Orchestrator<S> {
    service: S,
    emergency_target: String,
}

impl<S: MoodService> Orchestrator<S> {
    pub fn new(service: S, emergency_target: impl Into<String>) -> Self {
        Self {
            service,
            emergency_target: emergency_target.into(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run one submission against `view`.
    pub async fn submit<F>(&self, source: InputSource, input: &str, view: &F) -> Outcome
    where
        F: Frontend + Sync + ?Sized,
    {
        let text = input.trim();
        if text.is_empty() {
            return Outcome::Ignored;
        }

        if safety::is_crisis(text) {
            info!("orchestrator: safety check tripped, navigating to emergency resource");
            view.navigate(&self.emergency_target);
            return Outcome::Redirected;
        }

        info!("orchestrator: submission from {:?}", source);
        let result = match source {
            InputSource::ChatBox => self.run_chat(text, view).await,
            InputSource::MoodButton(mood) => self.run_mood(mood, text, view).await,
        };

        match result {
            Ok(()) => Outcome::Completed,
            Err(e) => {
                error!("orchestrator: {}", e);
                view.append(Sender::Error, &self.failure_line(&e));
                Outcome::Failed
            }
        }
    }

    async fn run_chat<F>(&self, text: &str, view: &F) -> Result<(), ServiceError>
    where
        F: Frontend + Sync + ?Sized,
    {
        view.append(Sender::User, text);

        let reply = self.service.chat(text).await?;
        view.append(Sender::Bot, &reply);

        let prediction = self.predict(text).await?;
        if let Some(emotion) = prediction.emotion() {
            view.append(
                Sender::Bot,
                &format!("I detected you're feeling: {}", emotion),
            );
        }
        // An empty list still replaces the panel, showing the placeholder.
        if let Some(tracks) = prediction.tracks() {
            if !tracks.is_empty() {
                view.append(
                    Sender::Bot,
                    "Here are some music recommendations that might help:",
                );
            }
            view.render(Some(tracks));
        }
        Ok(())
    }

    async fn run_mood<F>(&self, mood: Mood, prompt: &str, view: &F) -> Result<(), ServiceError>
    where
        F: Frontend + Sync + ?Sized,
    {
        view.append(
            Sender::System,
            &format!("Processing your {} mood...", mood.name()),
        );

        let prediction = self.predict(prompt).await?;
        if let Some(emotion) = prediction.emotion() {
            view.append(
                Sender::Bot,
                &format!("I detected you're feeling: {}", emotion),
            );
        }
        view.append(
            Sender::Bot,
            &format!("Perfect! I've curated music for your {} mood.", mood.name()),
        );
        let tracks = prediction.tracks();
        if tracks.map_or(true, <[_]>::is_empty) {
            view.append(
                Sender::Bot,
                "I couldn't find specific tracks, but I'm still learning your preferences!",
            );
        }
        if let Some(tracks) = tracks {
            view.render(Some(tracks));
        }
        Ok(())
    }

    /// Prediction call with `success: false` folded into the error path.
    async fn predict(&self, text: &str) -> Result<PredictResponse, ServiceError> {
        let prediction = self.service.predict(text).await?;
        if !prediction.success {
            return Err(ServiceError::Rejected {
                service: crate::error::Service::Predict,
            });
        }
        Ok(prediction)
    }

    fn failure_line(&self, err: &ServiceError) -> String {
        let service = err.service();
        format!(
            "Something went wrong: {}. Make sure the {} service is running at {}.",
            err,
            service.name(),
            self.service.endpoint(service)
        )
    }
}
