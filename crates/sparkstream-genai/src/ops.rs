//! The UI-facing operations.
//!
//! Every operation returns a list and never fails. The `try_*` variant keeps
//! the error for callers that want it; the plain variant logs the
//! [`crate::FailureReason`] and returns an empty list.

use sparkstream_core::{Collaborator, Idea, VibeCheckResult};

use crate::client::ModelInvoker;
use crate::decode::{decode, Shape};
use crate::error::GenaiError;
use crate::prompt::{
    build_collaborator_prompt, build_idea_prompt, build_vibe_check_prompt, Prompt,
};

/// Prompt builder, model invoker, and decoder wired together.
pub struct GenAi<I> {
    invoker: I,
}

impl<I: ModelInvoker> GenAi<I> {
    #[must_use]
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    #[must_use]
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// One round trip: invoke the model with `prompt` and decode the reply.
    ///
    /// # Errors
    ///
    /// Any [`GenaiError`] from the invoker or the decoder.
    pub async fn try_generate<T: Shape + Send>(
        &self,
        prompt: &Prompt,
    ) -> Result<Vec<T>, GenaiError> {
        let text = self.invoker.invoke(prompt).await?;
        decode::<T>(&text)
    }

    /// Like [`GenAi::try_generate`], but failures become an empty list.
    pub async fn generate<T: Shape + Send>(&self, prompt: &Prompt) -> Vec<T> {
        match self.try_generate::<T>(prompt).await {
            Ok(items) => {
                tracing::debug!(shape = T::NAME, count = items.len(), "model call succeeded");
                items
            }
            Err(e) => {
                tracing::warn!(
                    shape = T::NAME,
                    reason = %e.reason(),
                    error = %e,
                    "model call failed; returning empty result"
                );
                Vec::new()
            }
        }
    }

    /// Post ideas for `topic` aimed at `niche`.
    pub async fn generate_ideas(&self, topic: &str, niche: &str) -> Vec<Idea> {
        self.generate(&build_idea_prompt(topic, niche)).await
    }

    /// Persona rewrites of `content` for `platform`.
    pub async fn perform_vibe_check(&self, content: &str, platform: &str) -> Vec<VibeCheckResult> {
        self.generate(&build_vibe_check_prompt(content, platform))
            .await
    }

    /// Collaborator suggestions in `niche`.
    pub async fn find_collaborators(&self, niche: &str) -> Vec<Collaborator> {
        self.generate(&build_collaborator_prompt(niche)).await
    }
}
