//! Command handlers: one model round trip each, printed as pretty JSON.
//!
//! By default a failed model call prints `[]` and exits 0, matching what the
//! app shows. With `strict` the error is returned instead.

use anyhow::Context;
use serde::Serialize;
use sparkstream_core::{Collaborator, Idea, VibeCheckResult};
use sparkstream_genai::{
    build_collaborator_prompt, build_idea_prompt, build_vibe_check_prompt, GenAi, ModelInvoker,
    Prompt, Shape,
};

pub(crate) async fn ideas<I: ModelInvoker>(
    genai: &GenAi<I>,
    topic: &str,
    niche: &str,
    strict: bool,
) -> anyhow::Result<String> {
    require_non_empty("topic", topic)?;
    let prompt = build_idea_prompt(topic, niche);
    run::<_, Idea>(genai, "ideas", &prompt, strict).await
}

pub(crate) async fn vibe_check<I: ModelInvoker>(
    genai: &GenAi<I>,
    draft: &str,
    platform: &str,
    strict: bool,
) -> anyhow::Result<String> {
    require_non_empty("draft", draft)?;
    let prompt = build_vibe_check_prompt(draft, platform);
    run::<_, VibeCheckResult>(genai, "vibe-check", &prompt, strict).await
}

pub(crate) async fn collaborators<I: ModelInvoker>(
    genai: &GenAi<I>,
    niche: &str,
    strict: bool,
) -> anyhow::Result<String> {
    require_non_empty("niche", niche)?;
    let prompt = build_collaborator_prompt(niche);
    run::<_, Collaborator>(genai, "collab", &prompt, strict).await
}

async fn run<I, T>(
    genai: &GenAi<I>,
    command: &str,
    prompt: &Prompt,
    strict: bool,
) -> anyhow::Result<String>
where
    I: ModelInvoker,
    T: Shape + Serialize + Send,
{
    tracing::debug!(command, shape = T::NAME, strict, "calling model");
    let items: Vec<T> = if strict {
        genai
            .try_generate(prompt)
            .await
            .map_err(|e| anyhow::anyhow!("{} ({})", e, e.reason()))?
    } else {
        genai.generate(prompt).await
    };
    tracing::info!(command, count = items.len(), "model call finished");
    serde_json::to_string_pretty(&items).context("failed to render results as JSON")
}

fn require_non_empty(field: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    Ok(())
}
