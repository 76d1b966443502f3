use serde::Serialize;
use sparkstream_core::{VibeCheckResult, PLATFORMS};

use crate::error::StudioError;
use crate::slot::{Slot, Ticket};

/// One vibe-check result plus the user's in-progress edits of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variation {
    pub result: VibeCheckResult,
    /// Editable caption, initially the model's `optimized_caption`.
    pub caption: String,
    /// Editable space-separated hashtags, initially the model's suggestions.
    pub hashtags: String,
}

impl Variation {
    #[must_use]
    pub fn new(result: VibeCheckResult) -> Self {
        Self {
            caption: result.optimized_caption.clone(),
            hashtags: result.suggested_hashtags.join(" "),
            result,
        }
    }

    /// Current hashtag edit split on whitespace, empties dropped.
    #[must_use]
    pub fn hashtag_list(&self) -> Vec<String> {
        self.hashtags
            .split_whitespace()
            .map(ToOwned::to_owned)
            .collect()
    }
}

/// Draft text, target platform, and the vibe-check results for the draft.
#[derive(Debug)]
pub struct Editor {
    content: String,
    platform: String,
    variations: Slot<Variation>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            content: String::new(),
            platform: PLATFORMS[0].to_owned(),
            variations: Slot::default(),
        }
    }
}

impl Editor {
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    #[must_use]
    pub fn variations(&self) -> &Slot<Variation> {
        &self.variations
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// # Errors
    ///
    /// [`StudioError::UnknownPlatform`] if `platform` is not one of
    /// [`PLATFORMS`].
    pub fn set_platform(&mut self, platform: &str) -> Result<(), StudioError> {
        if !PLATFORMS.contains(&platform) {
            return Err(StudioError::UnknownPlatform(platform.to_owned()));
        }
        platform.clone_into(&mut self.platform);
        Ok(())
    }

    /// Starts a vibe check on the current text, clearing old results.
    pub(crate) fn begin_vibe_check(&mut self) -> Result<Ticket, StudioError> {
        if self.content.trim().is_empty() {
            return Err(StudioError::EmptyInput("draft content"));
        }
        Ok(self.variations.begin_clearing())
    }

    pub(crate) fn finish_vibe_check(
        &mut self,
        ticket: Ticket,
        results: Vec<VibeCheckResult>,
    ) -> bool {
        self.variations
            .complete(ticket, results.into_iter().map(Variation::new).collect())
    }

    /// Replaces the caption and/or hashtag text of one variation.
    ///
    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if `index` is out of range.
    pub fn edit_variation(
        &mut self,
        index: usize,
        caption: Option<String>,
        hashtags: Option<String>,
    ) -> Result<&Variation, StudioError> {
        let variation = self
            .variations
            .items_mut()
            .get_mut(index)
            .ok_or(StudioError::NoSuchItem {
                kind: "variation",
                index,
            })?;
        if let Some(caption) = caption {
            variation.caption = caption;
        }
        if let Some(hashtags) = hashtags {
            variation.hashtags = hashtags;
        }
        Ok(variation)
    }

    /// Copies a variation's current caption into the editor text.
    ///
    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if `index` is out of range.
    pub fn copy_to_editor(&mut self, index: usize) -> Result<(), StudioError> {
        let caption = self
            .variation(index)?
            .caption
            .clone();
        self.content = caption;
        Ok(())
    }

    pub(crate) fn variation(&self, index: usize) -> Result<&Variation, StudioError> {
        self.variations.get(index).ok_or(StudioError::NoSuchItem {
            kind: "variation",
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(persona: &str) -> VibeCheckResult {
        VibeCheckResult {
            persona: persona.to_owned(),
            optimized_caption: format!("{persona} says hi"),
            virality_score: 77,
            sentiment: "Positive".to_owned(),
            tone: "Chill".to_owned(),
            constructive_feedback: "Nice.".to_owned(),
            suggested_hashtags: vec!["#one".to_owned(), "#two".to_owned()],
            visual_prompt: "sunset".to_owned(),
        }
    }

    #[test]
    fn defaults_to_first_platform() {
        assert_eq!(Editor::default().platform(), "Instagram");
    }

    #[test]
    fn rejects_unknown_platform() {
        let mut editor = Editor::default();
        assert_eq!(
            editor.set_platform("MySpace"),
            Err(StudioError::UnknownPlatform("MySpace".to_owned()))
        );
        editor.set_platform("Twitter/X").unwrap();
        assert_eq!(editor.platform(), "Twitter/X");
    }

    #[test]
    fn empty_draft_cannot_be_checked() {
        let mut editor = Editor::default();
        editor.set_content("   ");
        assert_eq!(
            editor.begin_vibe_check(),
            Err(StudioError::EmptyInput("draft content"))
        );
        assert!(!editor.variations().is_loading());
    }

    #[test]
    fn variation_edits_start_from_model_output() {
        let variation = Variation::new(result("The Trendsetter"));
        assert_eq!(variation.caption, "The Trendsetter says hi");
        assert_eq!(variation.hashtags, "#one #two");
        assert_eq!(variation.hashtag_list(), vec!["#one", "#two"]);
    }

    #[test]
    fn hashtag_list_ignores_extra_whitespace() {
        let mut variation = Variation::new(result("x"));
        variation.hashtags = "  #a   #b ".to_owned();
        assert_eq!(variation.hashtag_list(), vec!["#a", "#b"]);
    }

    #[test]
    fn copy_to_editor_uses_edited_caption() {
        let mut editor = Editor::default();
        editor.set_content("original");
        let ticket = editor.begin_vibe_check().unwrap();
        editor.finish_vibe_check(ticket, vec![result("The Professional")]);

        editor
            .edit_variation(0, Some("edited caption".to_owned()), None)
            .unwrap();
        editor.copy_to_editor(0).unwrap();
        assert_eq!(editor.content(), "edited caption");
    }

    #[test]
    fn new_check_clears_previous_results() {
        let mut editor = Editor::default();
        editor.set_content("draft");
        let ticket = editor.begin_vibe_check().unwrap();
        editor.finish_vibe_check(ticket, vec![result("a"), result("b")]);
        assert_eq!(editor.variations().items().len(), 2);

        editor.begin_vibe_check().unwrap();
        assert!(editor.variations().items().is_empty());
        assert!(editor.variations().is_loading());
    }

    #[test]
    fn edit_out_of_range_is_an_error() {
        let mut editor = Editor::default();
        assert_eq!(
            editor.edit_variation(3, None, None).unwrap_err(),
            StudioError::NoSuchItem {
                kind: "variation",
                index: 3
            }
        );
    }
}
