use sparkstream_core::{
    seed_posts, Collaborator, Idea, PostStatus, Role, SocialPost, User, VibeCheckResult, ViewState,
};
use sparkstream_genai::{
    build_collaborator_prompt, build_idea_prompt, build_vibe_check_prompt, GenAi, ModelInvoker,
    Prompt,
};

use crate::collab::{CollabHub, ConnectOutcome};
use crate::editor::Editor;
use crate::error::StudioError;
use crate::post_id::PostIdGenerator;
use crate::reports::{self, AdminOverview, AnalyticsReport, DashboardSummary};
use crate::slot::{Slot, Ticket};

/// Niche the idea generator starts with.
pub const DEFAULT_IDEA_NICHE: &str = "Student Life";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// A request that has been admitted to a slot but not yet sent.
///
/// Send `prompt` to the model, then hand the decoded result back to the
/// matching `finish_*` call together with `ticket`.
#[derive(Debug, Clone)]
pub struct Pending {
    pub ticket: Ticket,
    pub prompt: Prompt,
}

#[derive(Debug)]
pub struct Studio {
    user: Option<User>,
    view: ViewState,
    posts: Vec<SocialPost>,
    editor: Editor,
    ideas: Slot<Idea>,
    idea_topic: String,
    idea_niche: String,
    collab: CollabHub,
    ids: PostIdGenerator,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl Studio {
    /// A logged-out studio holding the seed posts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: None,
            view: ViewState::Dashboard,
            posts: seed_posts(),
            editor: Editor::default(),
            ideas: Slot::default(),
            idea_topic: String::new(),
            idea_niche: DEFAULT_IDEA_NICHE.to_owned(),
            collab: CollabHub::default(),
            ids: PostIdGenerator::default(),
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Saved posts, newest first.
    #[must_use]
    pub fn posts(&self) -> &[SocialPost] {
        &self.posts
    }

    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[must_use]
    pub fn ideas(&self) -> &Slot<Idea> {
        &self.ideas
    }

    #[must_use]
    pub fn idea_topic(&self) -> &str {
        &self.idea_topic
    }

    #[must_use]
    pub fn idea_niche(&self) -> &str {
        &self.idea_niche
    }

    #[must_use]
    pub fn collab(&self) -> &CollabHub {
        &self.collab
    }

    pub fn login_guest(&mut self) -> &User {
        tracing::info!("guest session started");
        self.view = ViewState::Dashboard;
        self.user.insert(User {
            id: "1".to_owned(),
            name: "Guest Creator".to_owned(),
            role: Role::Guest,
            avatar: None,
        })
    }

    /// Simulated admin login against a fixed credential pair.
    ///
    /// # Errors
    ///
    /// [`StudioError::InvalidAdminCredentials`] for any other pair. The
    /// current session is left as it was.
    pub fn login_admin(&mut self, username: &str, password: &str) -> Result<&User, StudioError> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            tracing::warn!(username, "admin login rejected");
            return Err(StudioError::InvalidAdminCredentials);
        }
        tracing::info!("admin session started");
        self.view = ViewState::Admin;
        Ok(self.user.insert(User {
            id: "1".to_owned(),
            name: "Admin User".to_owned(),
            role: Role::Admin,
            avatar: None,
        }))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.name, "session ended");
        }
        self.view = ViewState::Dashboard;
    }

    fn require_user(&self) -> Result<&User, StudioError> {
        self.user.as_ref().ok_or(StudioError::NotLoggedIn)
    }

    /// Checks that the current user may use `view`, without switching to it.
    fn require_view(&self, view: ViewState) -> Result<(), StudioError> {
        let user = self.require_user()?;
        if view.allowed_for(user.is_admin()) {
            Ok(())
        } else {
            Err(StudioError::ViewNotAllowed(view))
        }
    }

    /// # Errors
    ///
    /// [`StudioError::NotLoggedIn`] without a session, or
    /// [`StudioError::ViewNotAllowed`] if the user's role cannot open `view`.
    pub fn navigate(&mut self, view: ViewState) -> Result<ViewState, StudioError> {
        self.require_view(view)?;
        self.view = view;
        Ok(view)
    }

    /// Clears the draft and opens the idea generator.
    ///
    /// # Errors
    ///
    /// As for [`Studio::navigate`].
    pub fn create_new(&mut self) -> Result<(), StudioError> {
        self.require_view(ViewState::Ideation)?;
        self.editor.set_content(String::new());
        self.view = ViewState::Ideation;
        Ok(())
    }

    /// Seeds the draft from the generated idea at `index` and opens the editor.
    ///
    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if there is no idea at `index`.
    pub fn select_idea(&mut self, index: usize) -> Result<&Editor, StudioError> {
        self.require_view(ViewState::Creator)?;
        let draft = self
            .ideas
            .get(index)
            .ok_or(StudioError::NoSuchItem { kind: "idea", index })?
            .as_draft();
        self.editor.set_content(draft);
        self.view = ViewState::Creator;
        Ok(&self.editor)
    }

    /// Mutable access to the editor for text, platform, and variation edits.
    ///
    /// # Errors
    ///
    /// As for [`Studio::navigate`] with [`ViewState::Creator`].
    pub fn editor_mut(&mut self) -> Result<&mut Editor, StudioError> {
        self.require_view(ViewState::Creator)?;
        Ok(&mut self.editor)
    }

    /// Saves the editor text unanalysed: score 0, no hashtags.
    ///
    /// # Errors
    ///
    /// As for [`Studio::navigate`] with [`ViewState::Creator`].
    pub fn save_original(&mut self) -> Result<&SocialPost, StudioError> {
        self.require_view(ViewState::Creator)?;
        let post = SocialPost {
            id: self.ids.next_id(),
            content: self.editor.content().to_owned(),
            platform: self.editor.platform().to_owned(),
            virality_score: 0,
            hashtags: Vec::new(),
            status: PostStatus::Draft,
            scheduled_date: None,
            image_prompt: None,
        };
        Ok(self.save_post(post))
    }

    /// Applies any pending edits to the variation at `index`, then saves it.
    ///
    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if there is no variation at `index`.
    pub fn save_variation(
        &mut self,
        index: usize,
        caption: Option<String>,
        hashtags: Option<String>,
    ) -> Result<&SocialPost, StudioError> {
        self.require_view(ViewState::Creator)?;
        let platform = self.editor.platform().to_owned();
        let variation = self.editor.edit_variation(index, caption, hashtags)?;
        let post = SocialPost {
            id: self.ids.next_id(),
            content: variation.caption.clone(),
            platform,
            virality_score: variation.result.virality_score,
            hashtags: variation.hashtag_list(),
            status: PostStatus::Draft,
            scheduled_date: None,
            image_prompt: Some(variation.result.visual_prompt.clone()),
        };
        Ok(self.save_post(post))
    }

    fn save_post(&mut self, post: SocialPost) -> &SocialPost {
        tracing::info!(
            post_id = %post.id,
            platform = %post.platform,
            virality_score = post.virality_score,
            "post saved"
        );
        self.posts.insert(0, post);
        self.view = ViewState::Dashboard;
        &self.posts[0]
    }

    /// Admits an idea request for `topic`, optionally switching niche.
    ///
    /// # Errors
    ///
    /// [`StudioError::EmptyInput`] for a blank topic; no ticket is issued.
    pub fn begin_ideas(
        &mut self,
        topic: &str,
        niche: Option<&str>,
    ) -> Result<Pending, StudioError> {
        self.require_view(ViewState::Ideation)?;
        if topic.trim().is_empty() {
            return Err(StudioError::EmptyInput("topic"));
        }
        topic.clone_into(&mut self.idea_topic);
        if let Some(niche) = niche {
            niche.clone_into(&mut self.idea_niche);
        }
        Ok(Pending {
            ticket: self.ideas.begin(),
            prompt: build_idea_prompt(&self.idea_topic, &self.idea_niche),
        })
    }

    /// Returns `true` if `ideas` were applied, `false` if superseded.
    pub fn finish_ideas(&mut self, ticket: Ticket, ideas: Vec<Idea>) -> bool {
        self.ideas.complete(ticket, ideas)
    }

    /// Runs one idea request to completion.
    ///
    /// # Errors
    ///
    /// As for [`Studio::begin_ideas`]. Model failures are not errors; they
    /// leave an empty list.
    pub async fn generate_ideas<I: ModelInvoker>(
        &mut self,
        genai: &GenAi<I>,
        topic: &str,
        niche: Option<&str>,
    ) -> Result<&[Idea], StudioError> {
        let pending = self.begin_ideas(topic, niche)?;
        let ideas = genai.generate(&pending.prompt).await;
        self.finish_ideas(pending.ticket, ideas);
        Ok(self.ideas.items())
    }

    /// Admits a vibe check of the current draft and clears old variations.
    ///
    /// # Errors
    ///
    /// [`StudioError::EmptyInput`] for a blank draft; no ticket is issued.
    pub fn begin_vibe_check(&mut self) -> Result<Pending, StudioError> {
        self.require_view(ViewState::Creator)?;
        let ticket = self.editor.begin_vibe_check()?;
        Ok(Pending {
            ticket,
            prompt: build_vibe_check_prompt(self.editor.content(), self.editor.platform()),
        })
    }

    pub fn finish_vibe_check(&mut self, ticket: Ticket, results: Vec<VibeCheckResult>) -> bool {
        self.editor.finish_vibe_check(ticket, results)
    }

    /// Runs one vibe check to completion.
    ///
    /// # Errors
    ///
    /// As for [`Studio::begin_vibe_check`].
    pub async fn vibe_check<I: ModelInvoker>(
        &mut self,
        genai: &GenAi<I>,
    ) -> Result<&Editor, StudioError> {
        let pending = self.begin_vibe_check()?;
        let results = genai.generate(&pending.prompt).await;
        self.finish_vibe_check(pending.ticket, results);
        Ok(&self.editor)
    }

    /// Admits a collaborator search, optionally switching niche. Current
    /// results stay visible until the new ones land.
    ///
    /// # Errors
    ///
    /// [`StudioError::EmptyInput`] for a blank niche; no ticket is issued.
    pub fn begin_collab_search(&mut self, niche: Option<&str>) -> Result<Pending, StudioError> {
        self.require_view(ViewState::Collab)?;
        let ticket = self.collab.begin_search(niche)?;
        Ok(Pending {
            ticket,
            prompt: build_collaborator_prompt(self.collab.niche()),
        })
    }

    pub fn finish_collab_search(&mut self, ticket: Ticket, results: Vec<Collaborator>) -> bool {
        self.collab.finish_search(ticket, results)
    }

    /// Runs one collaborator search to completion.
    ///
    /// # Errors
    ///
    /// As for [`Studio::begin_collab_search`].
    pub async fn find_collaborators<I: ModelInvoker>(
        &mut self,
        genai: &GenAi<I>,
        niche: Option<&str>,
    ) -> Result<&CollabHub, StudioError> {
        let pending = self.begin_collab_search(niche)?;
        let results = genai.generate(&pending.prompt).await;
        self.finish_collab_search(pending.ticket, results);
        Ok(&self.collab)
    }

    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if there is no collaborator at `index`.
    pub fn connect_collaborator<F>(
        &mut self,
        index: usize,
        confirm: F,
    ) -> Result<ConnectOutcome, StudioError>
    where
        F: FnOnce(&str) -> bool,
    {
        self.require_view(ViewState::Collab)?;
        self.collab.connect(index, confirm)
    }

    /// # Errors
    ///
    /// As for [`Studio::navigate`] with [`ViewState::Dashboard`].
    pub fn dashboard(&self) -> Result<DashboardSummary, StudioError> {
        self.require_view(ViewState::Dashboard)?;
        Ok(DashboardSummary::from_posts(&self.posts))
    }

    /// # Errors
    ///
    /// As for [`Studio::navigate`] with [`ViewState::Analytics`].
    pub fn analytics(&self) -> Result<AnalyticsReport, StudioError> {
        self.require_view(ViewState::Analytics)?;
        Ok(reports::analytics_report())
    }

    /// # Errors
    ///
    /// [`StudioError::ViewNotAllowed`] unless an admin is logged in.
    pub fn admin_overview(&self) -> Result<AdminOverview, StudioError> {
        self.require_view(ViewState::Admin)?;
        Ok(reports::admin_overview())
    }
}

#[cfg(test)]
#[path = "studio_test.rs"]
mod tests;
