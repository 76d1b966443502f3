//! Instruction and schema construction for the three AI features.
//!
//! Builders are pure: any input, including an empty string, produces a
//! usable prompt. Gating empty topics or niches is the caller's job. Caller
//! text is interpolated verbatim with no escaping.

use sparkstream_core::{Collaborator, Difficulty, Idea, Tier, VibeCheckResult, PERSONAS};

use crate::decode::Shape;
use crate::schema::Schema;

/// A rendered request: natural-language instruction plus response schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub instruction: String,
    pub schema: Schema,
}

impl Shape for Idea {
    const NAME: &'static str = "Idea";

    fn item_schema() -> Schema {
        Schema::object(vec![
            ("title", Schema::string()),
            ("description", Schema::string()),
            (
                "difficulty",
                Schema::string_enum(&Difficulty::ALL.map(Difficulty::as_str)),
            ),
        ])
    }
}

impl Shape for VibeCheckResult {
    const NAME: &'static str = "VibeCheckResult";

    fn item_schema() -> Schema {
        Schema::object(vec![
            ("persona", Schema::string()),
            ("optimizedCaption", Schema::string()),
            ("viralityScore", Schema::integer()),
            ("sentiment", Schema::string()),
            ("tone", Schema::string()),
            ("constructiveFeedback", Schema::string()),
            ("suggestedHashtags", Schema::array_of(Schema::string())),
            ("visualPrompt", Schema::string()),
        ])
    }
}

impl Shape for Collaborator {
    const NAME: &'static str = "Collaborator";

    fn item_schema() -> Schema {
        Schema::object(vec![
            ("id", Schema::string()),
            ("name", Schema::string()),
            ("handle", Schema::string()),
            ("niche", Schema::string()),
            ("followerCount", Schema::string()),
            ("engagementRate", Schema::string()),
            ("matchScore", Schema::integer()),
            ("reason", Schema::string()),
            ("collabIdea", Schema::string()),
            ("tier", Schema::string_enum(&Tier::ALL.map(Tier::as_str))),
            ("price", Schema::number()),
        ])
    }
}

/// Prompt for four post ideas on `topic` aimed at `audience_niche`.
#[must_use]
pub fn build_idea_prompt(topic: &str, audience_niche: &str) -> Prompt {
    let instruction = format!(
        "Generate 4 creative social media post ideas for a student creator.\n\
         Topic: {topic}.\n\
         Niche/Audience: {audience_niche}.\n\
         Return a JSON array of objects with title, description, and difficulty (Easy/Medium/Hard)."
    );
    Prompt {
        instruction,
        schema: Idea::response_schema(),
    }
}

/// Prompt for three persona rewrites of `draft_content` for `platform`.
#[must_use]
pub fn build_vibe_check_prompt(draft_content: &str, platform: &str) -> Prompt {
    let [trendsetter, bestie, professional] = PERSONAS;
    let instruction = format!(
        "Act as a Gen Z social media expert. Analyze this draft content for {platform} and \
         generate 3 distinct persona variations:\n\
         1. \"{trendsetter}\" (High virality, trendy slang, hooks)\n\
         2. \"{bestie}\" (Authentic, vulnerable, chill)\n\
         3. \"{professional}\" (Polished, clear value, informative)\n\
         \n\
         Draft: \"{draft_content}\"\n\
         \n\
         For each persona, return a JSON object with:\n\
         1. persona (the name of the persona)\n\
         2. optimizedCaption (the draft rewritten to match this persona and platform)\n\
         3. viralityScore (integer from 0 to 100)\n\
         4. sentiment (string)\n\
         5. tone (string)\n\
         6. constructiveFeedback (one sentence on why this works)\n\
         7. suggestedHashtags (array of strings)\n\
         8. visualPrompt (a creative AI image generation prompt matching this vibe)"
    );
    Prompt {
        instruction,
        schema: VibeCheckResult::response_schema(),
    }
}

/// Prompt for four fictional collaborator profiles in `niche`.
#[must_use]
pub fn build_collaborator_prompt(niche: &str) -> Prompt {
    let instruction = format!(
        "Generate 4 fictional social media creator profiles for a collaboration match in the \
         \"{niche}\" niche.\n\
         \n\
         Mix:\n\
         - 2 \"Micro\" creators (Free to collaborate, smaller following)\n\
         - 2 \"Macro\" creators (Paid tier, larger following)\n\
         \n\
         For each collaborator, generate:\n\
         1. name and handle\n\
         2. niche\n\
         3. followerCount (e.g. \"12.5k\" or \"250k\")\n\
         4. engagementRate (e.g. \"8.2%\")\n\
         5. matchScore (integer 80-99)\n\
         6. reason (why they match)\n\
         7. collabIdea (a video idea)\n\
         8. tier (one of \"Free\", \"Paid\", \"Premium\")\n\
         9. price (integer: 0 for Free, 50-500 for Paid/Premium)\n\
         \n\
         Return a JSON array."
    );
    Prompt {
        instruction,
        schema: Collaborator::response_schema(),
    }
}
