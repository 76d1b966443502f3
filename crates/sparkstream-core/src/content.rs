use serde::{Deserialize, Serialize};

/// The three rewriting personas a vibe check asks the model for, in order.
pub const PERSONAS: [&str; 3] = ["The Trendsetter", "The Relatable Bestie", "The Professional"];

/// Platforms the content editor offers. The first entry is the default.
pub const PLATFORMS: [&str; 4] = ["Instagram", "TikTok", "Twitter/X", "LinkedIn"];

/// Effort level the model assigns to a generated [`Idea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated post idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
}

impl Idea {
    /// Text used to seed the content editor when this idea is picked.
    #[must_use]
    pub fn as_draft(&self) -> String {
        format!("{}\n\n{}", self.title, self.description)
    }
}

/// One persona-styled rewrite of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeCheckResult {
    pub persona: String,
    pub optimized_caption: String,
    /// Requested as 0–100; passed through as returned.
    pub virality_score: i32,
    pub sentiment: String,
    pub tone: String,
    pub constructive_feedback: String,
    pub suggested_hashtags: Vec<String>,
    pub visual_prompt: String,
}

/// Pricing category gating whether connecting requires a (simulated) payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Free,
    Paid,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Paid, Tier::Premium];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Paid => "Paid",
            Tier::Premium => "Premium",
        }
    }

    #[must_use]
    pub fn requires_payment(self) -> bool {
        !matches!(self, Tier::Free)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fictional creator profile suggested as a collaboration match.
///
/// `follower_count` and `engagement_rate` are display strings such as
/// `"12.5k"` and `"8.2%"`; they are not guaranteed to parse as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    /// The model is not asked for an id, so this is frequently empty.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub handle: String,
    pub niche: String,
    pub follower_count: String,
    pub engagement_rate: String,
    /// Requested as 80–99; passed through as returned.
    pub match_score: i32,
    pub reason: String,
    pub collab_idea: String,
    pub tier: Tier,
    /// Connection fee in USD. Requested as 0 for [`Tier::Free`].
    pub price: f64,
}

impl Collaborator {
    /// Key used to remember that a collaborator was connected: the id, or the
    /// name when the model left the id blank.
    #[must_use]
    pub fn connection_key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Scheduled,
    Posted,
}

/// A saved post. Created by the editor, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub content: String,
    pub platform: String,
    pub virality_score: i32,
    pub hashtags: Vec<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// Posts a fresh session starts with.
#[must_use]
pub fn seed_posts() -> Vec<SocialPost> {
    vec![
        SocialPost {
            id: "1".to_string(),
            content: "Study tip: Don't just read, teach it to a rubber duck! \u{1f986} #StudyHacks"
                .to_string(),
            platform: "Instagram".to_string(),
            virality_score: 85,
            hashtags: vec![
                "#StudyHacks".to_string(),
                "#StudentLife".to_string(),
                "#Productivity".to_string(),
            ],
            status: PostStatus::Posted,
            scheduled_date: Some("2023-10-25".to_string()),
            image_prompt: None,
        },
        SocialPost {
            id: "2".to_string(),
            content: "Pov: You have an assignment due at 11:59pm and it's 11:58pm. \u{1fae0}"
                .to_string(),
            platform: "TikTok".to_string(),
            virality_score: 92,
            hashtags: vec![
                "#StudentProblems".to_string(),
                "#CollegeLife".to_string(),
                "#Relatable".to_string(),
            ],
            status: PostStatus::Scheduled,
            scheduled_date: Some("2023-11-02".to_string()),
            image_prompt: None,
        },
    ]
}
