//! Shared domain records and process configuration for `SparkStream`.
//!
//! The records here are the shapes that cross the AI boundary ([`Idea`],
//! [`VibeCheckResult`], [`Collaborator`]) plus the locally created
//! [`SocialPost`] drafts and the simulated session types.

mod app_config;
mod config;
mod content;
mod session;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use content::{
    seed_posts, Collaborator, Difficulty, Idea, PostStatus, SocialPost, Tier, VibeCheckResult,
    PERSONAS, PLATFORMS,
};
pub use session::{Role, User, ViewState};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
