//! AI-access layer for `SparkStream`.
//!
//! Three pieces, leaf first:
//!
//! - [`prompt`] renders an instruction plus a response [`Schema`] for each use
//!   case (ideas, vibe check, collaborator matching).
//! - [`GeminiClient`] submits one prompt to the Gemini `generateContent`
//!   endpoint and returns the raw reply text. It implements [`ModelInvoker`],
//!   the seam the rest of the workspace is generic over.
//! - [`decode`] turns reply text into typed records, rejecting anything that
//!   does not match the requested shape as a whole.
//!
//! [`GenAi`] ties them together behind the contract the UI relies on: each
//! operation returns a list and never fails. Failures are logged with a
//! [`FailureReason`] and collapse to an empty list.

pub mod client;
pub mod decode;
pub mod error;
pub mod ops;
pub mod prompt;
pub mod schema;
pub mod types;

pub use client::{GeminiClient, ModelInvoker};
pub use decode::{decode, Shape};
pub use error::{FailureReason, GenaiError};
pub use ops::GenAi;
pub use prompt::{build_collaborator_prompt, build_idea_prompt, build_vibe_check_prompt, Prompt};
pub use schema::{Schema, SchemaType};
