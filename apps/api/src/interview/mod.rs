// Interview flow: question generation, answer scoring, final summary.
// Every language-model call goes through llm_client and has a deterministic fallback,
// except batch generation which reports failure so the client can go one by one.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod questions;
pub mod scoring;
pub mod summary;
