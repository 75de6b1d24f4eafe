//! Plenário Topics — keyword scoring over proposal summaries (ementas).

pub mod categories;
pub mod classify;

pub use categories::{TopicCategory, TOPIC_CATEGORIES};
pub use classify::{categorize, normalize, primary_topic, TopicMatch};
