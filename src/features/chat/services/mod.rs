mod chat_service;
mod intent_classifier;
pub mod response_composer;

pub use chat_service::{ChatReply, ChatService};
pub use intent_classifier::{IntentClassifier, IntentRule};
