use std::sync::Arc;

use crate::features::chat::models::Intent;
use crate::features::chat::services::response_composer;
use crate::features::chat::services::IntentClassifier;
use crate::features::offices::OfficeDirectory;

/// Classified intent plus the reply text
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub intent: Intent,
    pub response: String,
}

/// Routes a chat message to the capability it asks about
pub struct ChatService {
    classifier: IntentClassifier,
    directory: Arc<OfficeDirectory>,
}

impl ChatService {
    pub fn new(classifier: IntentClassifier, directory: Arc<OfficeDirectory>) -> Self {
        Self {
            classifier,
            directory,
        }
    }

    pub fn reply(&self, message: &str) -> ChatReply {
        let intent = self.classifier.classify(message);
        tracing::debug!("Chat message classified as {}", intent);

        ChatReply {
            intent,
            response: response_composer::compose(intent, self.directory.len()),
        }
    }
}
