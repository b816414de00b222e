use async_trait::async_trait;

use super::domain::CreateUserOutcome;
use crate::errors::WlogError;

/// Storage seam for users and their topics.
/// Each method is atomic with respect to the others on the same store.
#[async_trait]
pub trait TopicStore: Send + Sync {
    async fn create_user(&self, user: &str) -> CreateUserOutcome;

    /// Fails with `UserNotFound` or `TopicExists` when a create would be rejected.
    async fn ensure_topic_creatable(&self, user: &str, topic: &str) -> Result<(), WlogError>;

    /// Insert a new topic; never overwrites an existing one.
    async fn create_topic(&self, user: &str, topic: &str, text: String) -> Result<(), WlogError>;

    async fn get_topic(&self, user: &str, topic: &str) -> Result<String, WlogError>;

    /// Topic names in unspecified order.
    async fn list_topics(&self, user: &str) -> Result<Vec<String>, WlogError>;
}
