use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::WlogError;
use crate::wlog::{
    domain::{CreateUserOutcome, User},
    repository::TopicStore,
};

/// Process-lifetime user map behind a single lock.
///
/// Nothing is persisted; dropping the last handle discards every user.
/// Compound check-then-insert operations hold the write lock for their whole
/// duration, so concurrent creators of the same user or topic cannot both win.
#[derive(Clone, Default)]
pub struct MemoryTopicStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryTopicStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl TopicStore for MemoryTopicStore {
    async fn create_user(&self, user: &str) -> CreateUserOutcome {
        let mut map = self.inner.write().await;
        if map.contains_key(user) {
            return CreateUserOutcome::AlreadyExists;
        }
        map.insert(user.to_string(), User::new(user));
        CreateUserOutcome::Created
    }

    async fn ensure_topic_creatable(&self, user: &str, topic: &str) -> Result<(), WlogError> {
        let map = self.inner.read().await;
        let entry = map.get(user).ok_or_else(|| WlogError::UserNotFound(user.to_string()))?;
        if entry.content.contains_key(topic) {
            return Err(WlogError::topic_exists(user, topic));
        }
        Ok(())
    }

    async fn create_topic(&self, user: &str, topic: &str, text: String) -> Result<(), WlogError> {
        let mut map = self.inner.write().await;
        let entry = map.get_mut(user).ok_or_else(|| WlogError::UserNotFound(user.to_string()))?;
        if entry.content.contains_key(topic) {
            return Err(WlogError::topic_exists(user, topic));
        }
        debug!(%user, %topic, len = text.len(), "topic stored");
        entry.content.insert(topic.to_string(), text);
        Ok(())
    }

    async fn get_topic(&self, user: &str, topic: &str) -> Result<String, WlogError> {
        let map = self.inner.read().await;
        let entry = map.get(user).ok_or_else(|| WlogError::UserNotFound(user.to_string()))?;
        entry
            .content
            .get(topic)
            .cloned()
            .ok_or_else(|| WlogError::topic_not_found(user, topic))
    }

    async fn list_topics(&self, user: &str) -> Result<Vec<String>, WlogError> {
        let map = self.inner.read().await;
        let entry = map.get(user).ok_or_else(|| WlogError::UserNotFound(user.to_string()))?;
        Ok(entry.content.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_user_once_then_noop() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();
        assert_eq!(store.create_user("alice").await, CreateUserOutcome::Created);
        store.create_topic("alice", "todo", "buy milk".into()).await?;

        assert_eq!(store.create_user("alice").await, CreateUserOutcome::AlreadyExists);
        // re-creating must not wipe existing topics
        assert_eq!(store.get_topic("alice", "todo").await?, "buy milk");
        assert_eq!(store.list_topics("alice").await?, vec!["todo"]);
        Ok(())
    }

    #[tokio::test]
    async fn fresh_user_lists_nothing() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();
        store.create_user("u").await;
        assert!(store.list_topics("u").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_rejected_everywhere() {
        let store = MemoryTopicStore::new();
        let missing = WlogError::UserNotFound("ghost".into());
        assert_eq!(store.list_topics("ghost").await.unwrap_err(), missing);
        assert_eq!(store.get_topic("ghost", "t").await.unwrap_err(), missing);
        assert_eq!(store.ensure_topic_creatable("ghost", "t").await.unwrap_err(), missing);
        assert_eq!(store.create_topic("ghost", "t", "x".into()).await.unwrap_err(), missing);
    }

    #[tokio::test]
    async fn topics_are_write_once() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();
        store.create_user("u").await;
        store.ensure_topic_creatable("u", "t").await?;
        store.create_topic("u", "t", "a".into()).await?;

        let err = store.create_topic("u", "t", "b".into()).await.unwrap_err();
        assert_eq!(err, WlogError::topic_exists("u", "t"));
        assert_eq!(store.ensure_topic_creatable("u", "t").await.unwrap_err().kind(), "topic_exists");
        assert_eq!(store.get_topic("u", "t").await?, "a");
        Ok(())
    }

    #[tokio::test]
    async fn missing_topic_under_known_user() {
        let store = MemoryTopicStore::new();
        store.create_user("alice").await;
        let err = store.get_topic("alice", "groceries").await.unwrap_err();
        assert_eq!(err, WlogError::topic_not_found("alice", "groceries"));
    }

    #[tokio::test]
    async fn listing_reflects_created_topics() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();
        store.create_user("u").await;
        for t in ["a", "b", "c"] {
            store.create_topic("u", t, t.to_uppercase()).await?;
        }
        let mut topics = store.list_topics("u").await?;
        topics.sort();
        assert_eq!(topics, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn users_do_not_share_topics() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();
        store.create_user("alice").await;
        store.create_user("bob").await;
        store.create_topic("alice", "t", "mine".into()).await?;
        assert!(store.list_topics("bob").await?.is_empty());
        store.create_topic("bob", "t", "yours".into()).await?;
        assert_eq!(store.get_topic("alice", "t").await?, "mine");
        assert_eq!(store.get_topic("bob", "t").await?, "yours");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creators_have_one_winner() -> Result<(), anyhow::Error> {
        let store = MemoryTopicStore::new();

        let mut users = Vec::new();
        for _ in 0..16 {
            let s = Arc::clone(&store);
            users.push(tokio::spawn(async move { s.create_user("race").await }));
        }
        let mut created = 0;
        for h in users {
            if h.await? == CreateUserOutcome::Created {
                created += 1;
            }
        }
        assert_eq!(created, 1);

        let mut topics = Vec::new();
        for i in 0..16 {
            let s = Arc::clone(&store);
            topics.push(tokio::spawn(async move { s.create_topic("race", "t", format!("v{i}")).await }));
        }
        let mut ok = 0;
        for h in topics {
            if h.await?.is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.list_topics("race").await?, vec!["t"]);
        Ok(())
    }
}
