use thiserror::Error;

/// Domain failures of the web log. Transport mapping lives in the server crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WlogError {
    #[error("user {0:?} does not exist")]
    UserNotFound(String),
    #[error("topic {topic:?} does not exist for user {user:?}")]
    TopicNotFound { user: String, topic: String },
    #[error("topic {topic:?} already exists for user {user:?}")]
    TopicExists { user: String, topic: String },
    #[error("malformed topic body: {0}")]
    BadBody(String),
}

impl WlogError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            WlogError::UserNotFound(_) => "user_not_found",
            WlogError::TopicNotFound { .. } => "topic_not_found",
            WlogError::TopicExists { .. } => "topic_exists",
            WlogError::BadBody(_) => "bad_body",
        }
    }

    pub fn topic_exists(user: &str, topic: &str) -> Self {
        Self::TopicExists { user: user.to_string(), topic: topic.to_string() }
    }

    pub fn topic_not_found(user: &str, topic: &str) -> Self {
        Self::TopicNotFound { user: user.to_string(), topic: topic.to_string() }
    }
}
