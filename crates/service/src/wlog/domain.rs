use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::WlogError;

/// Topic name to topic text.
pub type UserContent = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct User {
    pub name: String,
    pub content: UserContent,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), content: UserContent::new() }
    }
}

/// Body of create-topic and response of get-topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMsg {
    pub text: String,
}

/// Response of list-topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicListMsg {
    pub topics: Vec<String>,
}

/// Result of a create-user call; re-creating an existing user changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created,
    AlreadyExists,
}

/// Decode a create-topic body. The `text` field is required.
///
/// Only the first JSON value is read; whatever follows it is ignored.
pub fn decode_topic_msg(body: &[u8]) -> Result<TopicMsg, WlogError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<TopicMsg>().next() {
        Some(Ok(msg)) => Ok(msg),
        Some(Err(e)) => Err(WlogError::BadBody(e.to_string())),
        None => Err(WlogError::BadBody("empty body".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_text_and_ignores_extra_fields() {
        let msg = decode_topic_msg(br#"{"text":"buy milk","mood":"ok"}"#).unwrap();
        assert_eq!(msg.text, "buy milk");
    }

    #[test]
    fn decode_rejects_missing_text() {
        let err = decode_topic_msg(br#"{"body":"x"}"#).unwrap_err();
        assert_eq!(err.kind(), "bad_body");
    }

    #[test]
    fn decode_rejects_non_json_and_wrong_type() {
        assert!(matches!(decode_topic_msg(b"not json"), Err(WlogError::BadBody(_))));
        assert!(matches!(decode_topic_msg(br#"{"text":42}"#), Err(WlogError::BadBody(_))));
        assert!(matches!(decode_topic_msg(b""), Err(WlogError::BadBody(_))));
        assert!(matches!(decode_topic_msg(b"  \n"), Err(WlogError::BadBody(_))));
    }

    #[test]
    fn decode_stops_after_first_value() {
        let msg = decode_topic_msg(br#"{"text":"a"} junk"#).unwrap();
        assert_eq!(msg.text, "a");
        let msg = decode_topic_msg(b"{\"text\":\"first\"}\n{\"text\":\"second\"}").unwrap();
        assert_eq!(msg.text, "first");
    }

    #[test]
    fn list_msg_wire_shape() {
        let body = serde_json::to_string(&TopicListMsg { topics: vec![] }).unwrap();
        assert_eq!(body, r#"{"topics":[]}"#);
    }
}
