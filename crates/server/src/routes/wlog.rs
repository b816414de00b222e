use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use service::wlog::domain::{decode_topic_msg, CreateUserOutcome, TopicListMsg, TopicMsg};

use crate::errors::ApiError;
use crate::observability::{TOPICS_CREATED_TOTAL, USERS_CREATED_TOTAL};
use crate::state::ServerState;

/// `POST /wlog/:user`: 201 when created, 200 when the user already existed.
pub async fn create_user(State(state): State<ServerState>, Path(user): Path<String>) -> StatusCode {
    match state.store.create_user(&user).await {
        CreateUserOutcome::Created => {
            USERS_CREATED_TOTAL.inc();
            info!(event = "user_created", %user, "created user content");
            StatusCode::CREATED
        }
        CreateUserOutcome::AlreadyExists => {
            info!(event = "user_exists", %user, "user was already created");
            StatusCode::OK
        }
    }
}

/// `GET /wlog/:user`
pub async fn list_topics(
    State(state): State<ServerState>,
    Path(user): Path<String>,
) -> Result<Json<TopicListMsg>, ApiError> {
    let topics = state.store.list_topics(&user).await?;
    Ok(Json(TopicListMsg { topics }))
}

/// `POST /wlog/:user/:topic` with `{"text": ...}`.
///
/// Existence is checked before the body is decoded; the insert itself
/// re-checks under the store's write lock.
pub async fn create_topic(
    State(state): State<ServerState>,
    Path((user, topic)): Path<(String, String)>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    state.store.ensure_topic_creatable(&user, &topic).await?;

    let msg = decode_topic_msg(&body).map_err(|e| {
        warn!(event = "body_decode_failed", %user, %topic, error = %e, "cannot decode topic body");
        e
    })?;

    state.store.create_topic(&user, &topic, msg.text).await?;
    TOPICS_CREATED_TOTAL.inc();
    info!(event = "topic_created", %user, %topic, "created topic");
    Ok(StatusCode::CREATED)
}

/// `GET /wlog/:user/:topic`
pub async fn get_topic(
    State(state): State<ServerState>,
    Path((user, topic)): Path<(String, String)>,
) -> Result<Json<TopicMsg>, ApiError> {
    let text = state.store.get_topic(&user, &topic).await?;
    Ok(Json(TopicMsg { text }))
}
