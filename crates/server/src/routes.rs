//! JSON API routes for the funding toolset and the conversational agent.
//!
//! Endpoints:
//! - `GET  /`: welcome banner
//! - `POST /tools/{tool}`: invoke one registered tool with a JSON payload
//! - `POST /agent/invoke`: run one conversational turn with optional history

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fundline_agent::{AgentRuntime, ChatMessage, ChatRole};
use fundline_core::errors::InterfaceError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    runtime: Arc<AgentRuntime>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub correlation_id: String,
}

impl ApiError {
    fn from_interface(error: InterfaceError) -> Self {
        Self {
            message: error.user_message().to_string(),
            correlation_id: error.correlation_id().to_string(),
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AgentInvokeRequest {
    pub input: String,
    #[serde(default)]
    pub history: Vec<WireMessage>,
}

/// History entries as clients send them; `role` and `type` are both
/// accepted and anything that is not a user role becomes assistant text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireMessage {
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: String,
}

impl WireMessage {
    fn into_chat_message(self) -> ChatMessage {
        let role = self.role.or(self.kind).unwrap_or_else(|| "user".to_string());
        ChatMessage { role: ChatRole::from_wire(&role), content: self.content }
    }
}

#[derive(Debug, Serialize)]
pub struct AgentInvokeResponse {
    pub content: String,
}

pub fn router(runtime: Arc<AgentRuntime>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/tools/{tool}", post(invoke_tool))
        .route("/agent/invoke", post(agent_invoke))
        .with_state(ApiState { runtime })
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Scholarship Ball Agent API!" }))
}

async fn invoke_tool(
    State(state): State<ApiState>,
    Path(tool): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<ApiError>)> {
    let correlation_id = Uuid::new_v4().to_string();
    info!(
        event_name = "api.tool.invoked",
        tool = %tool,
        correlation_id = %correlation_id,
        "tool invocation received"
    );

    match state.runtime.registry().execute(&tool, payload).await {
        Ok(output) => Ok(Json(output)),
        Err(error) => {
            warn!(
                event_name = "api.tool.rejected",
                tool = %tool,
                correlation_id = %correlation_id,
                error = %error,
                "tool invocation rejected"
            );
            let interface =
                InterfaceError::BadRequest { message: error.to_string(), correlation_id };
            Err((StatusCode::BAD_REQUEST, Json(ApiError::from_interface(interface))))
        }
    }
}

async fn agent_invoke(
    State(state): State<ApiState>,
    Json(request): Json<AgentInvokeRequest>,
) -> Json<AgentInvokeResponse> {
    let correlation_id = Uuid::new_v4().to_string();
    info!(
        event_name = "api.agent.invoked",
        correlation_id = %correlation_id,
        history_len = request.history.len(),
        "agent turn received"
    );

    let history: Vec<ChatMessage> =
        request.history.into_iter().map(WireMessage::into_chat_message).collect();
    let content = state.runtime.handle_message(&request.input, &history).await;

    Json(AgentInvokeResponse { content })
}
