use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use fundline_agent::AgentRuntime;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    runtime: Arc<AgentRuntime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub agent: HealthCheck,
    pub checked_at: String,
}

pub fn router(runtime: Arc<AgentRuntime>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { runtime })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let agent = agent_check(&state.runtime);
    let ready = agent.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "fundline-server runtime initialized".to_string(),
        },
        agent,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn agent_check(runtime: &AgentRuntime) -> HealthCheck {
    let tool_count = runtime.registry().len();
    if tool_count == 0 {
        HealthCheck { status: "degraded", detail: "no tools registered".to_string() }
    } else {
        HealthCheck { status: "ready", detail: format!("{tool_count} tools registered") }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use fundline_agent::{AgentProfile, AgentRuntime};
    use fundline_core::clock::SystemClock;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_returns_ready_with_a_populated_registry() {
        let runtime = Arc::new(AgentRuntime::new(AgentProfile::default(), Arc::new(SystemClock)));

        let (status, Json(payload)) = health(State(HealthState { runtime })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert!(payload.agent.detail.contains("tools registered"));
    }
}
