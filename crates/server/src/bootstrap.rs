use std::sync::Arc;

use fundline_agent::{AgentProfile, AgentRuntime};
use fundline_core::clock::SystemClock;
use fundline_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub runtime: Arc<AgentRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let profile = AgentProfile {
        organization: config.agent.organization.clone(),
        mission_statement: config.agent.mission_statement.clone(),
        event_name: config.agent.event_name.clone(),
        max_steps: config.agent.max_steps,
        ..AgentProfile::default()
    };
    let runtime = Arc::new(AgentRuntime::new(profile, Arc::new(SystemClock)));

    info!(
        event_name = "system.bootstrap.agent_ready",
        correlation_id = "bootstrap",
        tool_count = runtime.registry().len(),
        "agent runtime initialized"
    );

    Ok(Application { config, runtime })
}

#[cfg(test)]
mod tests {
    use fundline_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::bootstrap;

    #[test]
    fn bootstrap_wires_the_agent_from_config() {
        let app = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                organization: Some("Horizon Scholars Fund".to_string()),
                event_name: Some("Spring Gala".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("bootstrap should succeed with valid overrides");

        assert_eq!(app.runtime.profile().organization, "Horizon Scholars Fund");
        assert_eq!(app.runtime.profile().event_name, "Spring Gala");
        assert!(!app.runtime.registry().is_empty());
    }

    #[test]
    fn bootstrap_fails_fast_on_invalid_config() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                organization: Some("   ".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        let message = result.err().expect("validation error").to_string();
        assert!(message.contains("agent.organization"));
    }
}
