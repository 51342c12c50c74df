use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use fundline_core::audit::{AuditEntry, AuditSink, InMemoryAuditSink};
use fundline_core::cache::MemoryCache;
use fundline_core::clock::Clock;
use fundline_core::fixtures;

use crate::conversation::{self, AgentIntent, ChatMessage, ChatRole, IntentExtractor};
use crate::tools::{
    ApplicationOutlineTool, AuditLogTool, CacheTool, DashboardSummaryTool, DataImportTool,
    DepositTrackerTool, DonorProspectTool, FunderReportTool, GrantSearchTool, OutreachLetterTool,
    TaskReminderTool, ToolRegistry,
};

/// Identity and limits the runtime operates under.
#[derive(Clone, Debug)]
pub struct AgentProfile {
    pub organization: String,
    pub mission_statement: String,
    pub event_name: String,
    pub region: String,
    pub max_steps: u32,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            organization: "Women's Leadership Initiative".to_string(),
            mission_statement:
                "Empowering undergraduate women through leadership scholarships in New York State"
                    .to_string(),
            event_name: "Annual Scholarship Ball 2026".to_string(),
            region: "NY, USA".to_string(),
            max_steps: 8,
        }
    }
}

/// Orchestrates one conversational turn: extract intent, run a bounded
/// plan of tool calls, and render a single assistant reply.
///
/// Tool failures never escape as errors; they are folded into the reply
/// so the conversation can continue.
pub struct AgentRuntime {
    profile: AgentProfile,
    extractor: IntentExtractor,
    registry: ToolRegistry,
    audit: Arc<InMemoryAuditSink>,
}

impl AgentRuntime {
    pub fn new(profile: AgentProfile, clock: Arc<dyn Clock>) -> Self {
        let audit = Arc::new(InMemoryAuditSink::default());
        let cache = Arc::new(MemoryCache::new());

        let mut registry = ToolRegistry::default();
        registry.register(GrantSearchTool::new(clock.clone()));
        registry.register(DonorProspectTool::new(clock.clone()));
        registry.register(DepositTrackerTool);
        registry.register(OutreachLetterTool::new(
            profile.mission_statement.clone(),
            profile.event_name.clone(),
        ));
        registry.register(DashboardSummaryTool);
        registry.register(ApplicationOutlineTool);
        registry.register(FunderReportTool);
        registry.register(TaskReminderTool::new(clock));
        registry.register(DataImportTool);
        registry.register(CacheTool::new(cache));
        registry.register(AuditLogTool::new(audit.clone()));

        Self { profile, extractor: IntentExtractor::new(), registry, audit }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Audit trail of every tool call the runtime has made.
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit.entries()
    }

    pub async fn handle_message(&self, input: &str, history: &[ChatMessage]) -> String {
        let intent = self.extractor.extract(input);
        match self.run_plan(intent, history).await {
            Ok(reply) => reply,
            Err(error) => format!(
                "Error: {error}\n\nPlease try rephrasing your request or provide more \
                 specific details."
            ),
        }
    }

    async fn run_plan(&self, intent: AgentIntent, history: &[ChatMessage]) -> Result<String> {
        let mut budget = StepBudget::new(self.profile.max_steps);

        match intent {
            AgentIntent::DiscoverOpportunities { keywords, max_results } => {
                let keywords = if keywords.is_empty() { default_keywords() } else { keywords };
                let opportunities = self
                    .call(
                        "grant_search",
                        json!({
                            "mission_keywords": keywords,
                            "region": self.profile.region,
                            "max_results": max_results,
                        }),
                        &mut budget,
                    )
                    .await?;

                Ok(format!(
                    "Here are {max_results} simulated funding opportunities aligned with our \
                     mission:\n\n{}",
                    pretty(&opportunities)?
                ))
            }
            AgentIntent::RankProspects { top_n } => {
                let ranked = self
                    .call(
                        "donor_prospect",
                        json!({
                            "past_donors": fixtures::sample_donors(),
                            "region": self.profile.region,
                            "top_n": top_n,
                        }),
                        &mut budget,
                    )
                    .await?;

                Ok(format!(
                    "Top donor and sponsorship prospects (simulated records, highest \
                     potential first):\n\n{}",
                    pretty(&ranked)?
                ))
            }
            AgentIntent::TrackAward { award_id, action } => {
                let award_id = award_id.or_else(|| award_id_from_history(history));
                let Some(award_id) = award_id else {
                    return Ok(
                        "Which award should I update? Please include the award id \
                         (for example AWD-001)."
                            .to_string(),
                    );
                };

                let transition = self
                    .call(
                        "deposit_tracker",
                        json!({ "award_id": award_id, "action": action }),
                        &mut budget,
                    )
                    .await?;

                Ok(format!("Award update recorded:\n\n{}", pretty(&transition)?))
            }
            AgentIntent::ComposeOutreach { sponsorship_tier } => {
                let ranked = self
                    .call(
                        "donor_prospect",
                        json!({
                            "past_donors": fixtures::sample_donors(),
                            "top_n": 1,
                        }),
                        &mut budget,
                    )
                    .await?;
                let prospect = ranked
                    .as_array()
                    .and_then(|prospects| prospects.first())
                    .cloned()
                    .ok_or_else(|| anyhow!("no prospects available for outreach"))?;

                let letter = self
                    .call(
                        "generate_outreach_letter",
                        json!({
                            "prospect": prospect,
                            "sponsorship_tier": sponsorship_tier,
                        }),
                        &mut budget,
                    )
                    .await?;

                Ok(format!(
                    "Draft outreach letter for our highest-potential prospect:\n\n{}",
                    letter.as_str().unwrap_or_default()
                ))
            }
            AgentIntent::Summarize => {
                let opportunities = self
                    .call(
                        "grant_search",
                        json!({
                            "mission_keywords": default_keywords(),
                            "region": self.profile.region,
                            "max_results": 5,
                        }),
                        &mut budget,
                    )
                    .await?;
                let prospects = self
                    .call(
                        "donor_prospect",
                        json!({
                            "past_donors": fixtures::sample_donors(),
                            "top_n": 3,
                        }),
                        &mut budget,
                    )
                    .await?;
                let summary = self
                    .call(
                        "dashboard_summary",
                        json!({
                            "opportunities": opportunities,
                            "donor_prospects": prospects,
                            "event_projection": fixtures::sample_projection(),
                        }),
                        &mut budget,
                    )
                    .await?;

                Ok(summary.as_str().unwrap_or_default().to_string())
            }
            AgentIntent::Clarify { prompt } => Ok(prompt),
        }
    }

    async fn call(&self, tool: &str, input: Value, budget: &mut StepBudget) -> Result<Value> {
        budget.charge(tool)?;
        self.audit.record(
            AuditEntry::new(&self.profile.organization, format!("agent.tool_call.{tool}"))
                .with_detail("step", budget.used.to_string()),
        );
        self.registry.execute(tool, input).await
    }
}

fn default_keywords() -> Vec<String> {
    [
        "women's leadership",
        "undergraduate scholarships",
        "community service",
        "regional grants",
    ]
    .iter()
    .map(|keyword| (*keyword).to_string())
    .collect()
}

fn award_id_from_history(history: &[ChatMessage]) -> Option<String> {
    history
        .iter()
        .rev()
        .filter(|message| message.role == ChatRole::User)
        .find_map(|message| conversation::find_award_id(&message.content))
}

fn pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

struct StepBudget {
    limit: u32,
    used: u32,
}

impl StepBudget {
    fn new(limit: u32) -> Self {
        Self { limit, used: 0 }
    }

    fn charge(&mut self, tool: &str) -> Result<()> {
        if self.used >= self.limit {
            return Err(anyhow!(
                "step budget of {} exhausted before calling `{tool}`",
                self.limit
            ));
        }
        self.used += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fundline_core::clock::FixedClock;

    use crate::conversation::ChatMessage;

    use super::{AgentProfile, AgentRuntime};

    fn runtime() -> AgentRuntime {
        AgentRuntime::new(AgentProfile::default(), Arc::new(FixedClock::from_ymd(2026, 8, 25)))
    }

    #[tokio::test]
    async fn summarize_renders_the_dashboard() {
        let reply = runtime().handle_message("show the funding pipeline dashboard", &[]).await;
        assert!(reply.contains("Funding Pipeline Summary:"));
        assert!(reply.contains("Gap: $35,000"));
        assert!(reply.contains("TechCorp Inc."));
    }

    #[tokio::test]
    async fn award_updates_carry_the_id_from_the_message() {
        let reply = runtime().handle_message("record the deposit for award AWD-001", &[]).await;
        assert!(reply.contains("\"status\": \"Deposit Recorded\""));
        assert!(reply.contains("AWD-001"));
    }

    #[tokio::test]
    async fn award_updates_fall_back_to_history_for_the_id() {
        let history = vec![
            ChatMessage::user("register award AWD-077 for the spring grant"),
            ChatMessage::assistant("Done."),
        ];
        let reply = runtime().handle_message("now record the deposit", &history).await;
        assert!(reply.contains("AWD-077"));
    }

    #[tokio::test]
    async fn award_updates_without_any_id_ask_for_one() {
        let reply = runtime().handle_message("record the deposit", &[]).await;
        assert!(reply.contains("award id"));
    }

    #[tokio::test]
    async fn outreach_targets_the_highest_potential_prospect() {
        let reply = runtime().handle_message("draft a platinum outreach letter", &[]).await;
        assert!(reply.contains("Dear TechCorp Inc.,"));
        assert!(reply.contains("Platinum Sponsor"));
    }

    #[tokio::test]
    async fn unrelated_requests_get_the_standing_prompt() {
        let reply = runtime().handle_message("hello there", &[]).await;
        assert!(reply.contains("discover funding opportunities"));
    }

    #[tokio::test]
    async fn exhausted_step_budget_is_reported_not_panicked() {
        let profile = AgentProfile { max_steps: 1, ..AgentProfile::default() };
        let runtime =
            AgentRuntime::new(profile, Arc::new(FixedClock::from_ymd(2026, 8, 25)));

        // Summarize needs three tool calls, so a budget of one must fail.
        let reply = runtime.handle_message("show the funding pipeline dashboard", &[]).await;
        assert!(reply.starts_with("Error: step budget"));
    }

    #[tokio::test]
    async fn every_tool_call_is_audited() {
        let runtime = runtime();
        runtime.handle_message("show the funding pipeline dashboard", &[]).await;

        let entries = runtime.audit_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|entry| entry.action.starts_with("agent.tool_call.")));
    }
}
