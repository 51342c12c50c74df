use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use fundline_core::audit::{AuditEntry, AuditSink, InMemoryAuditSink};
use fundline_core::awards;
use fundline_core::cache::MemoryCache;
use fundline_core::clock::Clock;
use fundline_core::dashboard;
use fundline_core::domain::donor::{DonorRecord, ScoredProspect};
use fundline_core::domain::event::EventProjection;
use fundline_core::domain::opportunity::Opportunity;
use fundline_core::imports;
use fundline_core::opportunities;
use fundline_core::outreach::{self, ProspectProfile};
use fundline_core::prospects::{self, ProspectFilters};
use fundline_core::reminders::{self, Task};
use fundline_core::reports::{self, AwardUsage, OrgProfile, OutcomeRecord};

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, input: Value) -> Result<Value>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub async fn execute(&self, name: &str, input: Value) -> Result<Value> {
        let tool = self.tools.get(name).ok_or_else(|| anyhow!("unknown tool: {name}"))?;
        tool.execute(input).await
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn parse_request<T: DeserializeOwned>(tool: &str, input: Value) -> Result<T> {
    serde_json::from_value(input).with_context(|| format!("invalid input for tool `{tool}`"))
}

fn to_value<T: serde::Serialize>(output: &T) -> Result<Value> {
    serde_json::to_value(output).context("tool output could not be serialized")
}

/// Synthesizes funding opportunities aligned with the mission keywords.
pub struct GrantSearchTool {
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct GrantSearchRequest {
    #[serde(default)]
    mission_keywords: Vec<String>,
    #[serde(default)]
    region: String,
    #[serde(default = "default_max_results")]
    max_results: i32,
}

fn default_max_results() -> i32 {
    10
}

impl GrantSearchTool {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Tool for GrantSearchTool {
    fn name(&self) -> &'static str {
        "grant_search"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: GrantSearchRequest = parse_request(self.name(), input)?;
        let results = opportunities::search_opportunities(
            &request.mission_keywords,
            &request.region,
            request.max_results,
            self.clock.as_ref(),
        );
        to_value(&results)
    }
}

/// Scores and ranks past donors as sponsorship prospects.
pub struct DonorProspectTool {
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct DonorProspectRequest {
    #[serde(default)]
    past_donors: Vec<DonorRecord>,
    #[serde(default)]
    industry_filter: Option<Vec<String>>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default = "default_top_n")]
    top_n: i32,
}

fn default_top_n() -> i32 {
    5
}

impl DonorProspectTool {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Tool for DonorProspectTool {
    fn name(&self) -> &'static str {
        "donor_prospect"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: DonorProspectRequest = parse_request(self.name(), input)?;
        let filters =
            ProspectFilters { industries: request.industry_filter, region: request.region };
        let ranked = prospects::rank_prospects(
            &request.past_donors,
            &filters,
            request.top_n,
            self.clock.as_ref(),
        );
        to_value(&ranked)
    }
}

/// Records one lifecycle action against an award and echoes the transition.
#[derive(Default)]
pub struct DepositTrackerTool;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DepositTrackerRequest {
    award_id: String,
    action: String,
    details: Option<Value>,
}

#[async_trait]
impl Tool for DepositTrackerTool {
    fn name(&self) -> &'static str {
        "deposit_tracker"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: DepositTrackerRequest = parse_request(self.name(), input)?;
        let transition =
            awards::track(&request.award_id, &request.action, request.details.as_ref());
        to_value(&transition)
    }
}

/// Drafts a sponsorship invitation letter for a single prospect.
pub struct OutreachLetterTool {
    default_mission: String,
    default_event: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutreachRequest {
    prospect: ProspectProfile,
    mission_statement: String,
    event_name: String,
    sponsorship_tier: String,
}

impl OutreachLetterTool {
    pub fn new(default_mission: impl Into<String>, default_event: impl Into<String>) -> Self {
        Self { default_mission: default_mission.into(), default_event: default_event.into() }
    }
}

#[async_trait]
impl Tool for OutreachLetterTool {
    fn name(&self) -> &'static str {
        "generate_outreach_letter"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: OutreachRequest = parse_request(self.name(), input)?;
        let mission = if request.mission_statement.is_empty() {
            &self.default_mission
        } else {
            &request.mission_statement
        };
        let event =
            if request.event_name.is_empty() { &self.default_event } else { &request.event_name };
        let tier = if request.sponsorship_tier.is_empty() {
            "Sponsor"
        } else {
            &request.sponsorship_tier
        };

        let letter = outreach::compose_letter(&request.prospect, mission, event, tier);
        Ok(Value::String(letter))
    }
}

/// Renders the funding pipeline dashboard text.
#[derive(Default)]
pub struct DashboardSummaryTool;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DashboardSummaryRequest {
    opportunities: Vec<Opportunity>,
    donor_prospects: Vec<ScoredProspect>,
    event_projection: EventProjection,
}

#[async_trait]
impl Tool for DashboardSummaryTool {
    fn name(&self) -> &'static str {
        "dashboard_summary"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: DashboardSummaryRequest = parse_request(self.name(), input)?;
        let summary = dashboard::render_summary(
            &request.opportunities,
            &request.donor_prospects,
            &request.event_projection,
        );
        Ok(Value::String(summary))
    }
}

/// Drafts the section outline for a grant application.
#[derive(Default)]
pub struct ApplicationOutlineTool;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApplicationOutlineRequest {
    opportunity: Opportunity,
    org_profile: OrgProfile,
}

#[async_trait]
impl Tool for ApplicationOutlineTool {
    fn name(&self) -> &'static str {
        "grant_application_outline"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: ApplicationOutlineRequest = parse_request(self.name(), input)?;
        to_value(&reports::application_outline(&request.opportunity, &request.org_profile))
    }
}

/// Summarizes outcomes and spend for a funder after an award.
#[derive(Default)]
pub struct FunderReportTool;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FunderReportRequest {
    award_id: String,
    outcomes: Vec<OutcomeRecord>,
    usage: AwardUsage,
}

#[async_trait]
impl Tool for FunderReportTool {
    fn name(&self) -> &'static str {
        "funder_report"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: FunderReportRequest = parse_request(self.name(), input)?;
        to_value(&reports::funder_report(&request.award_id, &request.outcomes, &request.usage))
    }
}

/// Lists open tasks due inside a rolling window.
pub struct TaskReminderTool {
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct TaskReminderRequest {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default = "default_days_ahead")]
    days_ahead: i64,
}

fn default_days_ahead() -> i64 {
    7
}

impl TaskReminderTool {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Tool for TaskReminderTool {
    fn name(&self) -> &'static str {
        "task_reminder"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: TaskReminderRequest = parse_request(self.name(), input)?;
        let report =
            reminders::upcoming_tasks(&request.tasks, request.days_ahead, self.clock.as_ref());
        to_value(&report)
    }
}

/// Imports donor or opportunity records from CSV or JSON.
#[derive(Default)]
pub struct DataImportTool;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DataImportRequest {
    source_type: String,
    content_or_path: String,
}

#[async_trait]
impl Tool for DataImportTool {
    fn name(&self) -> &'static str {
        "data_import"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: DataImportRequest = parse_request(self.name(), input)?;
        // Import failures keep the documented `{"error": ...}` wire shape
        // instead of failing the tool call.
        match imports::import(&request.source_type, &request.content_or_path) {
            Ok(payload) => to_value(&payload),
            Err(error) => Ok(error.payload()),
        }
    }
}

/// Key/value cache shared by one registry instance.
pub struct CacheTool {
    cache: Arc<MemoryCache>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CacheRequest {
    action: String,
    key: String,
    value: Option<Value>,
    ttl_seconds: Option<u64>,
}

impl CacheTool {
    pub fn new(cache: Arc<MemoryCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl Tool for CacheTool {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: CacheRequest = parse_request(self.name(), input)?;
        match request.action.as_str() {
            "get" => to_value(&self.cache.get(&request.key)),
            "set" => {
                self.cache.set(
                    request.key.clone(),
                    request.value.unwrap_or(Value::Null),
                    request.ttl_seconds,
                );
                Ok(serde_json::json!({ "stored": true, "key": request.key }))
            }
            "delete" => {
                let removed = self.cache.delete(&request.key);
                Ok(serde_json::json!({ "deleted": removed, "key": request.key }))
            }
            "clear" => {
                self.cache.clear();
                Ok(serde_json::json!({ "cleared": true }))
            }
            other => Err(anyhow!("unknown cache action: {other}")),
        }
    }
}

/// Appends an entry to the shared audit trail.
pub struct AuditLogTool {
    sink: Arc<InMemoryAuditSink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuditLogRequest {
    user: String,
    action: String,
    details: HashMap<String, String>,
}

impl AuditLogTool {
    pub fn new(sink: Arc<InMemoryAuditSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Tool for AuditLogTool {
    fn name(&self) -> &'static str {
        "audit_log"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: AuditLogRequest = parse_request(self.name(), input)?;
        let mut entry = AuditEntry::new(request.user, request.action);
        for (key, value) in request.details {
            entry = entry.with_detail(key, value);
        }
        to_value(&self.sink.record(entry))
    }
}
