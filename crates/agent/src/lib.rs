//! Funding Agent - intent extraction and tool orchestration
//!
//! This crate provides the "brain" of the fundline system - the agent runtime that:
//! - Extracts structured intent from natural language requests
//! - Plans a bounded sequence of tool calls for that intent
//! - Executes tools (opportunity search, prospect ranking, award tracking,
//!   outreach drafting, dashboard reporting)
//! - Formats results as a single assistant reply
//!
//! # Architecture
//!
//! The agent follows a constrained loop:
//! 1. **Intent Extraction** (`conversation`) - Parse NL → structured `AgentIntent`
//! 2. **Planning** (`runtime`) - Map the intent to a finite list of tool calls
//! 3. **Tool Execution** (`tools`) - Call the funding operations
//! 4. **Response Generation** - Render tool output as narrative text
//!
//! # Key Types
//!
//! - `AgentRuntime` - Main orchestrator (see `runtime` module)
//! - `Tool` / `ToolRegistry` - Uniform JSON-in/JSON-out tool surface
//! - `IntentExtractor` - Deterministic keyword-based parser
//!
//! # Safety Principle
//!
//! The extractor is strictly a router. It NEVER decides award amounts,
//! scores, or statuses. Those are deterministic decisions made by the
//! funding core, and the plan for any one message is bounded by the
//! configured step budget.

pub mod conversation;
pub mod runtime;
pub mod tools;

pub use conversation::{AgentIntent, ChatMessage, ChatRole, IntentExtractor};
pub use runtime::{AgentProfile, AgentRuntime};
pub use tools::{Tool, ToolRegistry};
