use serde::{Deserialize, Serialize};

/// Who authored a message in the conversation history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Lenient mapping for wire payloads; anything that is not a user
    /// role is treated as assistant output.
    pub fn from_wire(role: &str) -> Self {
        match role.trim().to_ascii_lowercase().as_str() {
            "user" | "human" => Self::User,
            _ => Self::Assistant,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Structured goal extracted from one natural-language request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentIntent {
    DiscoverOpportunities { keywords: Vec<String>, max_results: i32 },
    RankProspects { top_n: i32 },
    TrackAward { award_id: Option<String>, action: String },
    ComposeOutreach { sponsorship_tier: String },
    Summarize,
    Clarify { prompt: String },
}

#[derive(Clone, Debug, Default)]
pub struct IntentExtractor;

impl IntentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> AgentIntent {
        let normalized_text = normalize_text(text);
        let tokens = tokenize(&normalized_text);

        if let Some(action) = extract_award_action(&normalized_text) {
            return AgentIntent::TrackAward {
                award_id: extract_award_id(&tokens),
                action: action.to_string(),
            };
        }

        if mentions_any(&normalized_text, &["letter", "outreach", "invite", "invitation"]) {
            return AgentIntent::ComposeOutreach {
                sponsorship_tier: extract_sponsorship_tier(&normalized_text),
            };
        }

        if mentions_any(&normalized_text, &["dashboard", "pipeline", "summary", "status report"]) {
            return AgentIntent::Summarize;
        }

        if mentions_any(&normalized_text, &["donor", "prospect", "sponsor"]) {
            return AgentIntent::RankProspects {
                top_n: extract_count(&tokens).unwrap_or(3),
            };
        }

        if mentions_any(&normalized_text, &["grant", "opportunit", "funding", "scholarship"]) {
            return AgentIntent::DiscoverOpportunities {
                keywords: extract_mission_keywords(&normalized_text),
                max_results: extract_count(&tokens).unwrap_or(5),
            };
        }

        AgentIntent::Clarify {
            prompt: "What would you like to begin with - discover funding opportunities, \
                     generate donor outreach, or track deposit status?"
                .to_string(),
        }
    }
}

fn normalize_text(text: &str) -> String {
    text.to_ascii_lowercase()
}

fn tokenize(text: &str) -> Vec<String> {
    let mut sanitized = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_ascii_alphanumeric() || character == '-' {
            sanitized.push(character);
        } else {
            sanitized.push(' ');
        }
    }
    sanitized.split_whitespace().map(|token| token.to_string()).collect()
}

fn mentions_any(normalized_text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| normalized_text.contains(needle))
}

fn extract_award_action(normalized_text: &str) -> Option<&'static str> {
    if normalized_text.contains("deposit") {
        return Some("record_deposit");
    }
    if normalized_text.contains("allocat") {
        return Some("allocate_funds");
    }
    if normalized_text.contains("register") && normalized_text.contains("award") {
        return Some("register_award");
    }
    if normalized_text.contains("report") && normalized_text.contains("award") {
        return Some("report_outcome");
    }
    None
}

/// Scans arbitrary text for an award identifier such as `AWD-001`.
pub fn find_award_id(text: &str) -> Option<String> {
    extract_award_id(&tokenize(&normalize_text(text)))
}

fn extract_award_id(tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .find(|token| token.starts_with("awd") && token.len() > 3)
        .map(|token| token.to_ascii_uppercase())
}

fn extract_count(tokens: &[String]) -> Option<i32> {
    tokens.iter().find_map(|token| token.parse::<i32>().ok())
}

fn extract_sponsorship_tier(normalized_text: &str) -> String {
    let tiers = [
        ("platinum", "Platinum"),
        ("gold", "Gold"),
        ("silver", "Silver"),
        ("bronze", "Bronze"),
    ];
    for (needle, label) in tiers {
        if normalized_text.contains(needle) {
            return format!("{label} Sponsor");
        }
    }
    "Sponsor".to_string()
}

fn extract_mission_keywords(normalized_text: &str) -> Vec<String> {
    let known = [
        "women's leadership",
        "undergraduate scholarships",
        "community service",
        "regional grants",
    ];

    known
        .iter()
        .filter(|phrase| {
            let head = phrase.split(['\'', ' ']).next().unwrap_or(phrase);
            normalized_text.contains(head)
        })
        .map(|phrase| (*phrase).to_string())
        .collect()
}
