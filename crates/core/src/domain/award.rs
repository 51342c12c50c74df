use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recognized award lifecycle actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardAction {
    RegisterAward,
    RecordDeposit,
    AllocateFunds,
    ReportOutcome,
}

impl AwardAction {
    /// Parses a raw action string; unrecognized strings are not an error
    /// but map to the `Unknown action` transition at the call site.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "register_award" => Some(Self::RegisterAward),
            "record_deposit" => Some(Self::RecordDeposit),
            "allocate_funds" => Some(Self::AllocateFunds),
            "report_outcome" => Some(Self::ReportOutcome),
            _ => None,
        }
    }

    pub fn detail_field(&self) -> &'static str {
        match self {
            Self::RegisterAward => "amount_awarded",
            Self::RecordDeposit => "deposit_amount",
            Self::AllocateFunds => "allocation_details",
            Self::ReportOutcome => "outcome_details",
        }
    }
}

/// Snapshot returned by the award tracker.
///
/// The status strings and echoed field names are caller-visible contract;
/// each snapshot reflects only the most recent action and carries no
/// memory of prior transitions for the same identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AwardTransition {
    #[serde(rename = "Registered")]
    Registered { award_id: String, amount_awarded: Option<Value> },
    #[serde(rename = "Deposit Recorded")]
    DepositRecorded { award_id: String, deposit_amount: Option<Value> },
    #[serde(rename = "Funds Allocated")]
    FundsAllocated { award_id: String, allocation_details: Option<Value> },
    #[serde(rename = "Report Submitted")]
    ReportSubmitted { award_id: String, outcome_details: Option<Value> },
    #[serde(rename = "Unknown action")]
    UnknownAction { award_id: String, details: Option<Value> },
}

impl AwardTransition {
    pub fn award_id(&self) -> &str {
        match self {
            Self::Registered { award_id, .. }
            | Self::DepositRecorded { award_id, .. }
            | Self::FundsAllocated { award_id, .. }
            | Self::ReportSubmitted { award_id, .. }
            | Self::UnknownAction { award_id, .. } => award_id,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "Registered",
            Self::DepositRecorded { .. } => "Deposit Recorded",
            Self::FundsAllocated { .. } => "Funds Allocated",
            Self::ReportSubmitted { .. } => "Report Submitted",
            Self::UnknownAction { .. } => "Unknown action",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AwardAction, AwardTransition};

    #[test]
    fn action_parsing_covers_all_four_recognized_strings() {
        assert_eq!(AwardAction::parse("register_award"), Some(AwardAction::RegisterAward));
        assert_eq!(AwardAction::parse("record_deposit"), Some(AwardAction::RecordDeposit));
        assert_eq!(AwardAction::parse("allocate_funds"), Some(AwardAction::AllocateFunds));
        assert_eq!(AwardAction::parse("report_outcome"), Some(AwardAction::ReportOutcome));
        assert_eq!(AwardAction::parse("bogus"), None);
    }

    #[test]
    fn transition_serializes_with_status_discriminant_and_echoed_field() {
        let transition = AwardTransition::Registered {
            award_id: "AWD-001".to_string(),
            amount_awarded: Some(json!(25_000)),
        };

        let value = serde_json::to_value(&transition).expect("serialize");
        assert_eq!(value["status"], "Registered");
        assert_eq!(value["award_id"], "AWD-001");
        assert_eq!(value["amount_awarded"], 25_000);
        assert!(value.get("deposit_amount").is_none());
    }

    #[test]
    fn missing_detail_field_serializes_as_null() {
        let transition = AwardTransition::DepositRecorded {
            award_id: "AWD-002".to_string(),
            deposit_amount: None,
        };

        let value = serde_json::to_value(&transition).expect("serialize");
        assert_eq!(value["status"], "Deposit Recorded");
        assert!(value["deposit_amount"].is_null());
    }
}
