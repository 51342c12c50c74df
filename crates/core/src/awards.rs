use serde_json::Value;

use crate::domain::award::{AwardAction, AwardTransition};

/// Applies one lifecycle action to an award identifier and returns the
/// resulting status snapshot.
///
/// Deliberately stateless: each call reflects only the action it was given
/// and holds no ledger of earlier transitions for the same identifier.
/// Unrecognized actions are a first-class `Unknown action` result, never
/// an error, and missing detail fields echo as null.
pub fn track(award_id: &str, action: &str, details: Option<&Value>) -> AwardTransition {
    let award_id = award_id.to_string();
    let echoed = |field: &str| details.and_then(|payload| payload.get(field)).cloned();

    match AwardAction::parse(action) {
        Some(AwardAction::RegisterAward) => AwardTransition::Registered {
            award_id,
            amount_awarded: echoed("amount_awarded"),
        },
        Some(AwardAction::RecordDeposit) => AwardTransition::DepositRecorded {
            award_id,
            deposit_amount: echoed("deposit_amount"),
        },
        Some(AwardAction::AllocateFunds) => AwardTransition::FundsAllocated {
            award_id,
            allocation_details: echoed("allocation_details"),
        },
        Some(AwardAction::ReportOutcome) => AwardTransition::ReportSubmitted {
            award_id,
            outcome_details: echoed("outcome_details"),
        },
        None => AwardTransition::UnknownAction { award_id, details: details.cloned() },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::award::AwardTransition;

    use super::track;

    #[test]
    fn register_award_echoes_the_amount() {
        let details = json!({"amount_awarded": 25_000});
        let transition = track("AWD-001", "register_award", Some(&details));

        assert_eq!(
            transition,
            AwardTransition::Registered {
                award_id: "AWD-001".to_string(),
                amount_awarded: Some(json!(25_000)),
            }
        );
    }

    #[test]
    fn later_actions_carry_no_memory_of_earlier_ones() {
        let register = json!({"amount_awarded": 25_000});
        let _ = track("AWD-001", "register_award", Some(&register));

        let deposit = json!({"deposit_amount": 25_000});
        let transition = track("AWD-001", "record_deposit", Some(&deposit));

        let value = serde_json::to_value(&transition).expect("serialize");
        assert_eq!(value["status"], "Deposit Recorded");
        assert_eq!(value["deposit_amount"], 25_000);
        assert!(value.get("amount_awarded").is_none(), "no ledger of the registration");
    }

    #[test]
    fn allocation_and_outcome_echo_their_detail_fields() {
        let allocation = json!({"allocation_details": "Scholarship recipient A - $25,000"});
        let allocated = track("AWD-001", "allocate_funds", Some(&allocation));
        assert_eq!(allocated.status_label(), "Funds Allocated");

        let outcome = json!({"outcome_details": "Ten scholarships awarded"});
        let reported = track("AWD-001", "report_outcome", Some(&outcome));
        let value = serde_json::to_value(&reported).expect("serialize");
        assert_eq!(value["status"], "Report Submitted");
        assert_eq!(value["outcome_details"], "Ten scholarships awarded");
    }

    #[test]
    fn unrecognized_action_echoes_the_raw_payload_verbatim() {
        let details = json!({"anything": ["goes", 1, null]});
        let transition = track("AWD-009", "bogus", Some(&details));

        assert_eq!(
            transition,
            AwardTransition::UnknownAction {
                award_id: "AWD-009".to_string(),
                details: Some(details),
            }
        );
    }

    #[test]
    fn missing_details_are_tolerated_for_every_action() {
        for action in ["register_award", "record_deposit", "allocate_funds", "report_outcome"] {
            let transition = track("AWD-010", action, None);
            let value = serde_json::to_value(&transition).expect("serialize");
            assert_eq!(value["award_id"], "AWD-010");
            // Exactly three keys: award_id, status, and the null echo field.
            assert_eq!(value.as_object().expect("object").len(), 3);
        }
    }

    #[test]
    fn identical_inputs_produce_identical_snapshots() {
        let details = json!({"deposit_amount": 12_345});
        let first = track("AWD-011", "record_deposit", Some(&details));
        let second = track("AWD-011", "record_deposit", Some(&details));
        assert_eq!(first, second);
    }
}
