use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A candidate funding source surfaced by opportunity search.
///
/// Records are created fresh per search call and never persisted. The
/// `fit_score` is assigned by the caller after the fact, never by the
/// generator itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default)]
    pub funder_name: String,
    #[serde(default)]
    pub mission_focus: String,
    #[serde(default)]
    pub award_size_min: u64,
    #[serde(default)]
    pub award_size_max: u64,
    #[serde(default = "epoch_date")]
    pub deadline: NaiveDate,
    #[serde(default)]
    pub geographic_restriction: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<i32>,
}

// Missing deadlines sort before every real date, matching the lenient
// string-sort behavior expected of the dashboard.
fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch is a valid date")
}

#[cfg(test)]
mod tests {
    use super::Opportunity;

    #[test]
    fn partial_json_defaults_instead_of_failing() {
        let opportunity: Opportunity =
            serde_json::from_str(r#"{"funder_name": "Example Foundation 1"}"#)
                .expect("partial record should deserialize");

        assert_eq!(opportunity.funder_name, "Example Foundation 1");
        assert_eq!(opportunity.award_size_min, 0);
        assert_eq!(opportunity.deadline.to_string(), "1970-01-01");
        assert!(opportunity.fit_score.is_none());
    }

    #[test]
    fn fit_score_is_omitted_from_json_until_assigned() {
        let mut opportunity: Opportunity = serde_json::from_str("{}").expect("empty record");
        let unscored = serde_json::to_value(&opportunity).expect("serialize");
        assert!(unscored.get("fit_score").is_none());

        opportunity.fit_score = Some(80);
        let scored = serde_json::to_value(&opportunity).expect("serialize");
        assert_eq!(scored["fit_score"], 80);
    }
}
