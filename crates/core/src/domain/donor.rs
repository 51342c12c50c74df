use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorKind {
    #[default]
    Individual,
    #[serde(alias = "org")]
    Organization,
}

/// A past donor or sponsor as supplied by the caller.
///
/// `last_gift_date` stays a raw string on purpose: unparseable dates are a
/// tolerated input condition that zeroes the recency bonus rather than
/// failing the call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: DonorKind,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub last_gift_amount: f64,
    #[serde(default)]
    pub last_gift_date: Option<String>,
    #[serde(default)]
    pub region: String,
}

/// Derived copy of a donor record carrying its potential score.
///
/// The scorer never mutates caller-owned records; it hands back these
/// enriched copies instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredProspect {
    #[serde(flatten)]
    pub donor: DonorRecord,
    #[serde(default)]
    pub potential_score: f64,
}

#[cfg(test)]
mod tests {
    use super::{DonorKind, DonorRecord, ScoredProspect};

    #[test]
    fn kind_accepts_the_short_org_spelling() {
        let donor: DonorRecord =
            serde_json::from_str(r#"{"name": "TechCorp Inc.", "type": "org"}"#)
                .expect("org alias should parse");
        assert_eq!(donor.kind, DonorKind::Organization);
    }

    #[test]
    fn scored_prospect_flattens_donor_fields_on_the_wire() {
        let prospect = ScoredProspect {
            donor: DonorRecord {
                name: "Alumni Jane Doe".to_string(),
                kind: DonorKind::Individual,
                industry: "Education".to_string(),
                last_gift_amount: 5_000.0,
                last_gift_date: Some("2024-05-30".to_string()),
                region: "NY, USA".to_string(),
            },
            potential_score: 2_501.42,
        };

        let value = serde_json::to_value(&prospect).expect("serialize");
        assert_eq!(value["name"], "Alumni Jane Doe");
        assert_eq!(value["type"], "individual");
        assert_eq!(value["potential_score"], 2_501.42);
    }
}
