use serde::{Deserialize, Serialize};

use crate::domain::opportunity::Opportunity;
use crate::money::format_amount;

/// Applicant organisation profile used when drafting application outlines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgProfile {
    pub mission: String,
    pub region: String,
}

impl Default for OrgProfile {
    fn default() -> Self {
        Self { mission: "our mission".to_string(), region: "our community".to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineSections {
    #[serde(rename = "Executive Summary")]
    pub executive_summary: String,
    #[serde(rename = "Needs Statement")]
    pub needs_statement: String,
    #[serde(rename = "Program Description")]
    pub program_description: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Outcomes")]
    pub outcomes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationOutline {
    pub opportunity: String,
    pub outline: OutlineSections,
}

/// Drafts the standard section outline for a grant application against
/// one opportunity.
pub fn application_outline(opportunity: &Opportunity, org: &OrgProfile) -> ApplicationOutline {
    let focus = if opportunity.mission_focus.is_empty() {
        "the funder focus".to_string()
    } else {
        opportunity.mission_focus.clone()
    };

    ApplicationOutline {
        opportunity: opportunity.funder_name.clone(),
        outline: OutlineSections {
            executive_summary: format!("Brief overview of program aligning with {focus}."),
            needs_statement: format!(
                "Describe the need in {} for {}.",
                org.region, org.mission
            ),
            program_description: "Objectives, activities, timeline, and staffing.".to_string(),
            budget: "Itemized budget with narrative justification.".to_string(),
            outcomes: "Measurable outcomes and evaluation plan.".to_string(),
        },
    }
}

/// One program outcome reported back to a funder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeRecord {
    pub outcome: String,
    pub beneficiaries: u64,
}

/// Spend figures for a tracked award.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardUsage {
    pub amount_awarded: f64,
    pub amount_used: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunderReport {
    pub award_id: String,
    pub summary_text: String,
    pub beneficiaries: u64,
    pub outcomes_count: usize,
}

/// Builds the minimal outcome report sent to a funder after an award.
pub fn funder_report(
    award_id: &str,
    outcomes: &[OutcomeRecord],
    usage: &AwardUsage,
) -> FunderReport {
    let total_beneficiaries: u64 = outcomes.iter().map(|record| record.beneficiaries).sum();
    let key_outcomes = outcomes
        .iter()
        .filter(|record| !record.outcome.is_empty())
        .map(|record| record.outcome.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let summary_text = format!(
        "Award {award_id} Report:\n\
         - Total beneficiaries: {total_beneficiaries}\n\
         - Key outcomes: {key_outcomes}\n\
         - Amount used: ${} of ${}\n",
        format_amount(usage.amount_used),
        format_amount(usage.amount_awarded),
    );

    FunderReport {
        award_id: award_id.to_string(),
        summary_text,
        beneficiaries: total_beneficiaries,
        outcomes_count: outcomes.len(),
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::opportunities::search_opportunities;

    use super::{application_outline, funder_report, AwardUsage, OrgProfile, OutcomeRecord};

    #[test]
    fn outline_names_the_opportunity_and_org_context() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let keywords = vec!["undergraduate education".to_string()];
        let opportunities = search_opportunities(&keywords, "NY, USA", 1, &clock);

        let outline = application_outline(
            &opportunities[0],
            &OrgProfile {
                mission: "leadership scholarships".to_string(),
                region: "New York State".to_string(),
            },
        );

        assert_eq!(outline.opportunity, "Example Foundation 1");
        assert!(outline.outline.executive_summary.contains("undergraduate education"));
        assert!(outline.outline.needs_statement.contains("New York State"));
    }

    #[test]
    fn outline_defaults_cover_an_empty_org_profile() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let opportunities = search_opportunities(&[], "Nationwide", 1, &clock);
        let outline = application_outline(&opportunities[0], &OrgProfile::default());
        assert!(outline.outline.needs_statement.contains("our community"));
        assert!(outline.outline.needs_statement.contains("our mission"));
    }

    #[test]
    fn funder_report_totals_beneficiaries_and_joins_outcomes() {
        let outcomes = vec![
            OutcomeRecord { outcome: "10 scholarships awarded".to_string(), beneficiaries: 10 },
            OutcomeRecord { outcome: String::new(), beneficiaries: 5 },
            OutcomeRecord { outcome: "Mentorship program launched".to_string(), beneficiaries: 25 },
        ];
        let usage = AwardUsage { amount_awarded: 25_000.0, amount_used: 24_000.0 };

        let report = funder_report("AWD-001", &outcomes, &usage);
        assert_eq!(report.beneficiaries, 40);
        assert_eq!(report.outcomes_count, 3);
        assert!(report
            .summary_text
            .contains("10 scholarships awarded, Mentorship program launched"));
        assert!(report.summary_text.contains("$24,000 of $25,000"));
    }
}
