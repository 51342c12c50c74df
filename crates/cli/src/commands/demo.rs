//! End-to-end demo of the funding pipeline over the built-in sample data:
//! discover opportunities, rank prospects, draft outreach for the top
//! prospect, render the dashboard, then walk an award through its
//! lifecycle.

use std::fmt::Write;

use serde_json::json;

use fundline_core::awards;
use fundline_core::clock::{Clock, SystemClock};
use fundline_core::dashboard::render_summary;
use fundline_core::fixtures;
use fundline_core::money::format_amount;
use fundline_core::opportunities::search_opportunities;
use fundline_core::outreach::{compose_letter, ProspectProfile};
use fundline_core::prospects::{rank_prospects, ProspectFilters};

const MISSION_STATEMENT: &str =
    "Empowering undergraduate women through leadership scholarships in NY";

pub fn run() -> String {
    render(&SystemClock)
}

pub(crate) fn render(clock: &dyn Clock) -> String {
    let mission_keywords = vec![
        "women leadership scholarships".to_string(),
        "undergraduate education".to_string(),
    ];
    let region = "NY, USA";
    let past_donors = fixtures::sample_donors();
    let event_projection = fixtures::sample_projection();

    let mut out = String::new();

    let _ = writeln!(out, "Searching for grant/funding opportunities...");
    let mut opportunities = search_opportunities(&mission_keywords, region, 5, clock);
    let _ = writeln!(out, "\nFound opportunities:");
    for opportunity in &opportunities {
        let _ = writeln!(
            out,
            " - {}, Award size: ${}-${}, Deadline: {}",
            opportunity.funder_name,
            format_amount(opportunity.award_size_min as f64),
            format_amount(opportunity.award_size_max as f64),
            opportunity.deadline
        );
    }

    let _ = writeln!(out, "\nIdentifying top donor/sponsor prospects...");
    let filters = ProspectFilters { industries: None, region: Some(region.to_string()) };
    let donor_prospects = rank_prospects(&past_donors, &filters, 3, clock);
    let _ = writeln!(out, "\nTop donor prospects:");
    for prospect in &donor_prospects {
        let _ = writeln!(
            out,
            " - {} (Industry: {}, Last Gift: ${}, Score: {})",
            prospect.donor.name,
            prospect.donor.industry,
            format_amount(prospect.donor.last_gift_amount),
            prospect.potential_score
        );
    }

    let _ = writeln!(out, "\nGenerating outreach letter for top prospect...");
    let top_prospect = donor_prospects
        .first()
        .map(|prospect| ProspectProfile {
            name: prospect.donor.name.clone(),
            industry: prospect.donor.industry.clone(),
            last_gift_amount: prospect.donor.last_gift_amount,
            region: prospect.donor.region.clone(),
        })
        .unwrap_or_default();
    let letter = compose_letter(
        &top_prospect,
        MISSION_STATEMENT,
        &event_projection.event_name,
        "Platinum Sponsor",
    );
    let _ = writeln!(out, "\n--- Outreach Letter ---");
    let _ = writeln!(out, "{letter}");

    // Fit scores decrease down the list, mirroring the pipeline ordering.
    for (index, opportunity) in opportunities.iter_mut().enumerate() {
        opportunity.fit_score = Some(80 - 10 * index as i32);
    }
    let summary = render_summary(&opportunities, &donor_prospects, &event_projection);
    let _ = writeln!(out, "\n--- Dashboard Summary ---");
    let _ = writeln!(out, "{summary}");

    let _ = writeln!(out, "\nTracking funding award & deposit example...");
    let award_id = "AWD-001";
    let steps = [
        ("register_award", json!({ "amount_awarded": 25_000 })),
        ("record_deposit", json!({ "deposit_amount": 25_000 })),
        ("allocate_funds", json!({ "allocation_details": "Scholarship recipient A - $25,000" })),
    ];
    for (action, details) in &steps {
        let transition = awards::track(award_id, action, Some(details));
        let rendered = serde_json::to_string(&transition).unwrap_or_default();
        let _ = writeln!(out, " - {}: {rendered}", transition.status_label());
    }

    out
}

#[cfg(test)]
mod tests {
    use fundline_core::clock::FixedClock;

    use super::render;

    #[test]
    fn demo_walks_the_whole_pipeline() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let output = render(&clock);

        assert!(output.contains("Example Foundation 1, Award size: $5,000-$25,000"));
        assert!(output.contains("Deadline: 2026-11-23"));
        assert!(output.contains("Dear TechCorp Inc.,"));
        assert!(output.contains("Platinum Sponsor"));
        assert!(output.contains("Gap: $35,000"));
        assert!(output.contains("Fit Score: 80"));
        assert!(output.contains("\"status\":\"Deposit Recorded\""));
        assert!(output.contains("\"status\":\"Funds Allocated\""));
    }

    #[test]
    fn demo_is_deterministic_under_a_frozen_clock() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        assert_eq!(render(&clock), render(&clock));
    }
}
