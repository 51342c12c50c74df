use std::fmt::Write;

use crate::domain::donor::ScoredProspect;
use crate::domain::event::EventProjection;
use crate::domain::opportunity::Opportunity;
use crate::money::format_amount;

/// Composes the funding pipeline dashboard as one human-readable report.
///
/// Shows the opportunity count, the three earliest deadlines (ascending),
/// the first three prospects in caller order (the caller is expected to
/// have pre-ranked them), and the revenue gap, which is never clamped.
pub fn render_summary(
    opportunities: &[Opportunity],
    donor_prospects: &[ScoredProspect],
    event_projection: &EventProjection,
) -> String {
    let mut next_deadlines: Vec<&Opportunity> = opportunities.iter().collect();
    next_deadlines.sort_by_key(|opp| opp.deadline);
    next_deadlines.truncate(3);

    let mut summary = String::new();
    let _ = writeln!(summary, "Funding Pipeline Summary:");
    let _ = writeln!(summary);
    let _ = writeln!(summary, "- Opportunities in pipeline: {}", opportunities.len());

    if !next_deadlines.is_empty() {
        let _ = writeln!(summary, "- Next upcoming deadlines:");
        for opportunity in next_deadlines {
            let fit = opportunity
                .fit_score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "n/a".to_string());
            let _ = writeln!(
                summary,
                "   - {} (Deadline: {}, Fit Score: {})",
                opportunity.funder_name, opportunity.deadline, fit
            );
        }
    }

    let _ = writeln!(summary);
    let _ = writeln!(summary, "- Top donor/sponsor prospects:");
    for prospect in donor_prospects.iter().take(3) {
        let _ = writeln!(
            summary,
            "   - {} (Industry: {}, Last Gift: ${}, Score: {})",
            prospect.donor.name,
            prospect.donor.industry,
            format_amount(prospect.donor.last_gift_amount),
            prospect.potential_score
        );
    }

    let _ = writeln!(summary);
    let _ = writeln!(summary, "- Event Revenue Projection:");
    let _ = writeln!(summary, "   Target: ${}", format_amount(event_projection.target_revenue));
    let _ = writeln!(
        summary,
        "   Projected: ${}",
        format_amount(event_projection.projected_revenue)
    );
    let _ = writeln!(summary, "   Gap: ${}", format_amount(event_projection.revenue_gap()));
    let _ = write!(
        summary,
        "\nNext steps: review the top three deadlines and contact the highest-scoring \
         prospect this week."
    );

    summary
}
