use chrono::Duration;

use crate::clock::Clock;
use crate::domain::opportunity::Opportunity;

const ELIGIBILITY: &str = "501(c)(3) non-profit organisation supporting women scholars";
const KEYWORD_FALLBACK: &str = "general mission alignment";

/// Synthesizes a bounded list of funding opportunities for the given
/// mission keywords and region.
///
/// Record `i` gets an award range of `5000 + 1000*i ..= 25000 + 2000*i`
/// and a deadline `today + (90 + 15*i)` days, so award ceilings and
/// deadlines increase strictly across the sequence. Always returns at
/// least one record; `max_results` below one is coerced to one.
pub fn search_opportunities(
    mission_keywords: &[String],
    region: &str,
    max_results: i32,
    clock: &dyn Clock,
) -> Vec<Opportunity> {
    let focus = if mission_keywords.is_empty() {
        KEYWORD_FALLBACK.to_string()
    } else {
        mission_keywords.join(", ")
    };
    let today = clock.today();
    let count = max_results.max(1) as usize;

    (0..count)
        .map(|index| Opportunity {
            funder_name: format!("Example Foundation {}", index + 1),
            mission_focus: format!("Focus on: {focus}"),
            award_size_min: 5_000 + 1_000 * index as u64,
            award_size_max: 25_000 + 2_000 * index as u64,
            deadline: today + Duration::days(90 + 15 * index as i64),
            geographic_restriction: region.to_string(),
            eligibility: ELIGIBILITY.to_string(),
            url: format!("https://examplefoundation.org/apply/{}", index + 1),
            fit_score: None,
        })
        .collect()
}
