use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::Clock;
use crate::domain::donor::{DonorRecord, ScoredProspect};

/// Optional conjunctive filters applied before scoring.
///
/// An empty industry list or empty region string means "no filter",
/// matching the lenient semantics of the wire payloads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProspectFilters {
    pub industries: Option<Vec<String>>,
    pub region: Option<String>,
}

impl ProspectFilters {
    fn matches(&self, donor: &DonorRecord) -> bool {
        if let Some(industries) = &self.industries {
            if !industries.is_empty() {
                let industry = donor.industry.to_lowercase();
                if !industries.iter().any(|allowed| allowed.to_lowercase() == industry) {
                    return false;
                }
            }
        }

        if let Some(region) = &self.region {
            if !region.is_empty()
                && !donor.region.to_lowercase().contains(&region.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

/// Filters, scores, and ranks donor records.
///
/// `score = 0.5 * last_gift_amount + 1000 / max(1, days_since_last_gift)`,
/// rounded to two decimals. An absent or unparseable gift date zeroes the
/// recency bonus silently. Output is sorted descending by score with ties
/// preserving input order, then truncated to `max(0, top_n)`.
pub fn rank_prospects(
    donors: &[DonorRecord],
    filters: &ProspectFilters,
    top_n: i32,
    clock: &dyn Clock,
) -> Vec<ScoredProspect> {
    let today = clock.today();

    let mut scored: Vec<ScoredProspect> = donors
        .iter()
        .filter(|donor| filters.matches(donor))
        .map(|donor| ScoredProspect {
            donor: donor.clone(),
            potential_score: potential_score(donor, today),
        })
        .collect();

    // Stable sort keeps original input order on equal scores.
    scored.sort_by(|a, b| {
        b.potential_score
            .partial_cmp(&a.potential_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n.max(0) as usize);
    scored
}

fn potential_score(donor: &DonorRecord, today: NaiveDate) -> f64 {
    let base = donor.last_gift_amount * 0.5;
    let bonus = recency_bonus(donor.last_gift_date.as_deref(), today);
    round2(base + bonus)
}

fn recency_bonus(last_gift_date: Option<&str>, today: NaiveDate) -> f64 {
    let Some(raw) = last_gift_date else {
        return 0.0;
    };
    let Some(gift_date) = parse_gift_date(raw) else {
        return 0.0;
    };

    let days_ago = (today - gift_date).num_days().max(1);
    1_000.0 / days_ago as f64
}

fn parse_gift_date(raw: &str) -> Option<NaiveDate> {
    raw.parse::<NaiveDate>()
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::domain::donor::{DonorKind, DonorRecord};

    use super::{rank_prospects, ProspectFilters};

    fn donor(name: &str, industry: &str, amount: f64, date: Option<&str>) -> DonorRecord {
        DonorRecord {
            name: name.to_string(),
            kind: DonorKind::Organization,
            industry: industry.to_string(),
            last_gift_amount: amount,
            last_gift_date: date.map(str::to_string),
            region: "NY, USA".to_string(),
        }
    }

    #[test]
    fn score_formula_matches_documented_example() {
        // 100 days before the pinned clock.
        let clock = FixedClock::from_ymd(2024, 11, 23);
        let donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, Some("2024-08-15"))];

        let ranked = rank_prospects(&donors, &ProspectFilters::default(), 5, &clock);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].potential_score, 10_010.0);
    }

    #[test]
    fn unparseable_or_missing_date_zeroes_the_recency_bonus() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![
            donor("No Date LLC", "Finance", 8_000.0, None),
            donor("Bad Date LLC", "Finance", 8_000.0, Some("not-a-date")),
        ];

        let ranked = rank_prospects(&donors, &ProspectFilters::default(), 5, &clock);
        assert_eq!(ranked[0].potential_score, 4_000.0);
        assert_eq!(ranked[1].potential_score, 4_000.0);
    }

    #[test]
    fn industry_filter_is_case_insensitive_set_membership() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![
            donor("TechCorp Inc.", "Technology", 20_000.0, None),
            donor("FinanceWorks LLC", "Finance", 15_000.0, None),
        ];
        let filters = ProspectFilters {
            industries: Some(vec!["TECHNOLOGY".to_string()]),
            region: None,
        };

        let ranked = rank_prospects(&donors, &filters, 5, &clock);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].donor.name, "TechCorp Inc.");
    }

    #[test]
    fn region_filter_is_case_insensitive_substring() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let mut donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, None)];
        donors.push(DonorRecord {
            region: "CA, USA".to_string(),
            ..donor("WestCoast Org", "Technology", 9_000.0, None)
        });
        let filters = ProspectFilters { industries: None, region: Some("ny".to_string()) };

        let ranked = rank_prospects(&donors, &filters, 5, &clock);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].donor.name, "TechCorp Inc.");
    }

    #[test]
    fn ties_preserve_original_input_order() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![
            donor("First", "Finance", 1_000.0, None),
            donor("Second", "Finance", 1_000.0, None),
            donor("Third", "Finance", 1_000.0, None),
        ];

        let ranked = rank_prospects(&donors, &ProspectFilters::default(), 5, &clock);
        let names: Vec<&str> = ranked.iter().map(|p| p.donor.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn negative_top_n_yields_an_empty_list() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, None)];
        assert!(rank_prospects(&donors, &ProspectFilters::default(), -1, &clock).is_empty());
    }

    #[test]
    fn filters_that_match_nothing_yield_an_empty_list_not_an_error() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, None)];
        let filters = ProspectFilters {
            industries: Some(vec!["Aerospace".to_string()]),
            region: None,
        };
        assert!(rank_prospects(&donors, &filters, 5, &clock).is_empty());
        assert!(rank_prospects(&[], &ProspectFilters::default(), 5, &clock).is_empty());
    }

    #[test]
    fn caller_records_are_not_mutated() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, Some("2024-08-15"))];
        let before = donors.clone();
        let _ = rank_prospects(&donors, &ProspectFilters::default(), 5, &clock);
        assert_eq!(donors, before);
    }

    #[test]
    fn empty_filter_collections_mean_no_filtering() {
        let clock = FixedClock::from_ymd(2026, 8, 25);
        let donors = vec![donor("TechCorp Inc.", "Technology", 20_000.0, None)];
        let filters = ProspectFilters {
            industries: Some(Vec::new()),
            region: Some(String::new()),
        };
        assert_eq!(rank_prospects(&donors, &filters, 5, &clock).len(), 1);
    }
}
