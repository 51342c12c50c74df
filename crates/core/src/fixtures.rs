//! Deterministic demo data for the CLI driver and the conversational
//! agent's built-in context. Edit here or import real records via
//! `imports`.

use crate::domain::donor::{DonorKind, DonorRecord};
use crate::domain::event::EventProjection;

pub fn sample_donors() -> Vec<DonorRecord> {
    vec![
        DonorRecord {
            name: "TechCorp Inc.".to_string(),
            kind: DonorKind::Organization,
            industry: "Technology".to_string(),
            last_gift_amount: 20_000.0,
            last_gift_date: Some("2024-08-15".to_string()),
            region: "NY, USA".to_string(),
        },
        DonorRecord {
            name: "FinanceWorks LLC".to_string(),
            kind: DonorKind::Organization,
            industry: "Finance".to_string(),
            last_gift_amount: 15_000.0,
            last_gift_date: Some("2023-11-20".to_string()),
            region: "NY, USA".to_string(),
        },
        DonorRecord {
            name: "Alumni Jane Doe".to_string(),
            kind: DonorKind::Individual,
            industry: "Education".to_string(),
            last_gift_amount: 5_000.0,
            last_gift_date: Some("2024-05-30".to_string()),
            region: "NY, USA".to_string(),
        },
    ]
}

pub fn sample_projection() -> EventProjection {
    EventProjection {
        event_name: "Annual Scholarship Ball 2026".to_string(),
        target_revenue: 100_000.0,
        projected_revenue: 65_000.0,
        tickets_sold: 150,
        sponsorships_sold: 3,
    }
}

#[cfg(test)]
mod tests {
    use super::{sample_donors, sample_projection};

    #[test]
    fn fixtures_are_stable_and_complete() {
        let donors = sample_donors();
        assert_eq!(donors.len(), 3);
        assert!(donors.iter().all(|donor| donor.last_gift_date.is_some()));
        assert_eq!(sample_projection().revenue_gap(), 35_000.0);
    }
}
