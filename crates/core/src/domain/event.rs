use serde::{Deserialize, Serialize};

/// Revenue projection for the fundraising event.
///
/// Read-only input to the dashboard; every field defaults so sparse caller
/// payloads never fail.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventProjection {
    pub event_name: String,
    pub target_revenue: f64,
    pub projected_revenue: f64,
    pub tickets_sold: u32,
    pub sponsorships_sold: u32,
}

impl EventProjection {
    /// Remaining distance to target. Negative when projection exceeds
    /// target; never clamped.
    pub fn revenue_gap(&self) -> f64 {
        self.target_revenue - self.projected_revenue
    }
}
