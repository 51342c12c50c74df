use serde::{Deserialize, Serialize};

use crate::money::format_amount;

/// View of a prospect as the outreach composer needs it.
///
/// Every field defaults so a sparse payload produces a letter with the
/// documented fallbacks instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectProfile {
    pub name: String,
    pub industry: String,
    pub last_gift_amount: f64,
    pub region: String,
}

impl Default for ProspectProfile {
    fn default() -> Self {
        Self {
            name: "Valued Supporter".to_string(),
            industry: String::new(),
            last_gift_amount: 0.0,
            region: String::new(),
        }
    }
}

/// Renders the fixed outreach letter for one prospect.
///
/// Pure string interpolation over the five inputs plus the sponsorship
/// tier; no branching beyond the field defaults above.
pub fn compose_letter(
    prospect: &ProspectProfile,
    mission_statement: &str,
    event_name: &str,
    sponsorship_tier: &str,
) -> String {
    format!(
        "Dear {name},\n\n\
         As part of our mission {mission_statement}, we are pleased to invite you to join us \
         as a {sponsorship_tier} for the {event_name}. Your leadership in the {industry} sector, \
         and generous past support of ${last_gift} in {region}, make you an ideal partner in \
         helping us empower undergraduate women in our community.\n\n\
         By sponsoring this event, you'll be recognised as a leader committed to education and \
         women's leadership, receive event benefits (table for 10, logo placement, special \
         acknowledgement), and help us award scholarships that transform lives.\n\n\
         We hope you will join us and look forward to discussing this opportunity with you. \
         Please let us know how you'd like to proceed.\n\n\
         Warm regards,\n\
         [Your Organisation]\n\
         [Contact details]",
        name = prospect.name,
        industry = prospect.industry,
        last_gift = format_amount(prospect.last_gift_amount),
        region = prospect.region,
    )
}

#[cfg(test)]
mod tests {
    use super::{compose_letter, ProspectProfile};

    const MISSION: &str = "Empowering undergraduate women through leadership scholarships in NY";
    const EVENT: &str = "Annual Scholarship Ball 2026";

    #[test]
    fn letter_interpolates_every_input() {
        let prospect = ProspectProfile {
            name: "TechCorp Inc.".to_string(),
            industry: "Technology".to_string(),
            last_gift_amount: 20_000.0,
            region: "NY, USA".to_string(),
        };

        let letter = compose_letter(&prospect, MISSION, EVENT, "Platinum Sponsor");

        assert!(letter.starts_with("Dear TechCorp Inc.,"));
        assert!(letter.contains(MISSION));
        assert!(letter.contains(EVENT));
        assert!(letter.contains("Platinum Sponsor"));
        assert!(letter.contains("Technology sector"));
        assert!(letter.contains("$20,000 in NY, USA"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults_instead_of_failing() {
        let prospect: ProspectProfile = serde_json::from_str("{}").expect("empty prospect");
        let letter = compose_letter(&prospect, MISSION, EVENT, "Gold Sponsor");

        assert!(letter.starts_with("Dear Valued Supporter,"));
        // Empty region interpolates as an empty slot, never a crash.
        assert!(letter.contains("$0 in ,"));
    }

    #[test]
    fn composition_is_deterministic() {
        let prospect = ProspectProfile::default();
        let first = compose_letter(&prospect, MISSION, EVENT, "Silver Sponsor");
        let second = compose_letter(&prospect, MISSION, EVENT, "Silver Sponsor");
        assert_eq!(first, second);
    }
}
