pub mod audit;
pub mod awards;
pub mod cache;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod imports;
pub mod money;
pub mod opportunities;
pub mod outreach;
pub mod prospects;
pub mod reminders;
pub mod reports;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::award::{AwardAction, AwardTransition};
pub use domain::donor::{DonorKind, DonorRecord, ScoredProspect};
pub use domain::event::EventProjection;
pub use domain::opportunity::Opportunity;
pub use errors::{ApplicationError, InterfaceError};
pub use outreach::ProspectProfile;
pub use prospects::ProspectFilters;
