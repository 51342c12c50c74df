pub mod award;
pub mod donor;
pub mod event;
pub mod opportunity;
