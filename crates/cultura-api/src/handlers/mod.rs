//! Route handlers organized by domain.

pub mod company;
pub mod dashboard;
pub mod health;
pub mod presence;
