//! Personal task entities.

pub mod model;

pub use model::Task;
