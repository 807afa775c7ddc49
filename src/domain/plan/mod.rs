//! Plan module - Subscription tier vocabulary.

mod tier;

pub use tier::PlanTier;
