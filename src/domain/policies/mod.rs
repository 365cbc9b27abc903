//! Domain Policies
//!
//! Business rules that govern rotation.
//! These are pure functions that operate on domain values.

mod retention_policy;

pub use retention_policy::{
    age_days, is_expired, RetentionAction, RetentionDecision, RetentionPolicy,
};
