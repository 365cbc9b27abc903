//! Application Layer
//!
//! Use cases that drive the domain through its ports.

pub mod rotate;

pub use rotate::{RotateUseCase, RotationReport};
