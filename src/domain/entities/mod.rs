//! Domain Entities

mod volume;

pub use volume::VolumeRef;
