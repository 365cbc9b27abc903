//! Volume entity
//!
//! A logical volume (or snapshot) as reported by the volume manager.

use std::fmt;

/// Reference to a logical volume inside a volume group.
///
/// The rotation engine treats both fields as opaque, apart from parsing
/// snapshot names out of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeRef {
    /// Volume group name
    pub group: String,
    /// Logical volume name
    pub name: String,
}

impl VolumeRef {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// True if this volume lives in `group`
    pub fn in_group(&self, group: &str) -> bool {
        self.group == group
    }
}

/// Renders as `group/name`, the path form LVM tools accept.
impl fmt::Display for VolumeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.name)
    }
}
