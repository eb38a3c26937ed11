//! Photo references handed in by the storage collaborator.

use crate::identifiers::PhotoId;
use crate::time::PhysicalTime;
use serde::{Deserialize, Serialize};

/// Opaque reference to a stored photo. The core never reads photo bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef {
    /// Storage-assigned identifier
    pub photo_id: PhotoId,
    /// Location understood by the storage collaborator
    pub uri: String,
    /// Size in bytes
    pub byte_size: u64,
    /// Capture timestamp
    pub captured_at: PhysicalTime,
}

impl PhotoRef {
    /// Create a new photo reference.
    pub fn new(
        photo_id: PhotoId,
        uri: impl Into<String>,
        byte_size: u64,
        captured_at: PhysicalTime,
    ) -> Self {
        Self {
            photo_id,
            uri: uri.into(),
            byte_size,
            captured_at,
        }
    }
}
