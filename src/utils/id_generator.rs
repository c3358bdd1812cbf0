//! Identifier generation for new records.

use uuid::Uuid;

/// Source of identifiers for newly created records.
///
/// Implementations must never return the same value twice.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random (version 4) UUIDs.
///
/// # Examples
///
/// ```ignore
/// let id = UuidV4Generator.next_id();
/// assert_eq!(id.get_version_num(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
