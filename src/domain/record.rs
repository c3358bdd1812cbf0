//! Contract shared by every stored resource.

use std::fmt::Debug;
use uuid::Uuid;

/// A persisted resource with a store-assigned identifier.
///
/// `New` is the set of writable attributes. It is the payload of a create and
/// the replacement value of a whole-record update; `id` and `created_at` are
/// never part of it.
pub trait Record: Debug + Clone + Send + Sync + 'static {
    type New: Debug + Clone + Send + Sync + 'static;

    /// Singular resource name used in messages and logs (e.g. `"city"`).
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}
