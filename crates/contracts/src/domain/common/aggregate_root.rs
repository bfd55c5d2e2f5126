/// Trait for aggregate roots read from the backend
///
/// Carries the static class metadata used to build collection paths and UI
/// captions.
pub trait AggregateRoot {
    /// Aggregate identifier type
    type Id;

    /// Record id
    fn id(&self) -> &Self::Id;

    // ============================================================================
    // Class metadata (static)
    // ============================================================================

    /// Collection name on the backend (e.g. "services")
    fn collection_name() -> &'static str;

    /// List caption for UI (plural)
    fn list_name() -> &'static str;
}
