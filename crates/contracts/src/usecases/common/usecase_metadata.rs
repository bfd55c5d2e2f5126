/// UseCase metadata shown on the use case page
pub trait UseCaseMetadata {
    /// Display name for the UI
    fn display_name() -> &'static str;

    /// One-line summary under the title
    fn description() -> &'static str {
        ""
    }
}
