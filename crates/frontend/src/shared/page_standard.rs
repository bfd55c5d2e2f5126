//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"u501_booking--usecase"`)
//!   - `data-page-category` with one of the constants below

/// List of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case wizard / action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}
