//! Page category constants.
//!
//! Every admin page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_product--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// One record with its lines.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview / stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
