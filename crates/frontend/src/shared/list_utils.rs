/// Caller-side helpers for list pages: search, sort and page the full record
/// set before handing a slice to `DataTable`.
use crate::shared::data_table::{PaginationConfig, SortDirection, SortState, TableEvent};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Records that can be matched against a search query
pub trait Searchable {
    /// Case-insensitive match of `query` (already lowercased) against the
    /// record's searchable fields
    fn matches_filter(&self, query: &str) -> bool;
}

/// Records that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring test for `Searchable` impls.
pub fn contains_ci(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

/// Highlight search hits in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, filter);
    if parts.len() == 1 && !parts[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let views: Vec<AnyView> = parts
        .into_iter()
        .map(|(segment, hit)| {
            if hit {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{views}</> }.into_any()
}

/// Splits `text` into `(segment, is_match)` pieces.
fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    // Offsets found in the lowercased text index into `text`, so every char
    // must keep its UTF-8 width when lowercased; otherwise skip highlighting
    if filter.is_empty() || !lowercase_keeps_width(text) || !lowercase_keeps_width(filter) {
        return vec![(text.to_string(), false)];
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

fn lowercase_keeps_width(s: &str) -> bool {
    s.chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8())
}

/// Sort a list by field, stable
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if direction.is_ascending() { cmp } else { cmp.reverse() }
    });
}

/// Filter a list by search query; blank query keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// What a list page asks of its data: search text, sort and page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub search_query: String,
    pub sort: SortState,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size,
        }
    }

    /// Fold a table event into the query.
    pub fn apply_event(&mut self, event: TableEvent) {
        match event {
            TableEvent::PageChangeRequested(page) => self.page = page,
            TableEvent::SearchSubmitted(query) => {
                self.search_query = query;
                self.page = 1;
            }
            TableEvent::SortChanged(sort) => {
                self.sort = sort;
                self.page = 1;
            }
        }
    }
}

/// One page of a filtered, sorted list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSlice<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl<T> ListSlice<T> {
    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig::new(self.page, self.total_pages)
    }
}

/// Filter, sort, then cut out the requested page.
pub fn apply_query<T>(all: &[T], query: &ListQuery) -> ListSlice<T>
where
    T: Searchable + Sortable + Clone,
{
    let mut data = filter_list(all, &query.search_query);
    if let Some(field) = query.sort.field.as_deref() {
        sort_list(&mut data, field, query.sort.direction);
    }

    let total_count = data.len();
    let total_pages = total_pages(total_count, query.page_size);
    let start = query.page.saturating_sub(1) * query.page_size;
    let end = (start + query.page_size).min(total_count);
    let items = data.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    ListSlice {
        items,
        total_count,
        total_pages,
        page: query.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Brand {
        name: &'static str,
        products: u32,
    }

    impl Searchable for Brand {
        fn matches_filter(&self, query: &str) -> bool {
            contains_ci(self.name, query)
        }
    }

    impl Sortable for Brand {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "products" => self.products.cmp(&other.products),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn brands() -> Vec<Brand> {
        vec![
            Brand { name: "Holcim", products: 12 },
            Brand { name: "Tokyo Cement", products: 8 },
            Brand { name: "Melwa", products: 15 },
            Brand { name: "Dulux", products: 30 },
            Brand { name: "Rocell", products: 45 },
        ]
    }

    fn names(slice: &ListSlice<Brand>) -> Vec<&'static str> {
        slice.items.iter().map(|b| b.name).collect()
    }

    #[test]
    fn test_pages_are_cut_from_filtered_list() {
        let mut query = ListQuery::new(2);
        let slice = apply_query(&brands(), &query);
        assert_eq!(slice.total_count, 5);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(names(&slice), ["Holcim", "Tokyo Cement"]);

        query.apply_event(TableEvent::PageChangeRequested(3));
        assert_eq!(names(&apply_query(&brands(), &query)), ["Rocell"]);
    }

    #[test]
    fn test_search_resets_page_and_ignores_case() {
        let mut query = ListQuery::new(2);
        query.apply_event(TableEvent::PageChangeRequested(2));
        query.apply_event(TableEvent::SearchSubmitted("  CEMENT ".into()));
        assert_eq!(query.page, 1);
        let slice = apply_query(&brands(), &query);
        assert_eq!(names(&slice), ["Tokyo Cement"]);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn test_no_match_gives_zero_pages() {
        let mut query = ListQuery::new(10);
        query.apply_event(TableEvent::SearchSubmitted("grundfos".into()));
        let slice = apply_query(&brands(), &query);
        assert!(slice.items.is_empty());
        assert_eq!(slice.pagination(), PaginationConfig::new(1, 0));
    }

    #[test]
    fn test_sort_event_orders_data() {
        let mut query = ListQuery::new(10);
        query.apply_event(TableEvent::SortChanged(SortState::by("products", SortDirection::Desc)));
        let slice = apply_query(&brands(), &query);
        assert_eq!(names(&slice), ["Rocell", "Dulux", "Melwa", "Holcim", "Tokyo Cement"]);
    }

    #[test]
    fn test_unsorted_keeps_source_order() {
        let slice = apply_query(&brands(), &ListQuery::new(10));
        assert_eq!(slice.items, brands());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Tokyo Cement", "cem"),
            vec![("Tokyo ".to_string(), false), ("Cem".to_string(), true), ("ent".to_string(), false)]
        );
        assert_eq!(split_matches("Dulux", "xyz"), vec![("Dulux".to_string(), false)]);
    }

    #[test]
    fn test_split_matches_width_changing_lowercase() {
        // 'İ' grows and 'ẞ' shrinks when lowercased; total length stays the same
        assert_eq!(split_matches("İẞ", "ß"), vec![("İẞ".to_string(), false)]);
        assert_eq!(split_matches("Straße", "ẞ"), vec![("Straße".to_string(), false)]);
        assert_eq!(
            split_matches("Ёлка", "ё"),
            vec![("Ё".to_string(), true), ("лка".to_string(), false)]
        );
    }
}
