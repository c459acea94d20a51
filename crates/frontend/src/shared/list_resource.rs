//! Load-once record list backing a list page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Records of one page plus their load status.
///
/// A failed load leaves `items` empty and keeps the message in `error`, so
/// the table still receives an array and shows its empty state.
pub struct ListResource<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T> ListResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start `fetch` immediately; `loading` stays true until it settles.
    pub fn load<F, Fut>(fetch: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let this = Self::pending();
        spawn_local(async move {
            this.settle(fetch().await);
        });
        this
    }

    fn pending() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// Store the fetch outcome and clear `loading`.
    fn settle(&self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.items.try_set(items);
                self.error.try_set(None);
            }
            Err(e) => {
                log::warn!("list load failed: {}", e);
                self.items.try_set(Vec::new());
                self.error.try_set(Some(e));
            }
        }
        self.loading.try_set(false);
    }

    /// Drop every record matching `pred`; returns how many were removed.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.items
            .try_update(|items| {
                let before = items.len();
                items.retain(|item| !pred(item));
                before - items.len()
            })
            .unwrap_or(0)
    }
}

/// Browser confirm dialog; false outside a browser.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_failed_load_leaves_empty_list_and_error() {
        Owner::new().with(|| {
            let list = ListResource::<u32>::pending();
            assert!(list.loading.get_untracked());

            list.settle(Err("Failed to parse products: eof".to_string()));
            assert!(list.items.get_untracked().is_empty());
            assert_eq!(list.error.get_untracked().as_deref(), Some("Failed to parse products: eof"));
            assert!(!list.loading.get_untracked());
        });
    }

    #[test]
    fn test_successful_load_then_remove() {
        Owner::new().with(|| {
            let list = ListResource::<u32>::pending();
            list.settle(Ok(vec![1, 2, 3, 4]));
            assert_eq!(list.items.get_untracked(), vec![1, 2, 3, 4]);
            assert_eq!(list.error.get_untracked(), None);
            assert!(!list.loading.get_untracked());

            assert_eq!(list.remove_where(|n| n % 2 == 0), 2);
            assert_eq!(list.items.get_untracked(), vec![1, 3]);
        });
    }
}
