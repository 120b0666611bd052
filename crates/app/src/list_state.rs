//! State shared by every entity list page.
//!
//! Pages fetch the full filtered list once per applied query, then sort and
//! slice it locally for the table and the pager.

use std::future::Future;

use client::{ApiClient, RequestGuard};
use dioxus::prelude::*;
use shared_types::{AppError, ListQuery, UserQuery};
use shared_ui::{
    clamp_page, page_slice, sort_rows, total_pages, use_toast, Column, SortState,
};

use crate::auth::use_auth;
use crate::notify::report_error;

/// The parts of a list query the filter bar edits.
pub trait FilterQuery: Clone + PartialEq + 'static {
    fn search(&self) -> &str;

    /// The status filter key, empty for "all".
    fn status(&self) -> &str;

    fn with_search(&self, search: String) -> Self;

    fn with_status(&self, status: String) -> Self;

    /// Drop search text and status, keeping anything page-fixed.
    fn cleared(&self) -> Self;
}

impl FilterQuery for ListQuery {
    fn search(&self) -> &str {
        &self.search
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn with_search(&self, search: String) -> Self {
        Self {
            search,
            ..self.clone()
        }
    }

    fn with_status(&self, status: String) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    fn cleared(&self) -> Self {
        Self::default()
    }
}

/// Users are filtered by KYC status; the role is fixed by the page.
impl FilterQuery for UserQuery {
    fn search(&self) -> &str {
        &self.search
    }

    fn status(&self) -> &str {
        &self.kyc_status
    }

    fn with_search(&self, search: String) -> Self {
        Self {
            search,
            ..self.clone()
        }
    }

    fn with_status(&self, kyc_status: String) -> Self {
        Self {
            kyc_status,
            ..self.clone()
        }
    }

    fn cleared(&self) -> Self {
        Self {
            role: self.role,
            ..Self::default()
        }
    }
}

/// The page of rows handed to the table, plus pager inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Sort the full list, then cut out the requested page.
///
/// `page` is clamped so a shrinking list never leaves the pager past the end.
pub fn page_view<T: Clone>(
    rows: &[T],
    columns: &[Column<T>],
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
) -> PageView<T> {
    let sorted = sort_rows(rows, columns, sort);
    let total = total_pages(sorted.len(), page_size);
    let page = clamp_page(page, total);
    PageView {
        rows: page_slice(&sorted, page, page_size).to_vec(),
        page,
        total_pages: total,
        total_items: sorted.len(),
    }
}

/// Signals behind one list page.
///
/// The applied `query` is what was last sent to the backend; `search_input`
/// is the text box, applied on submit.
pub struct ListState<T: 'static, Q: 'static> {
    pub rows: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub failed: Signal<bool>,
    pub query: Signal<Q>,
    pub search_input: Signal<String>,
    pub page: Signal<usize>,
    pub sort: Signal<Option<SortState>>,
    reload: Signal<u64>,
}

impl<T: 'static, Q: 'static> Clone for ListState<T, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, Q: 'static> Copy for ListState<T, Q> {}

impl<T: 'static, Q: 'static> PartialEq for ListState<T, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.query == other.query
    }
}

impl<T: Clone + 'static, Q: FilterQuery> ListState<T, Q> {
    /// Apply the search box text.
    pub fn submit_search(&mut self) {
        let search = self.search_input.peek().trim().to_string();
        let next = self.query.peek().with_search(search);
        self.apply(next);
    }

    /// Status filters apply as soon as they change.
    pub fn set_status(&mut self, status: String) {
        let next = self.query.peek().with_status(status);
        self.apply(next);
    }

    /// Clear search text and status filter.
    pub fn reset(&mut self) {
        self.search_input.set(String::new());
        let next = self.query.peek().cleared();
        self.apply(next);
    }

    /// Re-run the current query.
    pub fn retry(&mut self) {
        *self.reload.write() += 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set(page);
    }

    /// Whether any filter is applied, for the Reset button.
    pub fn is_filtered(&self) -> bool {
        let query = self.query.read();
        !query.search().is_empty() || !query.status().is_empty()
    }

    /// Replace the first row matching `matches`, e.g. after a KYC decision.
    pub fn replace_row(&mut self, matches: impl Fn(&T) -> bool, row: T) {
        let mut rows = self.rows.write();
        if let Some(slot) = rows.iter_mut().find(|r| matches(r)) {
            *slot = row;
        }
    }

    /// Current page of rows, sorted by the table's sort state.
    pub fn view(&self, columns: &[Column<T>], page_size: usize) -> PageView<T> {
        page_view(
            &self.rows.read(),
            columns,
            *self.sort.read(),
            *self.page.read(),
            page_size,
        )
    }

    fn apply(&mut self, next: Q) {
        self.page.set(1);
        if *self.query.peek() != next {
            self.query.set(next);
        }
    }
}

/// Create list state and keep it fetched.
///
/// `fetch` runs whenever the applied query changes or on retry. Failures
/// are reported as toasts (a `401` also ends the session), clear the rows
/// and mark the list failed so the table offers a retry.
pub fn use_list_state<T, Q, F, Fut>(
    what: &'static str,
    initial: impl FnOnce() -> Q,
    fetch: F,
) -> ListState<T, Q>
where
    T: Clone + 'static,
    Q: FilterQuery,
    F: Fn(ApiClient, Q) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
{
    let auth = use_auth();
    let toasts = use_toast();
    use_list_fetch(
        what,
        initial,
        move |query| fetch(auth.client(), query),
        move |err: AppError| report_error(auth, toasts, &format!("Could not load {what}"), &err),
    )
}

/// The fetch loop behind [`use_list_state`], without the app contexts.
///
/// Each run takes a [`RequestGuard`] ticket; a response that is no longer
/// current is dropped, whichever order the responses arrive in.
pub fn use_list_fetch<T, Q, F, Fut>(
    what: &'static str,
    initial: impl FnOnce() -> Q,
    fetch: F,
    on_error: impl FnMut(AppError) + 'static,
) -> ListState<T, Q>
where
    T: Clone + 'static,
    Q: FilterQuery,
    F: Fn(Q) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
{
    let mut rows = use_signal(Vec::<T>::new);
    let mut loading = use_signal(|| true);
    let mut failed = use_signal(|| false);
    let query = use_signal(initial);
    let search_input = use_signal(String::new);
    let page = use_signal(|| 1usize);
    let sort = use_signal(|| None::<SortState>);
    let reload = use_signal(|| 0u64);
    let mut guard = use_signal(RequestGuard::new);
    let on_error = use_callback(on_error);

    use_effect(move || {
        let q = query.read().clone();
        let _ = reload();
        let ticket = guard.write().issue();
        loading.set(true);
        let request = fetch(q);
        spawn(async move {
            let result = request.await;
            if !guard.peek().is_current(ticket) {
                tracing::debug!(what, "Dropping superseded list response");
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => {
                    tracing::debug!(what, count = list.len(), "List loaded");
                    rows.set(list);
                    failed.set(false);
                }
                Err(err) => {
                    rows.set(Vec::new());
                    failed.set(true);
                    on_error.call(err);
                }
            }
        });
    });

    ListState {
        rows,
        loading,
        failed,
        query,
        search_input,
        page,
        sort,
        reload,
    }
}

/// List state with fixed contents and no fetch, for rendering tests.
#[cfg(test)]
pub(crate) fn use_fixed_list_state<T: Clone + 'static, Q: FilterQuery>(
    rows: Vec<T>,
    query: Q,
    loading: bool,
    failed: bool,
) -> ListState<T, Q> {
    ListState {
        rows: use_signal(move || rows),
        loading: use_signal(move || loading),
        failed: use_signal(move || failed),
        query: use_signal(move || query),
        search_input: use_signal(String::new),
        page: use_signal(|| 1usize),
        sort: use_signal(|| None::<SortState>),
        reload: use_signal(|| 0u64),
    }
}
