use dioxus::prelude::*;
use shared_ui::{Column, DataTable, Pagination};

use crate::list_state::{FilterQuery, ListState};

/// Empty-state text for a list of `noun` (plural, lower case).
fn empty_text(noun: &str, failed: bool, filtered: bool) -> String {
    if failed {
        format!("The {noun} could not be loaded.")
    } else if filtered {
        format!("No {noun} match these filters.")
    } else {
        format!("No {noun} yet.")
    }
}

/// "Showing 11-20 of 23 jobs", or empty when there is nothing to show.
fn range_summary(page: usize, page_size: usize, total: usize, noun: &str) -> String {
    if total == 0 || page == 0 {
        return String::new();
    }
    let first = (page - 1) * page_size + 1;
    let last = (page * page_size).min(total);
    format!("Showing {first}-{last} of {total} {noun}")
}

/// Table, summary line and pager over a [`ListState`].
///
/// Sorting and paging run on the fetched list. A failed load offers a retry
/// until the next load starts; while loading, skeleton rows show instead.
#[component]
pub fn ListTable<T: Clone + PartialEq + 'static, Q: FilterQuery>(
    state: ListState<T, Q>,
    columns: Vec<Column<T>>,
    noun: &'static str,
    on_select: EventHandler<T>,
) -> Element {
    let mut state = state;
    let table = &client::config().table;
    let view = state.view(&columns, table.page_size);
    let loading = *state.loading.read();
    let failed = *state.failed.read();
    let empty = empty_text(noun, failed && !loading, state.is_filtered());
    let summary = range_summary(view.page, table.page_size, view.total_items, noun);

    rsx! {
        div { class: "list-table",
            if failed && !loading {
                DataTable::<T> {
                    columns: columns.clone(),
                    rows: Vec::new(),
                    empty_text: empty,
                    on_retry: move |_| state.retry(),
                    sort: state.sort,
                    skeleton_rows: table.skeleton_rows,
                }
            } else {
                DataTable::<T> {
                    columns: columns.clone(),
                    rows: view.rows.clone(),
                    loading: loading,
                    empty_text: empty,
                    on_row_click: move |row: T| on_select.call(row),
                    sort: state.sort,
                    skeleton_rows: table.skeleton_rows,
                }
            }
            if !loading && !summary.is_empty() {
                div { class: "list-table-footer",
                    span { class: "list-table-summary", "{summary}" }
                    Pagination {
                        current_page: view.page,
                        total_pages: view.total_pages,
                        on_page_change: move |page: usize| state.set_page(page),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_state::use_fixed_list_state;
    use pretty_assertions::assert_eq;
    use shared_types::ListQuery;

    #[test]
    fn empty_text_by_state() {
        assert_eq!(empty_text("jobs", true, true), "The jobs could not be loaded.");
        assert_eq!(empty_text("jobs", false, true), "No jobs match these filters.");
        assert_eq!(empty_text("ratings", false, false), "No ratings yet.");
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![Column::new("id", "ID", |r: &Row| r.id.into())]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn retry_after_failure_shows_skeleton_rows() {
        fn app() -> Element {
            let state = use_fixed_list_state(Vec::<Row>::new(), ListQuery::default(), true, true);
            rsx! {
                ListTable::<Row, ListQuery> {
                    state,
                    columns: columns(),
                    noun: "jobs",
                    on_select: move |_| {},
                }
            }
        }
        let html = render(app);
        assert_eq!(
            html.matches("data-table-skeleton-row").count(),
            client::config().table.skeleton_rows
        );
        assert!(!html.contains("could not be loaded"));
        assert!(!html.contains("Retry"));
    }

    #[test]
    fn settled_failure_offers_retry() {
        fn app() -> Element {
            let state = use_fixed_list_state(Vec::<Row>::new(), ListQuery::default(), false, true);
            rsx! {
                ListTable::<Row, ListQuery> {
                    state,
                    columns: columns(),
                    noun: "jobs",
                    on_select: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("The jobs could not be loaded."));
        assert!(html.contains("Retry"));
        assert!(!html.contains("data-table-skeleton-row"));
    }

    #[test]
    fn summary_covers_partial_last_page() {
        assert_eq!(range_summary(2, 10, 23, "jobs"), "Showing 11-20 of 23 jobs");
        assert_eq!(range_summary(3, 10, 23, "jobs"), "Showing 21-23 of 23 jobs");
        assert_eq!(range_summary(1, 10, 0, "jobs"), "");
    }
}
