use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowDown, LdArrowUp, LdArrowUpDown, LdRotateCw};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};
use crate::components::skeleton::Skeleton;

// ─── Cell values ───────────────────────────────────────────────────────

/// Raw value of a cell, used for sorting and default rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
        }
    }

    /// Ordering used by column sorting.
    ///
    /// Numbers compare numerically and text lexically. Values of different
    /// kinds order as empty, then numbers, then text.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(s: Option<&str>) -> Self {
        s.map(CellValue::from).unwrap_or_default()
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(n: Option<f64>) -> Self {
        n.map(CellValue::Number).unwrap_or_default()
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        CellValue::Number(n as f64)
    }
}

// ─── Columns ───────────────────────────────────────────────────────────

/// Custom cell content for a row.
pub type CellRenderer<R> = Rc<dyn Fn(&R) -> Element>;

/// Describes one table column over rows of type `R`.
pub struct Column<R> {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    /// Raw value accessor. Drives sorting and the default cell text.
    pub value: fn(&R) -> CellValue,
    pub render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, title: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            title,
            sortable: false,
            value,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: impl Fn(&R) -> Element + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    fn cell(&self, row: &R) -> Element {
        match &self.render {
            Some(render) => render(row),
            None => {
                let text = (self.value)(row).to_string();
                rsx! { "{text}" }
            }
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            sortable: self.sortable,
            value: self.value,
            render: self.render.clone(),
        }
    }
}

// Accessors are not compared; two columns with the same key are assumed to read the same field.
impl<R> PartialEq for Column<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.title == other.title
            && self.sortable == other.sortable
            && match (&self.render, &other.render) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

// ─── Sorting ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn aria(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    /// Next state after a click on the header of `key`.
    ///
    /// The same column flips direction; a different column starts ascending.
    pub fn toggle(current: Option<SortState>, key: &'static str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key,
                direction: match state.direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                },
            },
            _ => SortState {
                key,
                direction: SortDirection::Asc,
            },
        }
    }
}

/// Return a sorted copy of `rows`. The input is never reordered.
///
/// The sort is stable. Unknown or non-sortable keys keep the input order.
pub fn sort_rows<R: Clone>(rows: &[R], columns: &[Column<R>], sort: Option<SortState>) -> Vec<R> {
    let mut out = rows.to_vec();
    let Some(sort) = sort else {
        return out;
    };
    let Some(column) = columns.iter().find(|c| c.key == sort.key && c.sortable) else {
        return out;
    };
    let value = column.value;
    out.sort_by(|a, b| {
        let ord = value(a).compare(&value(b));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

// ─── Component ─────────────────────────────────────────────────────────

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<R: Clone + PartialEq + 'static> {
    pub columns: Vec<Column<R>>,
    pub rows: Vec<R>,
    #[props(default = false)]
    pub loading: bool,
    /// Shown verbatim when there are no rows and nothing is loading.
    #[props(default = "No data found".to_string(), into)]
    pub empty_text: String,
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
    #[props(default)]
    pub on_row_click: Option<EventHandler<R>>,
    /// Hoisted sort state. When absent the table keeps its own.
    #[props(default)]
    pub sort: Option<Signal<Option<SortState>>>,
    #[props(default = 5)]
    pub skeleton_rows: usize,
}

/// Sortable, loading- and empty-aware grid over homogeneous rows.
///
/// The table never paginates; callers slice the rows they pass in.
#[component]
pub fn DataTable<R: Clone + PartialEq + 'static>(props: DataTableProps<R>) -> Element {
    let local_sort = use_signal(|| None::<SortState>);
    let mut sort = props.sort.unwrap_or(local_sort);
    let current = *sort.read();

    let rows = sort_rows(&props.rows, &props.columns, current);
    let column_count = props.columns.len().max(1);
    let clickable = props.on_row_click.is_some();
    let empty_text = props.empty_text.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in props.columns.iter() {
                            {
                                let key = column.key;
                                let title = column.title;
                                let sortable = column.sortable;
                                let active = current.filter(|s| s.key == key);
                                let icon = match active.map(|s| s.direction) {
                                    Some(SortDirection::Asc) => rsx! { Icon::<LdArrowUp> { icon: LdArrowUp, width: 12, height: 12 } },
                                    Some(SortDirection::Desc) => rsx! { Icon::<LdArrowDown> { icon: LdArrowDown, width: 12, height: 12 } },
                                    None => rsx! { Icon::<LdArrowUpDown> { icon: LdArrowUpDown, width: 12, height: 12 } },
                                };
                                rsx! {
                                    th {
                                        key: "{key}",
                                        class: if sortable { "data-table-th sortable" } else { "data-table-th" },
                                        "aria-sort": active.map(|s| s.direction.aria()).unwrap_or("none"),
                                        onclick: move |_| {
                                            if sortable {
                                                let next = SortState::toggle(*sort.peek(), key);
                                                sort.set(Some(next));
                                            }
                                        },
                                        span { "{title}" }
                                        if sortable {
                                            span { class: "data-table-sort-icon", {icon} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    if props.loading {
                        for i in 0..props.skeleton_rows {
                            tr { key: "skeleton-{i}", class: "data-table-skeleton-row",
                                for j in 0..column_count {
                                    td { key: "{j}", Skeleton { class: "data-table-skeleton" } }
                                }
                            }
                        }
                    } else if rows.is_empty() {
                        tr { class: "data-table-empty-row",
                            td { colspan: "{column_count}",
                                div { class: "data-table-empty",
                                    p { class: "data-table-empty-text", "{empty_text}" }
                                    if let Some(on_retry) = props.on_retry {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: move |_| on_retry.call(()),
                                            Icon::<LdRotateCw> { icon: LdRotateCw, width: 14, height: 14 }
                                            "Retry"
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        for (i, row) in rows.iter().enumerate() {
                            {
                                let clicked = row.clone();
                                let on_row_click = props.on_row_click;
                                rsx! {
                                    tr {
                                        key: "{i}",
                                        class: if clickable { "data-table-row clickable" } else { "data-table-row" },
                                        onclick: move |_| {
                                            if let Some(handler) = &on_row_click {
                                                handler.call(clicked.clone());
                                            }
                                        },
                                        for column in props.columns.iter() {
                                            td { class: "data-table-cell", {column.cell(row)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
