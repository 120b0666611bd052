use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// Most entries the pager shows, ellipses included.
pub const MAX_VISIBLE_PAGES: usize = 7;

/// One entry in the pager's number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `total_items`. A zero page size yields zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The 1-based `page` of an already-fetched list. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Clamp `page` into `1..=total_pages` (1 when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page numbers and ellipses for `current` out of `total` pages.
///
/// Up to seven pages are listed in full. Beyond that: first page, an
/// ellipsis when `current > 3`, the window `current-1..=current+1` kept
/// inside `2..=total-1`, an ellipsis when `current < total-2`, last page.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }
    let current = clamp_page(current, total);
    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));
    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Previous/Next controls with a collapsed strip of page numbers.
///
/// Renders nothing unless there is more than one page.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let current = clamp_page(current_page, total_pages);
    let items = page_items(current, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                class: "pagination-prev",
                disabled: current == 1,
                onclick: move |_| on_page_change.call(current.saturating_sub(1).max(1)),
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 14, height: 14 }
                "Previous"
            }
            div { class: "pagination-pages",
                for (i, item) in items.into_iter().enumerate() {
                    {match item {
                        PageItem::Page(page) => rsx! {
                            button {
                                key: "p{page}",
                                r#type: "button",
                                class: "pagination-page",
                                "data-active": if page == current { "true" } else { "false" },
                                "aria-current": if page == current { "page" } else { "false" },
                                onclick: move |_| {
                                    if page != current {
                                        on_page_change.call(page);
                                    }
                                },
                                "{page}"
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            span { key: "e{i}", class: "pagination-ellipsis", "..." }
                        },
                    }}
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                class: "pagination-next",
                disabled: current == total_pages,
                onclick: move |_| on_page_change.call((current + 1).min(total_pages)),
                "Next"
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 14, height: 14 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(
            page_items(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
        assert!(!page_items(7, 7).contains(&Ellipsis));
    }

    #[test]
    fn middle_page_gets_both_ellipses() {
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn near_the_edges() {
        assert_eq!(
            page_items(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(4, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_items(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn never_more_than_seven_entries() {
        for total in 8..30 {
            for current in 1..=total {
                assert!(page_items(current, total).len() <= MAX_VISIBLE_PAGES);
            }
        }
    }

    #[test]
    fn zero_pages_is_empty() {
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn slice_returns_requested_page() {
        let records: Vec<usize> = (1..=23).collect();
        assert_eq!(page_slice(&records, 2, 10), &(11..=20).collect::<Vec<_>>()[..]);
        assert_eq!(page_slice(&records, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&records, 4, 10).is_empty());
        assert!(page_slice(&records, 0, 10).is_empty());
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening tag of the element whose attributes mention `needle`.
    fn tag_with<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).unwrap();
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..end]
    }

    #[test]
    fn first_page_disables_previous_only() {
        fn app() -> Element {
            rsx! { Pagination { current_page: 1, total_pages: 3, on_page_change: move |_| {} } }
        }
        let html = render(app);
        assert!(tag_with(&html, "pagination-prev").contains("disabled"));
        assert!(!tag_with(&html, "pagination-next").contains("disabled"));
    }

    #[test]
    fn last_page_disables_next() {
        fn app() -> Element {
            rsx! { Pagination { current_page: 3, total_pages: 3, on_page_change: move |_| {} } }
        }
        let html = render(app);
        assert!(tag_with(&html, "pagination-next").contains("disabled"));
        assert!(!tag_with(&html, "pagination-prev").contains("disabled"));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    }

    #[test]
    fn zero_pages_renders_nothing() {
        fn app() -> Element {
            rsx! { Pagination { current_page: 1, total_pages: 0, on_page_change: move |_| {} } }
        }
        assert!(!render(app).contains("pagination"));
    }

    #[test]
    fn single_page_renders_nothing() {
        fn app() -> Element {
            rsx! { Pagination { current_page: 1, total_pages: 1, on_page_change: move |_| {} } }
        }
        assert!(!render(app).contains("pagination"));
    }
}
