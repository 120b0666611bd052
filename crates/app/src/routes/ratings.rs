use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{select_options, AppError, ListQuery, Rating, RatingStatus, StatusVocabulary};
use shared_ui::{Column, DetailItem, DetailList, DetailSection, Sheet, SheetContent, SheetHeader};

use crate::components::{ListFilters, ListTable, StatusBadge};
use crate::format_helpers::{format_opt_date, format_score, or_dash, stars};
use crate::list_state::use_list_state;

/// Longest comment shown in the table before it is cut.
const COMMENT_PREVIEW_CHARS: usize = 60;

fn comment_preview(comment: Option<&str>) -> String {
    let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) else {
        return String::new();
    };
    if comment.chars().count() <= COMMENT_PREVIEW_CHARS {
        return comment.to_string();
    }
    let cut: String = comment.chars().take(COMMENT_PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}

fn rating_columns() -> Vec<Column<Rating>> {
    vec![
        Column::new("from", "From", |r: &Rating| r.from_user.as_deref().into()).sortable(),
        Column::new("to", "To", |r: &Rating| r.to_user.as_deref().into()).sortable(),
        Column::new("score", "Score", |r: &Rating| r.score.into())
            .sortable()
            .render(|r: &Rating| {
                let shown = stars(r.stars());
                let score = format_score(r.score);
                rsx! { span { class: "cell-stars", title: "{score}", "{shown}" } }
            }),
        Column::new("comment", "Comment", |r: &Rating| r.comment.as_deref().into()).render(
            |r: &Rating| {
                let preview = comment_preview(r.comment.as_deref());
                rsx! { span { class: "cell-muted", "{preview}" } }
            },
        ),
        Column::new("status", "Visibility", |r: &Rating| r.status.label().into())
            .sortable()
            .render(|r: &Rating| rsx! { StatusBadge { status: r.status } }),
    ]
}

async fn fetch_ratings(client: ApiClient, query: ListQuery) -> Result<Vec<Rating>, AppError> {
    client.list_ratings(&query).await
}

#[component]
pub fn Ratings() -> Element {
    let state = use_list_state("ratings", ListQuery::default, fetch_ratings);
    let columns = use_hook(rating_columns);
    let mut selected = use_signal(|| Option::<Rating>::None);

    rsx! {
        div { class: "list-page",
            ListFilters::<Rating, ListQuery> {
                state: state,
                placeholder: "Search reviewer, subject or comment",
                status_label: "Visibility",
                status_options: select_options::<RatingStatus>(),
            }
            ListTable::<Rating, ListQuery> {
                state: state,
                columns: columns,
                noun: "ratings",
                on_select: move |rating: Rating| selected.set(Some(rating)),
            }
        }

        if let Some(rating) = selected() {
            RatingSheet { rating: rating, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn RatingSheet(rating: Rating, on_close: EventHandler<()>) -> Element {
    let shown = stars(rating.stars());
    let score = format_score(rating.score);
    let comment = rating
        .comment
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "No comment left.".to_string());

    rsx! {
        Sheet { open: true, on_close: on_close,
            SheetHeader { title: "Rating", description: format!("Rating {}", rating.id), on_close: on_close }
            SheetContent {
                DetailList {
                    DetailItem { label: "From", value: or_dash(rating.from_user.as_deref()) }
                    DetailItem { label: "To", value: or_dash(rating.to_user.as_deref()) }
                    DetailItem { label: "Reviewer role", value: rating.reviewer_role.label() }
                    DetailItem { label: "Score",
                        span { class: "cell-stars", "{shown}" }
                        span { class: "detail-muted", " ({score})" }
                    }
                    DetailItem { label: "Visibility",
                        StatusBadge { status: rating.status }
                    }
                    DetailItem { label: "Posted", value: format_opt_date(rating.created_at.as_deref()) }
                }
                DetailSection { title: "Comment",
                    p { class: "detail-text", "{comment}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_comments_are_kept() {
        assert_eq!(comment_preview(Some("  Rajin dan tepat waktu ")), "Rajin dan tepat waktu");
        assert_eq!(comment_preview(None), "");
        assert_eq!(comment_preview(Some("   ")), "");
    }

    #[test]
    fn long_comments_are_cut() {
        let long = "a".repeat(80);
        let preview = comment_preview(Some(&long));
        assert_eq!(preview.chars().count(), COMMENT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn score_column_sorts_numerically() {
        let columns = rating_columns();
        let score = columns.iter().find(|c| c.key == "score").unwrap();
        let rating = Rating {
            score: Some(4.0),
            ..Default::default()
        };
        assert!(score.sortable);
        assert_eq!((score.value)(&rating).to_string(), "4");
    }
}
