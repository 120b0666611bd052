use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{select_options, AppError, Job, JobStatus, ListQuery, StatusVocabulary};
use shared_ui::{Column, DetailItem, DetailList, DetailSection, Sheet, SheetContent, SheetHeader};

use crate::components::{ListFilters, ListTable, StatusBadge};
use crate::format_helpers::{format_currency, format_date_human, format_opt_date, or_dash};
use crate::list_state::use_list_state;

fn job_columns() -> Vec<Column<Job>> {
    vec![
        Column::new("title", "Title", |j: &Job| j.title.as_str().into()).sortable(),
        Column::new("employer", "Employer", |j: &Job| j.employer_name.as_deref().into())
            .sortable(),
        Column::new("location", "Location", |j: &Job| j.location.as_deref().into()),
        Column::new("wage", "Wage", |j: &Job| j.wage.into())
            .sortable()
            .render(|j: &Job| {
                let wage = format_currency(j.wage);
                rsx! { span { class: "cell-number", "{wage}" } }
            }),
        Column::new("applicants", "Applicants", |j: &Job| j.applicant_count.into())
            .sortable(),
        Column::new("status", "Status", |j: &Job| j.status.label().into())
            .sortable()
            .render(|j: &Job| rsx! { StatusBadge { status: j.status } }),
        Column::new("created", "Created", |j: &Job| j.created_at.as_deref().into())
            .sortable()
            .render(|j: &Job| {
                let date = format_opt_date(j.created_at.as_deref());
                rsx! { "{date}" }
            }),
    ]
}

async fn fetch_jobs(client: ApiClient, query: ListQuery) -> Result<Vec<Job>, AppError> {
    client.list_jobs(&query).await
}

#[component]
pub fn Jobs() -> Element {
    let state = use_list_state("jobs", ListQuery::default, fetch_jobs);
    let columns = use_hook(job_columns);
    let mut selected = use_signal(|| Option::<Job>::None);

    rsx! {
        div { class: "list-page",
            ListFilters::<Job, ListQuery> {
                state: state,
                placeholder: "Search title, employer or location",
                status_label: "Status",
                status_options: select_options::<JobStatus>(),
            }
            ListTable::<Job, ListQuery> {
                state: state,
                columns: columns,
                noun: "jobs",
                on_select: move |job: Job| selected.set(Some(job)),
            }
        }

        if let Some(job) = selected() {
            JobSheet { job: job, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn JobSheet(job: Job, on_close: EventHandler<()>) -> Element {
    let description = job
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());
    let created = job
        .created_at
        .as_deref()
        .map(format_date_human)
        .unwrap_or_default();

    rsx! {
        Sheet { open: true, on_close: on_close,
            SheetHeader { title: job.title.clone(), description: "Job posting", on_close: on_close }
            SheetContent {
                DetailList {
                    DetailItem { label: "Job ID", value: job.id.clone() }
                    DetailItem { label: "Employer", value: or_dash(job.employer_name.as_deref()) }
                    DetailItem { label: "Location", value: or_dash(job.location.as_deref()) }
                    DetailItem { label: "Wage", value: format_currency(job.wage) }
                    DetailItem { label: "Applicants", value: job.applicant_count.to_string() }
                    DetailItem { label: "Status",
                        StatusBadge { status: job.status }
                    }
                    DetailItem { label: "Created", value: created }
                }
                DetailSection { title: "Description",
                    p { class: "detail-text", "{description}" }
                }
            }
        }
    }
}
