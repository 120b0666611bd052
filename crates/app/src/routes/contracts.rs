use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{select_options, AppError, Contract, ContractStatus, ListQuery, StatusVocabulary};
use shared_ui::{Column, DetailItem, DetailList, DetailSection, Sheet, SheetContent, SheetHeader};

use crate::components::{ChainHash, ListFilters, ListTable, StatusBadge};
use crate::format_helpers::{format_currency, format_opt_date, format_period, or_dash};
use crate::list_state::use_list_state;

fn contract_columns() -> Vec<Column<Contract>> {
    vec![
        Column::new("id", "ID", |c: &Contract| c.id.as_str().into())
            .sortable()
            .render(|c: &Contract| {
                let id = c.id.clone();
                rsx! { code { class: "cell-id", "{id}" } }
            }),
        Column::new("job", "Job", |c: &Contract| c.job_title.as_deref().into()).sortable(),
        Column::new("worker", "Worker", |c: &Contract| c.worker_name.as_deref().into())
            .sortable(),
        Column::new("employer", "Employer", |c: &Contract| {
            c.employer_name.as_deref().into()
        })
        .sortable(),
        Column::new("wage", "Wage", |c: &Contract| c.wage.into())
            .sortable()
            .render(|c: &Contract| {
                let wage = format_currency(c.wage);
                rsx! { span { class: "cell-number", "{wage}" } }
            }),
        Column::new("period", "Period", |c: &Contract| c.start_date.as_deref().into())
            .sortable()
            .render(|c: &Contract| {
                let period = format_period(c.start_date.as_deref(), c.end_date.as_deref());
                rsx! { "{period}" }
            }),
        Column::new("status", "Status", |c: &Contract| c.status.label().into())
            .sortable()
            .render(|c: &Contract| rsx! { StatusBadge { status: c.status } }),
        Column::new("hash", "Chain ref", |c: &Contract| c.tx_hash.as_deref().into())
            .render(|c: &Contract| rsx! { ChainHash { value: c.tx_hash.clone() } }),
    ]
}

async fn fetch_contracts(client: ApiClient, query: ListQuery) -> Result<Vec<Contract>, AppError> {
    client.list_contracts(&query).await
}

#[component]
pub fn Contracts() -> Element {
    let state = use_list_state("contracts", ListQuery::default, fetch_contracts);
    let columns = use_hook(contract_columns);
    let mut selected = use_signal(|| Option::<Contract>::None);

    rsx! {
        div { class: "list-page",
            ListFilters::<Contract, ListQuery> {
                state: state,
                placeholder: "Search job, worker or employer",
                status_label: "Status",
                status_options: select_options::<ContractStatus>(),
            }
            ListTable::<Contract, ListQuery> {
                state: state,
                columns: columns,
                noun: "contracts",
                on_select: move |contract: Contract| selected.set(Some(contract)),
            }
        }

        if let Some(contract) = selected() {
            ContractSheet { contract: contract, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn ContractSheet(contract: Contract, on_close: EventHandler<()>) -> Element {
    let title = contract
        .job_title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| format!("Contract {}", contract.id));

    rsx! {
        Sheet { open: true, on_close: on_close,
            SheetHeader { title: title, description: "Digital contract", on_close: on_close }
            SheetContent {
                DetailList {
                    DetailItem { label: "Contract ID", value: contract.id.clone() }
                    DetailItem { label: "Worker", value: or_dash(contract.worker_name.as_deref()) }
                    DetailItem { label: "Employer", value: or_dash(contract.employer_name.as_deref()) }
                    DetailItem { label: "Wage", value: format_currency(contract.wage) }
                    DetailItem { label: "Start", value: format_opt_date(contract.start_date.as_deref()) }
                    DetailItem { label: "End", value: format_opt_date(contract.end_date.as_deref()) }
                    DetailItem { label: "Status",
                        StatusBadge { status: contract.status }
                    }
                    DetailItem { label: "Signed", value: format_opt_date(contract.created_at.as_deref()) }
                }
                DetailSection { title: "Chain record",
                    DetailList {
                        DetailItem { label: "Transaction",
                            ChainHash { value: contract.tx_hash.clone() }
                        }
                    }
                    if let Some(hash) = contract.tx_hash.clone().filter(|h| !h.trim().is_empty()) {
                        code { class: "detail-hash-full", "{hash}" }
                    }
                }
            }
        }
    }
}
