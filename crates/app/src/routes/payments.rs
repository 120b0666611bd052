use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{select_options, AppError, ListQuery, Payment, PaymentStatus, StatusVocabulary};
use shared_ui::{Column, DetailItem, DetailList, DetailSection, Sheet, SheetContent, SheetHeader};

use crate::components::{ChainHash, ListFilters, ListTable, StatusBadge};
use crate::format_helpers::{format_currency, format_datetime_human, or_dash, EMPTY};
use crate::list_state::use_list_state;

fn payment_columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("id", "ID", |p: &Payment| p.id.as_str().into())
            .sortable()
            .render(|p: &Payment| {
                let id = p.id.clone();
                rsx! { code { class: "cell-id", "{id}" } }
            }),
        Column::new("contract", "Contract", |p: &Payment| p.contract_id.as_deref().into())
            .sortable(),
        Column::new("sender", "Sender", |p: &Payment| p.sender.as_deref().into()).sortable(),
        Column::new("receiver", "Receiver", |p: &Payment| p.receiver.as_deref().into())
            .sortable(),
        Column::new("amount", "Amount", |p: &Payment| p.amount.into())
            .sortable()
            .render(|p: &Payment| {
                let amount = format_currency(p.amount);
                rsx! { span { class: "cell-number", "{amount}" } }
            }),
        Column::new("method", "Method", |p: &Payment| p.method.label().into()).sortable(),
        Column::new("status", "Status", |p: &Payment| p.status.label().into())
            .sortable()
            .render(|p: &Payment| rsx! { StatusBadge { status: p.status } }),
    ]
}

async fn fetch_payments(client: ApiClient, query: ListQuery) -> Result<Vec<Payment>, AppError> {
    client.list_payments(&query).await
}

#[component]
pub fn Payments() -> Element {
    let state = use_list_state("payments", ListQuery::default, fetch_payments);
    let columns = use_hook(payment_columns);
    let mut selected = use_signal(|| Option::<Payment>::None);

    rsx! {
        div { class: "list-page",
            ListFilters::<Payment, ListQuery> {
                state: state,
                placeholder: "Search sender, receiver or reference",
                status_label: "Status",
                status_options: select_options::<PaymentStatus>(),
            }
            ListTable::<Payment, ListQuery> {
                state: state,
                columns: columns,
                noun: "payments",
                on_select: move |payment: Payment| selected.set(Some(payment)),
            }
        }

        if let Some(payment) = selected() {
            PaymentSheet { payment: payment, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn PaymentSheet(payment: Payment, on_close: EventHandler<()>) -> Element {
    let created = payment
        .created_at
        .as_deref()
        .map(format_datetime_human)
        .unwrap_or_else(|| EMPTY.to_string());

    rsx! {
        Sheet { open: true, on_close: on_close,
            SheetHeader {
                title: format!("Payment {}", payment.id),
                description: payment.method.label().to_string(),
                on_close: on_close,
            }
            SheetContent {
                DetailList {
                    DetailItem { label: "Amount", value: format_currency(payment.amount) }
                    DetailItem { label: "Status",
                        StatusBadge { status: payment.status }
                    }
                    DetailItem { label: "Method", value: payment.method.label() }
                    DetailItem { label: "Contract", value: or_dash(payment.contract_id.as_deref()) }
                    DetailItem { label: "Sender", value: or_dash(payment.sender.as_deref()) }
                    DetailItem { label: "Receiver", value: or_dash(payment.receiver.as_deref()) }
                    DetailItem { label: "Created", value: created }
                }
                DetailSection { title: "References",
                    DetailList {
                        DetailItem { label: "Idempotency key",
                            code { class: "detail-code", {or_dash(payment.idempotency_key.as_deref())} }
                        }
                        DetailItem { label: "External reference",
                            value: or_dash(payment.external_ref.as_deref()),
                        }
                        DetailItem { label: "Chain transaction",
                            ChainHash { value: payment.tx_hash.clone() }
                        }
                    }
                }
            }
        }
    }
}
