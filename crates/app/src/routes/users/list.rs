use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{
    select_options, AppError, KycStatus, StatusVocabulary, UserAccount, UserQuery, UserRole,
};
use shared_ui::{Button, ButtonSize, ButtonVariant, Column};

use super::kyc_sheet::KycSheet;
use crate::components::{ListFilters, ListTable, StatusBadge};
use crate::format_helpers::{format_opt_date, format_score};
use crate::list_state::use_list_state;

/// Columns shared by both account lists.
fn identity_columns() -> Vec<Column<UserAccount>> {
    vec![
        Column::new("id", "ID", |u: &UserAccount| u.id.as_str().into())
            .sortable()
            .render(|u: &UserAccount| {
                let id = u.id.clone();
                rsx! { code { class: "cell-id", "{id}" } }
            }),
        Column::new("name", "Name", |u: &UserAccount| u.name.as_str().into()).sortable(),
    ]
}

fn contact_and_status_columns() -> Vec<Column<UserAccount>> {
    vec![
        Column::new("email", "Email", |u: &UserAccount| u.email.as_deref().into()).sortable(),
        Column::new("phone", "Phone", |u: &UserAccount| u.phone.as_deref().into()),
        Column::new("location", "Location", |u: &UserAccount| u.location.as_deref().into())
            .sortable(),
        Column::new("kyc", "KYC", |u: &UserAccount| u.kyc_status.label().into())
            .sortable()
            .render(|u: &UserAccount| rsx! { StatusBadge { status: u.kyc_status } }),
        Column::new("verified", "Verified on", |u: &UserAccount| {
            u.kyc_verified_at.as_deref().into()
        })
        .sortable()
        .render(|u: &UserAccount| {
            let date = format_opt_date(u.kyc_verified_at.as_deref());
            rsx! { "{date}" }
        }),
        Column::new("rating", "Rating", |u: &UserAccount| u.rating.into())
            .sortable()
            .render(|u: &UserAccount| {
                let score = format_score(u.rating);
                rsx! { span { class: "cell-number", "{score}" } }
            }),
        Column::new("account", "Account", |u: &UserAccount| u.account_status.label().into())
            .sortable()
            .render(|u: &UserAccount| rsx! { StatusBadge { status: u.account_status } }),
    ]
}

/// Columns for one role's list, without the trailing actions column.
fn user_columns(role: UserRole) -> Vec<Column<UserAccount>> {
    let mut columns = identity_columns();
    match role {
        UserRole::Employer => {
            columns.push(
                Column::new("company", "Company", |u: &UserAccount| u.company.as_deref().into())
                    .sortable(),
            );
            columns.push(
                Column::new("business", "Business field", |u: &UserAccount| {
                    u.business_field.as_deref().into()
                })
                .sortable(),
            );
        }
        _ => {
            columns.push(
                Column::new("skill", "Skill", |u: &UserAccount| u.skill.as_deref().into())
                    .sortable(),
            );
        }
    }
    columns.extend(contact_and_status_columns());
    columns
}

/// Button text for the actions column.
fn review_label(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Pending => "Review",
        _ => "Details",
    }
}

fn role_copy(role: UserRole) -> (&'static str, &'static str) {
    match role {
        UserRole::Employer => ("employers", "Search company, name, email or phone"),
        _ => ("workers", "Search name, skill, email or phone"),
    }
}

async fn fetch_users(client: ApiClient, query: UserQuery) -> Result<Vec<UserAccount>, AppError> {
    client.list_users(&query).await
}

/// Account list for one role with KYC review.
#[component]
pub fn UsersPage(role: UserRole) -> Element {
    let (noun, placeholder) = role_copy(role);
    let mut state = use_list_state(noun, move || UserQuery::for_role(role), fetch_users);
    let mut selected = use_signal(|| Option::<UserAccount>::None);

    let columns = use_hook(move || {
        let mut columns = user_columns(role);
        columns.push(
            Column::new("actions", "", |_: &UserAccount| Default::default()).render(
                move |u: &UserAccount| {
                    let label = review_label(u.kyc_status);
                    let row = u.clone();
                    rsx! {
                        Button {
                            variant: if u.kyc_status == KycStatus::Pending { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            size: ButtonSize::Small,
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                selected.set(Some(row.clone()));
                            },
                            "{label}"
                        }
                    }
                },
            ),
        );
        columns
    });

    rsx! {
        div { class: "list-page",
            ListFilters::<UserAccount, UserQuery> {
                state: state,
                placeholder: placeholder,
                status_label: "KYC status",
                status_options: select_options::<KycStatus>(),
            }
            ListTable::<UserAccount, UserQuery> {
                state: state,
                columns: columns,
                noun: noun,
                on_select: move |user: UserAccount| selected.set(Some(user)),
            }
        }

        if let Some(user) = selected() {
            KycSheet {
                key: "{user.id}",
                user: user,
                on_close: move |_| selected.set(None),
                on_updated: move |updated: UserAccount| {
                    let id = updated.id.clone();
                    state.replace_row(|row| row.id == id, updated);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(columns: &[Column<UserAccount>]) -> Vec<&'static str> {
        columns.iter().map(|c| c.key).collect()
    }

    #[test]
    fn worker_columns() {
        assert_eq!(
            keys(&user_columns(UserRole::Worker)),
            vec!["id", "name", "skill", "email", "phone", "location", "kyc", "verified", "rating", "account"]
        );
    }

    #[test]
    fn employer_columns_swap_skill_for_business() {
        let keys = keys(&user_columns(UserRole::Employer));
        assert!(keys.contains(&"company"));
        assert!(keys.contains(&"business"));
        assert!(!keys.contains(&"skill"));
    }

    #[test]
    fn pending_accounts_get_review_action() {
        assert_eq!(review_label(KycStatus::Pending), "Review");
        assert_eq!(review_label(KycStatus::Verified), "Details");
    }

    #[test]
    fn kyc_column_reads_label() {
        let columns = user_columns(UserRole::Worker);
        let kyc = columns.iter().find(|c| c.key == "kyc").unwrap();
        let user = UserAccount {
            kyc_status: KycStatus::Pending,
            ..Default::default()
        };
        assert_eq!((kyc.value)(&user).to_string(), "Pending review");
    }
}
