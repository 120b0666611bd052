use dioxus::prelude::*;
use shared_types::{
    select_options, KycStatus, StatusVocabulary, UserAccount, UserRole, VerifyKycRequest,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, DetailItem, DetailList, DetailSection, FormSelect, Sheet,
    SheetContent, SheetFooter, SheetHeader, SkeletonLines, Textarea,
};

use crate::auth::use_auth;
use crate::components::{ChainHash, ChainRef, StatusBadge};
use crate::format_helpers::{format_datetime_human, format_opt_date, format_score, or_dash, EMPTY};
use crate::notify::{report_error, report_success};

/// Decision preselected in the form: pending reviews default to approval.
fn default_decision(current: KycStatus) -> KycStatus {
    match current {
        KycStatus::Pending | KycStatus::Unverified | KycStatus::Unknown => KycStatus::Verified,
        other => other,
    }
}

/// A rejection without a reason leaves the account holder guessing.
fn decision_error(decision: KycStatus, note: &str) -> Option<&'static str> {
    match decision {
        KycStatus::Unknown => Some("Choose a KYC decision."),
        KycStatus::Rejected if note.trim().is_empty() => {
            Some("Add a note explaining the rejection.")
        }
        _ => None,
    }
}

fn success_message(user: &UserAccount) -> String {
    format!("{} marked as {}", user.name, user.kyc_status.label().to_lowercase())
}

/// Account detail with identity documents and the KYC decision form.
///
/// `user` is the list row; the full record is fetched on open.
#[component]
pub fn KycSheet(
    user: UserAccount,
    on_close: EventHandler<()>,
    on_updated: EventHandler<UserAccount>,
) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let id = use_signal(|| user.id.clone());
    let mut decision = use_signal(|| default_decision(user.kyc_status));
    let mut note = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<&'static str>::None);
    let mut saving = use_signal(|| false);

    let detail = use_resource(move || async move {
        let user_id = id();
        let result = auth.client().get_user(&user_id).await;
        if let Err(err) = &result {
            report_error(auth, toasts, "Could not load account details", err);
        }
        result
    });

    let full = match &*detail.read() {
        Some(Ok(record)) => record.clone(),
        _ => user.clone(),
    };
    let loading_detail = detail.read().is_none();

    let submit = move |_: MouseEvent| async move {
        let chosen = decision();
        if let Some(msg) = decision_error(chosen, &note.read()) {
            form_error.set(Some(msg));
            return;
        }
        form_error.set(None);
        saving.set(true);
        let request = VerifyKycRequest::new(chosen, &note.read());
        let user_id = id();
        let result = auth.client().verify_kyc(&user_id, &request).await;
        saving.set(false);
        match result {
            Ok(updated) => {
                report_success(toasts, success_message(&updated));
                on_updated.call(updated);
                on_close.call(());
            }
            Err(err) => report_error(auth, toasts, "Could not save KYC decision", &err),
        }
    };

    let role_title = match full.role {
        UserRole::Employer => "Employer account",
        UserRole::Worker => "Worker account",
        _ => "Account",
    };

    rsx! {
        Sheet { open: true, on_close: on_close,
            SheetHeader {
                title: full.display_company().to_string(),
                description: role_title.to_string(),
                on_close: on_close,
            }
            SheetContent {
                if loading_detail {
                    SkeletonLines { lines: 4 }
                }
                AccountDetails { user: full.clone() }
                DocumentsSection { user: full.clone() }

                DetailSection { title: "KYC decision",
                    div { class: "kyc-form",
                        div { class: "kyc-current",
                            span { "Current status" }
                            StatusBadge { status: full.kyc_status }
                        }
                        FormSelect {
                            label: "Decision",
                            value: decision().as_str().to_string(),
                            options: select_options::<KycStatus>(),
                            disabled: saving(),
                            on_change: move |key: String| decision.set(KycStatus::from_str_or_default(&key)),
                        }
                        Textarea {
                            label: "Admin note",
                            placeholder: "Visible to the account holder",
                            value: note(),
                            disabled: saving(),
                            on_input: move |evt: FormEvent| note.set(evt.value()),
                        }
                        if let Some(msg) = form_error() {
                            p { class: "form-error", role: "alert", "{msg}" }
                        }
                    }
                }
            }
            SheetFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: saving(),
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: if decision() == KycStatus::Rejected { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                    loading: saving(),
                    onclick: submit,
                    "Save decision"
                }
            }
        }
    }
}

#[component]
fn AccountDetails(user: UserAccount) -> Element {
    let last_active = user
        .last_active
        .as_deref()
        .map(format_datetime_human)
        .unwrap_or_else(|| EMPTY.to_string());

    rsx! {
        DetailList {
            DetailItem { label: "Account ID", value: user.id.clone() }
            DetailItem { label: "Name", value: user.name.clone() }
            DetailItem { label: "Email", value: or_dash(user.email.as_deref()) }
            DetailItem { label: "Phone", value: or_dash(user.phone.as_deref()) }
            if user.role == UserRole::Employer {
                DetailItem { label: "Company", value: or_dash(user.company.as_deref()) }
                DetailItem { label: "Business field", value: or_dash(user.business_field.as_deref()) }
                DetailItem { label: "Contact person", value: or_dash(user.contact_person.as_deref()) }
            } else {
                DetailItem { label: "Skill", value: or_dash(user.skill.as_deref()) }
            }
            DetailItem { label: "Location", value: or_dash(user.location.as_deref()) }
            DetailItem { label: "Rating", value: format_score(user.rating) }
            DetailItem { label: "Account",
                StatusBadge { status: user.account_status }
            }
            DetailItem { label: "Verified on", value: format_opt_date(user.kyc_verified_at.as_deref()) }
            DetailItem { label: "Last active", value: last_active }
            DetailItem { label: "Joined", value: format_opt_date(user.created_at.as_deref()) }
            DetailItem { label: "Wallet",
                ChainHash { value: user.wallet_address.clone(), kind: ChainRef::Address }
            }
        }
    }
}

#[component]
fn DocumentsSection(user: UserAccount) -> Element {
    let photo = user.photo_url.clone().filter(|u| !u.trim().is_empty());
    let id_card = user.id_card_url.clone().filter(|u| !u.trim().is_empty());

    rsx! {
        DetailSection { title: "Identity documents",
            div { class: "kyc-documents",
                DocumentImage { label: "Profile photo", url: photo }
                DocumentImage { label: "Identity card", url: id_card }
            }
        }
    }
}

#[component]
fn DocumentImage(label: &'static str, url: Option<String>) -> Element {
    rsx! {
        figure { class: "kyc-document",
            if let Some(url) = url {
                a { href: "{url}", target: "_blank", rel: "noopener noreferrer",
                    img { src: "{url}", alt: "{label}" }
                }
            } else {
                div { class: "kyc-document-missing", "Not uploaded" }
            }
            figcaption { "{label}" }
        }
    }
}
