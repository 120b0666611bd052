//! Worker and employer account pages. Both list `/admin/users` with the
//! role fixed and share the KYC review sheet.

mod kyc_sheet;
mod list;

use dioxus::prelude::*;
use shared_types::UserRole;

use list::UsersPage;

#[component]
pub fn Workers() -> Element {
    rsx! { UsersPage { role: UserRole::Worker } }
}

#[component]
pub fn Employers() -> Element {
    rsx! { UsersPage { role: UserRole::Employer } }
}
