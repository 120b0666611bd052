use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdBuilding2, LdClock, LdFileText, LdRefreshCw, LdShieldCheck, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::PlatformStats;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, StatCard,
};

use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_currency};
use crate::notify::report_error;
use crate::routes::Route;

/// Number of stat cards, also the skeleton count while loading.
const STAT_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatIcon {
    Workers,
    Employers,
    Jobs,
    Contracts,
    Payments,
    Kyc,
    Volume,
}

impl StatIcon {
    fn render(self) -> Element {
        match self {
            StatIcon::Workers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            StatIcon::Employers => rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 18, height: 18 } },
            StatIcon::Jobs => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
            StatIcon::Contracts => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            StatIcon::Payments => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
            StatIcon::Kyc => rsx! { Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 18, height: 18 } },
            StatIcon::Volume => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
        }
    }
}

/// One headline number on the dashboard.
#[derive(Debug, Clone, PartialEq)]
struct StatEntry {
    label: &'static str,
    value: String,
    hint: &'static str,
    icon: StatIcon,
    /// Page the card links to.
    route: Route,
}

fn stat_entries(stats: &PlatformStats) -> Vec<StatEntry> {
    vec![
        StatEntry {
            label: "Workers",
            value: format_count(stats.total_workers),
            hint: "Registered day-labor accounts",
            icon: StatIcon::Workers,
            route: Route::Workers {},
        },
        StatEntry {
            label: "Employers",
            value: format_count(stats.total_employers),
            hint: "Registered employer accounts",
            icon: StatIcon::Employers,
            route: Route::Employers {},
        },
        StatEntry {
            label: "Active jobs",
            value: format_count(stats.active_jobs),
            hint: "Open or in progress",
            icon: StatIcon::Jobs,
            route: Route::Jobs {},
        },
        StatEntry {
            label: "Active contracts",
            value: format_count(stats.active_contracts),
            hint: "Signed and running",
            icon: StatIcon::Contracts,
            route: Route::Contracts {},
        },
        StatEntry {
            label: "Pending payments",
            value: format_count(stats.pending_payments),
            hint: "Awaiting settlement",
            icon: StatIcon::Payments,
            route: Route::Payments {},
        },
        StatEntry {
            label: "Pending KYC",
            value: format_count(stats.pending_kyc),
            hint: "Identity checks to review",
            icon: StatIcon::Kyc,
            route: Route::Workers {},
        },
        StatEntry {
            label: "Settled volume",
            value: format_currency(stats.settled_volume),
            hint: "Successful payments to date",
            icon: StatIcon::Volume,
            route: Route::Payments {},
        },
    ]
}

/// Platform summary built from `GET /admin/stats`.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let toasts = use_toast();

    let mut stats = use_resource(move || async move {
        let result = auth.client().stats().await;
        if let Err(err) = &result {
            report_error(auth, toasts, "Could not load platform stats", err);
        }
        result
    });

    let loading = stats.read().is_none();
    let refresh = rsx! {
        Button {
            variant: ButtonVariant::Outline,
            loading: loading,
            onclick: move |_| stats.restart(),
            Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
            "Refresh"
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                title: "Overview",
                description: "Headline numbers across the marketplace",
                actions: refresh,
            }

            {match &*stats.read() {
                None => rsx! { LoadingCards {} },
                Some(Err(err)) => {
                    let message = err.friendly_message();
                    rsx! {
                        Card { class: "dashboard-error",
                            CardHeader {
                                CardTitle { "Stats unavailable" }
                                CardDescription { "The platform summary could not be loaded." }
                            }
                            CardContent {
                                p { class: "dashboard-error-text", "{message}" }
                                Button {
                                    onclick: move |_| stats.restart(),
                                    "Retry"
                                }
                            }
                        }
                    }
                }
                Some(Ok(data)) => rsx! {
                    div { class: "stats-grid",
                        for entry in stat_entries(data) {
                            Link { key: "{entry.label}", class: "stats-link", to: entry.route.clone(),
                                StatCard {
                                    label: entry.label.to_string(),
                                    value: entry.value.clone(),
                                    hint: entry.hint.to_string(),
                                    icon: entry.icon.render(),
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn LoadingCards() -> Element {
    rsx! {
        div { class: "stats-grid",
            for i in 0..STAT_COUNT {
                StatCard { key: "{i}", label: "", value: "", loading: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_entry_per_stat() {
        let stats = PlatformStats {
            total_workers: 1250,
            total_employers: 87,
            active_jobs: 14,
            active_contracts: 9,
            pending_payments: 3,
            pending_kyc: 21,
            settled_volume: Some(1_250_000.0),
        };
        let entries = stat_entries(&stats);
        assert_eq!(entries.len(), STAT_COUNT);
        assert_eq!(entries[0].value, "1.250");
        assert_eq!(entries[5].label, "Pending KYC");
        assert_eq!(entries[5].route, Route::Workers {});
        assert_eq!(entries[6].value, "Rp 1.250.000");
    }

    #[test]
    fn missing_volume_renders_dash() {
        let entries = stat_entries(&PlatformStats::default());
        assert_eq!(entries[6].value, "-");
        assert_eq!(entries[0].value, "0");
    }
}
