pub mod contracts;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod ratings;
pub mod settings;
pub mod users;

use crate::auth::use_auth;
use crate::format_helpers::initials;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdBuilding2, LdFileText, LdLayoutDashboard, LdLogOut, LdMoon, LdPanelLeft,
    LdSettings, LdStar, LdSun, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::StatusVocabulary;
use shared_ui::theme::ThemeState;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use contracts::Contracts;
use dashboard::Dashboard;
use jobs::Jobs;
use login::Login;
use not_found::NotFound;
use payments::Payments;
use ratings::Ratings;
use settings::Settings;
use users::{Employers, Workers};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/workers")]
    Workers {},
    #[route("/employers")]
    Employers {},
    #[route("/jobs")]
    Jobs {},
    #[route("/contracts")]
    Contracts {},
    #[route("/payments")]
    Payments {},
    #[route("/ratings")]
    Ratings {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Top bar title and subtitle.
    pub fn heading(&self) -> (&'static str, &'static str) {
        match self {
            Route::Dashboard {} => ("Dashboard", "Platform activity at a glance"),
            Route::Workers {} => ("Workers", "Day-labor worker accounts and KYC review"),
            Route::Employers {} => ("Employers", "Employer accounts and KYC review"),
            Route::Jobs {} => ("Jobs", "Open, running and archived job postings"),
            Route::Contracts {} => ("Contracts", "Digital contracts and their chain records"),
            Route::Payments {} => ("Payments", "Wages, escrow and settlement"),
            Route::Ratings {} => ("Ratings", "Two-way ratings and review moderation"),
            Route::Settings {} => ("Settings", "Appearance and connection details"),
            Route::Login { .. } | Route::NotFound { .. } => ("Admin", "Administration panel"),
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NavItem {
    Dashboard,
    Workers,
    Employers,
    Ratings,
    Jobs,
    Contracts,
    Payments,
    Settings,
}

/// Sidebar groups in display order.
const NAV_GROUPS: &[(&str, &[NavItem])] = &[
    ("Overview", &[NavItem::Dashboard]),
    ("People", &[NavItem::Workers, NavItem::Employers, NavItem::Ratings]),
    ("Work", &[NavItem::Jobs, NavItem::Contracts]),
    ("Finance", &[NavItem::Payments]),
    ("System", &[NavItem::Settings]),
];

impl NavItem {
    fn route(self) -> Route {
        match self {
            NavItem::Dashboard => Route::Dashboard {},
            NavItem::Workers => Route::Workers {},
            NavItem::Employers => Route::Employers {},
            NavItem::Ratings => Route::Ratings {},
            NavItem::Jobs => Route::Jobs {},
            NavItem::Contracts => Route::Contracts {},
            NavItem::Payments => Route::Payments {},
            NavItem::Settings => Route::Settings {},
        }
    }

    fn label(self) -> &'static str {
        self.route().heading().0
    }

    fn icon(self) -> Element {
        match self {
            NavItem::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            NavItem::Workers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            NavItem::Employers => rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 18, height: 18 } },
            NavItem::Ratings => rsx! { Icon::<LdStar> { icon: LdStar, width: 18, height: 18 } },
            NavItem::Jobs => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
            NavItem::Contracts => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            NavItem::Payments => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
            NavItem::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        }
    }
}

/// Where to return after signing in; the dashboard is implied.
fn login_redirect_for(route: &Route) -> Option<String> {
    match route {
        Route::Dashboard {} => None,
        other => Some(other.to_string()),
    }
}

/// Auth guard layout: redirects to /login when there is no session.
///
/// Waits for the stored session to be read before deciding, then checks
/// synchronously on every render. The token is never verified here; the
/// first `401` from the backend ends the session instead.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !auth.is_ready() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    if !auth.is_authenticated() {
        navigator().replace(Route::Login {
            redirect: login_redirect_for(&route),
        });
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Main app layout with sidebar and top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut theme_state: ThemeState = use_context();

    let (title, subtitle) = route.heading();
    let user = auth.current_user();
    let name = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Admin".to_string());
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let role = user.as_ref().map(|u| u.role.label()).unwrap_or("Admin");
    let avatar = initials(&name);
    let is_dark = (theme_state.is_dark)();
    let api_base = &client::config().api.base_url;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", "GL" }
                        span { class: "sidebar-brand-name", "Gig Labor Admin" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    for (label, items) in NAV_GROUPS.iter() {
                        SidebarGroup { key: "{label}", label: label.to_string(),
                            for item in items.iter() {
                                SidebarMenuItem { key: "{item:?}",
                                    Link { to: item.route(),
                                        SidebarMenuButton {
                                            active: item.route() == route,
                                            label: item.label().to_string(),
                                            icon: item.icon(),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-footer-text", "{api_base}" }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdPanelLeft> { icon: LdPanelLeft, width: 18, height: 18 }
                    }

                    Separator { horizontal: false }

                    div { class: "topbar-heading",
                        h1 { class: "topbar-title", "{title}" }
                        p { class: "topbar-subtitle", "{subtitle}" }
                    }

                    div { class: "topbar-spacer" }

                    if theme_state.mode_switchable() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                            onclick: move |_| {
                                theme_state.is_dark.set(!is_dark);
                                theme_state.apply();
                            },
                            if is_dark {
                                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                            } else {
                                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                            }
                        }
                    }

                    DropdownMenu {
                        DropdownMenuTrigger {
                            span { class: "topbar-user",
                                span { class: "topbar-avatar", "{avatar}" }
                                span { class: "topbar-user-name", "{name}" }
                            }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel {
                                strong { "{name}" }
                                span { "{email}" }
                                span { class: "topbar-role", "{role}" }
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "settings".to_string(),
                                index: 0usize,
                                on_select: move |_: String| {
                                    navigator().push(Route::Settings {});
                                },
                                Icon::<LdSettings> { icon: LdSettings, width: 14, height: 14 }
                                "Settings"
                            }
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 1usize,
                                on_select: move |_: String| {
                                    auth.logout();
                                    navigator().push(Route::Login { redirect: None });
                                },
                                Icon::<LdLogOut> { icon: LdLogOut, width: 14, height: 14 }
                                "Sign out"
                            }
                        }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
