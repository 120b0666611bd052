use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdRotateCcw, LdSearch};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, FormSelect, Input, SearchBar};

use crate::list_state::{FilterQuery, ListState};

/// Search box, status select and Search/Reset actions for a list page.
///
/// Search applies on the button or Enter; the status select applies at once.
#[component]
pub fn ListFilters<T: Clone + PartialEq + 'static, Q: FilterQuery>(
    state: ListState<T, Q>,
    placeholder: &'static str,
    status_label: &'static str,
    status_options: Vec<(String, String)>,
) -> Element {
    let mut state = state;
    let status = state.query.read().status().to_string();
    let filtered = state.is_filtered() || !state.search_input.read().is_empty();

    rsx! {
        SearchBar {
            Input {
                value: state.search_input.read().clone(),
                placeholder: placeholder.to_string(),
                label: "Search",
                on_input: move |evt: FormEvent| state.search_input.set(evt.value()),
                on_enter: move |_| state.submit_search(),
            }
            FormSelect {
                label: status_label.to_string(),
                value: status,
                placeholder: "All".to_string(),
                options: status_options,
                on_change: move |value: String| state.set_status(value),
            }
            div { class: "list-filters-actions",
                Button {
                    onclick: move |_| state.submit_search(),
                    Icon::<LdSearch> { icon: LdSearch, width: 14, height: 14 }
                    "Search"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !filtered,
                    onclick: move |_| state.reset(),
                    Icon::<LdRotateCcw> { icon: LdRotateCcw, width: 14, height: 14 }
                    "Reset"
                }
            }
        }
    }
}
