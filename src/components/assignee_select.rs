//! Assignee Selector Component
//!
//! Party dropdown shared by the create form and each todo row.

use leptos::prelude::*;

use crate::models::PARTIES;

/// Dropdown over [`PARTIES`] with a leading empty option.
///
/// A current value outside the suggestion set (assistant-supplied names) is
/// listed as an extra option so it stays visible.
#[component]
pub fn AssigneeSelect(
    #[prop(into)] value: Signal<String>,
    placeholder: &'static str,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let custom_option = move || {
        let current = value.get();
        if current.is_empty() || PARTIES.contains(&current.as_str()) {
            None
        } else {
            let label = current.clone();
            Some(view! { <option value=current prop:selected=true>{label}</option> })
        }
    };

    view! {
        <select
            class="assignee-select"
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="" prop:selected=move || value.get().is_empty()>{placeholder}</option>
            {PARTIES.iter().map(|party| {
                let is_selected = move || value.get() == *party;
                view! {
                    <option value=*party prop:selected=is_selected>{*party}</option>
                }
            }).collect_view()}
            {custom_option}
        </select>
    }
}
