//! Item List Component
//!
//! Sorted view of the checklist plus the sort selector and the clear-all
//! control. Sorting works on a copy; the stored list keeps input order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::list::sort_items;
use crate::models::{Command, SortBy};
use crate::store::use_app_store;

/// Checklist view with sort selector and clear button
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let (sort_by, set_sort_by) = signal(SortBy::default());

    let sorted_items = Memo::new(move |_| sort_items(&store.items(), sort_by.get()));

    view! {
        <div class="list">
            <ul>
                <For
                    each=move || sorted_items.get()
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
            <div class="actions">
                <select
                    prop:value=move || sort_by.get().as_str()
                    on:change=move |ev| {
                        set_sort_by.set(SortBy::from_str(&event_target_value(&ev)));
                    }
                >
                    {SortBy::ALL
                        .iter()
                        .map(|&option| {
                            view! { <option value=option.as_str()>{option.label()}</option> }
                        })
                        .collect_view()}
                </select>
                <button class="clear-btn" on:click=move |_| store.dispatch(Command::Reset)>
                    "Clear list"
                </button>
            </div>
        </div>
    }
}
