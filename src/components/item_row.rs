//! Item Row Component
//!
//! One checklist row: packed checkbox, label, delete control.

use leptos::prelude::*;

use crate::models::{Command, Item};
use crate::store::use_app_store;

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class="item-row">
            <input
                type="checkbox"
                checked=packed
                on:change=move |_| store.dispatch(Command::ToggleItem(id))
            />
            <span class=if packed { "item-label packed" } else { "item-label" }>{label}</span>
            <button class="delete-btn" on:click=move |_| store.dispatch(Command::DeleteItem(id))>
                "×"
            </button>
        </li>
    }
}
